//! Aliasman CLI
//!
//! Loads `~/.bash_aliases` and opens the interactive alias menu.

use aliasman::listing::{format_json, format_table};
use aliasman::tui::{App, Menu};
use aliasman::{load_user_aliases, AliasmanConfig};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Aliasman - browse and manage your bash aliases
#[derive(Parser, Debug)]
#[command(name = "aliasman")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the loaded aliases and exit instead of opening the menu
    #[arg(long)]
    list: bool,

    /// With --list, print the aliases as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Verbose output: debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AliasmanConfig::discover()?.with_verbose(cli.verbose);
    init_logging(&config);
    debug!("Alias file: {:?}", config.aliases_file);

    // Every startup error below is fatal; there is no degraded mode.
    let aliases = load_user_aliases(&config)?;
    info!("Loaded {} aliases", aliases.len());

    if cli.list {
        let output = if cli.json {
            let mut json = format_json(&aliases)?;
            json.push('\n');
            json
        } else {
            format_table(&aliases)
        };
        io::stdout().write_all(output.as_bytes())?;
        return Ok(());
    }

    // The menu actions do not consume the alias list yet.
    run_tui()
}

fn run_tui() -> anyhow::Result<()> {
    let mut app = App::new(Menu::new())?;
    app.run()?;
    drop(app);
    debug!("Menu closed");
    Ok(())
}

/// Logs go to stderr so they never mix with `--list` output.
fn init_logging(config: &AliasmanConfig) {
    let default = if config.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
