//! Aliasman - terminal menu for shell aliases
//!
//! Loads the `alias name=command` lines from `~/.bash_aliases` and presents
//! an interactive, cursor-driven menu in the terminal.

pub mod aliases;
pub mod listing;
pub mod tui;

pub use aliases::{load_aliases, load_user_aliases, parse_aliases, AliasEntry};

use std::path::PathBuf;

/// File name of the alias dotfile, relative to the user's home directory
pub const ALIASES_FILE_NAME: &str = ".bash_aliases";

/// Configuration for Aliasman
#[derive(Debug, Clone)]
pub struct AliasmanConfig {
    /// Path to the alias dotfile
    pub aliases_file: PathBuf,

    /// Whether to emit debug logging
    pub verbose: bool,
}

impl AliasmanConfig {
    pub fn new(home: PathBuf) -> Self {
        Self {
            aliases_file: home.join(ALIASES_FILE_NAME),
            verbose: false,
        }
    }

    /// Build the configuration for the invoking user.
    ///
    /// There is no fallback when the home directory cannot be resolved.
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or(AliasmanError::HomeDirNotFound)?;
        Ok(Self::new(home))
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Result type for Aliasman operations
pub type Result<T> = std::result::Result<T, AliasmanError>;

/// Errors that can occur in Aliasman
#[derive(Debug, thiserror::Error)]
pub enum AliasmanError {
    #[error("Failed to get the user's home directory")]
    HomeDirNotFound,

    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
