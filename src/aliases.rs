//! Alias loader.
//!
//! Scans a bash alias dotfile line by line and keeps every line whose first
//! token is the `alias` keyword. The line is split on its first `=`: the text
//! before it (keyword included) is the alias name, the rest is the command,
//! both kept verbatim.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{AliasmanConfig, AliasmanError, Result};

const ALIAS_KEYWORD: &str = "alias";

/// One `alias name=command` declaration, in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    /// Everything before the first `=`, including the `alias` keyword
    pub name: String,
    /// Everything after the first `=`, unparsed
    pub command: String,
}

impl AliasEntry {
    /// The alias name without the leading keyword, e.g. `gs` for `alias gs`.
    pub fn identifier(&self) -> &str {
        self.name
            .strip_prefix(ALIAS_KEYWORD)
            .unwrap_or(&self.name)
            .trim()
    }
}

/// Load the invoking user's aliases from the configured dotfile.
pub fn load_user_aliases(config: &AliasmanConfig) -> Result<Vec<AliasEntry>> {
    load_aliases(&config.aliases_file)
}

/// Open `path` and parse every alias declaration in it.
pub fn load_aliases(path: &Path) -> Result<Vec<AliasEntry>> {
    let file = File::open(path).map_err(|source| AliasmanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_aliases(BufReader::new(file), path)?;
    debug!("Loaded {} aliases from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parse alias declarations from any buffered reader.
///
/// `path` is only used for diagnostics. Lines are decoded lossily, so stray
/// non-UTF-8 bytes never abort the scan. A qualifying line without `=` is
/// skipped with a warning; an I/O error aborts the scan.
pub fn parse_aliases<R: BufRead>(mut reader: R, path: &Path) -> Result<Vec<AliasEntry>> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| AliasmanError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        if !is_alias_line(&line) {
            continue;
        }

        match line.split_once('=') {
            Some((name, command)) => entries.push(AliasEntry {
                name: name.to_string(),
                command: command.to_string(),
            }),
            None => warn!(
                "Skipping malformed alias at {}:{} (no '=')",
                path.display(),
                line_no
            ),
        }
    }

    Ok(entries)
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// True when the first whitespace-delimited token is exactly `alias`.
fn is_alias_line(line: &str) -> bool {
    line.split(char::is_whitespace).next() == Some(ALIAS_KEYWORD)
}
