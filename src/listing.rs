//! Plain-text and JSON listings of loaded aliases, used by `--list`

use unicode_width::UnicodeWidthStr;

use crate::AliasEntry;

/// Two-column listing: identifiers padded to the widest one, then the command.
pub fn format_table(entries: &[AliasEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.identifier().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let ident = entry.identifier();
        let pad = width - ident.width();
        out.push_str(ident);
        out.push_str(&" ".repeat(pad + 2));
        out.push_str(&entry.command);
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of `{ "name", "command" }` objects.
pub fn format_json(entries: &[AliasEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
