//! Plain-text decklist parsing.
//!
//! One entry per line: `<quantity> <card name>`, where the quantity may carry
//! one trailing letter (`4x Lightning Bolt`). Anything else is kept as a
//! comment so it can be echoed into reports in its original position.

use crate::error::{Error, Result};
use log::{debug, error, info};
use std::path::Path;

/// Renderings of the U+2019 apostrophe (bytes E2 80 99) that show up in
/// exported decklists, all repaired to a plain `'`.
const APOSTROPHE_REPAIRS: &[&str] = &[
    // Correctly decoded UTF-8
    "\u{2019}",
    // UTF-8 bytes read as Latin-1
    "\u{e2}\u{80}\u{99}",
    // UTF-8 bytes read as Windows-1252
    "\u{e2}\u{20ac}\u{2122}",
];

/// A single line of a decklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecklistEntry {
    /// Free text, kept verbatim including its line terminator
    Comment(String),
    /// A wanted (or owned) card
    CardLine { quantity: u32, name: String },
}

impl DecklistEntry {
    /// Parse one decklist line.
    ///
    /// Lines that do not start with a quantity followed by a name become
    /// [`DecklistEntry::Comment`]; they are never dropped.
    pub fn parse_line(line: &str) -> Self {
        let Some((quantity_token, name)) = line.trim().split_once(' ') else {
            return DecklistEntry::Comment(line.to_string());
        };

        let Some(quantity) = parse_quantity(quantity_token) else {
            debug!("No quantity in decklist line, keeping as comment: {line:?}");
            return DecklistEntry::Comment(line.to_string());
        };

        DecklistEntry::CardLine {
            quantity,
            name: repair_apostrophes(name.trim_start()),
        }
    }

    /// Quantity and name for card lines, `None` for comments
    pub fn card(&self) -> Option<(u32, &str)> {
        match self {
            DecklistEntry::CardLine { quantity, name } => Some((*quantity, name.as_str())),
            DecklistEntry::Comment(_) => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, DecklistEntry::Comment(_))
    }
}

/// Integer quantity, tolerating one trailing character ("4x", "4X").
fn parse_quantity(token: &str) -> Option<u32> {
    token.parse().ok().or_else(|| {
        let mut chars = token.chars();
        if chars.next_back()?.is_ascii_digit() {
            return None;
        }
        chars.as_str().parse().ok()
    })
}

/// Replace mis-encoded apostrophes in a card name with `'`
pub fn repair_apostrophes(name: &str) -> String {
    APOSTROPHE_REPAIRS
        .iter()
        .fold(name.to_string(), |acc, broken| acc.replace(broken, "'"))
}

/// Decode file contents as UTF-8, falling back to Latin-1
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("Decklist is not valid UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Read and parse a decklist file, one entry per line in file order.
pub fn read_decklist<P: AsRef<Path>>(path: P) -> Result<Vec<DecklistEntry>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<DecklistEntry> = decode_text(bytes)
        .split_inclusive('\n')
        .map(DecklistEntry::parse_line)
        .collect();

    info!(
        "Read {} entries ({} cards) from {}",
        entries.len(),
        entries.iter().filter(|e| !e.is_comment()).count(),
        path.display()
    );

    Ok(entries)
}

/// Like [`read_decklist`], but an unreadable file is logged and yields an
/// empty list so a run can continue without it.
pub fn load_decklist<P: AsRef<Path>>(path: P) -> Vec<DecklistEntry> {
    match read_decklist(path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
