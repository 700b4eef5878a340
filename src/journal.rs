//! An append-only journal whose one job is keeping entries in order.
//!
//! [`Journal::save`] couples storage into the type and is kept as the
//! counterexample. The decoupled way to persist a journal, or anything
//! else renderable, is [`crate::persistence::save_to_file`].

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Ordered text entries, each prefixed with its insertion number.
///
/// The counter starts at 1 and only moves forward. Removing an entry
/// never renumbers the rest, so the surviving prefixes still tell the
/// insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` under the next insertion number.
    pub fn add_entry(&mut self, text: &str) {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
    }

    /// Remove the entry at zero-based `pos`, keeping the others in order.
    pub fn remove_entry(&mut self, pos: usize) -> Result<()> {
        if pos >= self.entries.len() {
            bail!(
                "no entry at position {} (journal has {})",
                pos,
                self.entries.len()
            );
        }
        self.entries.remove(pos);
        Ok(())
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the journal to `path` from inside the journal itself.
    ///
    /// Kept as the single-responsibility counterexample: the journal now
    /// owns entry order *and* file I/O. Prefer
    /// [`crate::persistence::save_to_file`].
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())
            .with_context(|| format!("failed to write journal to {}", path.display()))
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}
