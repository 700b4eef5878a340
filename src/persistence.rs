//! Persistence split out from the values it persists.
//!
//! Types stay in charge of what they look like, via [`std::fmt::Display`];
//! this module is in charge of where the text goes. The split is the whole
//! point of the journal example.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `value`'s rendering to `path`, replacing any previous content.
///
/// The path is used as given. Failures carry the path in the error chain.
pub fn save_to_file(value: &impl Display, path: &Path) -> Result<()> {
    fs::write(path, value.to_string())
        .with_context(|| format!("failed to write {}", path.display()))
}
