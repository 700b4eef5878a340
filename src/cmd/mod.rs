//! Command module structure for the solid CLI

use anyhow::Result;
use std::path::Path;

pub mod catalog;
pub mod devices;
pub mod journal;
pub mod shapes;

/// Run every demo in sequence, in the order the principles are usually
/// taught.
pub fn run_all(journal_output: &Path) -> Result<()> {
    journal::cmd_journal(journal_output)?;
    println!();
    catalog::cmd_catalog(false)?;
    println!();
    shapes::cmd_shapes()?;
    println!();
    devices::cmd_devices()
}
