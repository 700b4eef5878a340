//! `solid journal`: the single-responsibility demo.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use solid_kata::journal::Journal;
use solid_kata::persistence;
use solid_kata::{ui, utc_now_iso};

pub fn cmd_journal(output: &Path) -> Result<()> {
    println!("{}", ui::section("Single Responsibility: journal"));

    let mut journal = Journal::new();
    journal.add_entry("Hello!");
    journal.add_entry("Started the kata.");
    journal.add_entry("Scratch this one.");

    println!("{}", ui::note("three entries, numbered as they arrive"));
    println!("{}", journal);

    journal.remove_entry(2)?;
    println!(
        "{}",
        ui::note("after removing position 2; the survivors keep their numbers")
    );
    println!("{}", journal);

    if let Err(err) = journal.remove_entry(9) {
        println!("{}", ui::fail(&format!("remove_entry(9): {}", err)));
    }

    println!(
        "{}",
        ui::note("saving is someone else's job; the journal only renders itself")
    );
    persistence::save_to_file(&journal, output)?;
    println!(
        "{}",
        ui::pass(&format!(
            "saved to {} at {}",
            output.display().to_string().cyan(),
            utc_now_iso()
        ))
    );

    Ok(())
}
