//! `solid devices`: the interface segregation demo.

use anyhow::Result;
use colored::Colorize;

use solid_kata::devices::{
    Document, InkjetPrinter, Machine, MultiFunction, MultiFunctionMachine, OldFashionedPrinter,
    Photocopier, Printer,
};
use solid_kata::ui;

/// A routine that genuinely needs both capabilities.
fn copy_job(device: &impl MultiFunction, document: &Document) -> Result<()> {
    device.print(document)?;
    device.scan(document)
}

pub fn cmd_devices() -> Result<()> {
    println!("{}", ui::section("Interface Segregation: office devices"));

    let report = Document::new("quarterly report");

    println!(
        "{}",
        ui::note("fat trait: OldFashionedPrinter must answer for all three operations")
    );
    let old = OldFashionedPrinter;
    old.print(&report)?;
    println!("{}", ui::pass("print: supported"));
    old.fax(&report)?;
    println!("{}", ui::fail("fax: returned Ok and did nothing"));
    if let Err(err) = old.scan(&report) {
        println!("{}", ui::fail(&format!("scan: {}", err)));
    }

    println!(
        "{}",
        ui::note("narrow traits: each device declares only what it has")
    );
    let inkjet = InkjetPrinter;
    inkjet.print(&report)?;
    println!(
        "{}",
        ui::pass(&format!("{} printed via Printer", "InkjetPrinter".cyan()))
    );

    let copier = Photocopier;
    copy_job(&copier, &report)?;
    println!(
        "{}",
        ui::pass(&format!(
            "{} handled a copy job via MultiFunction",
            "Photocopier".cyan()
        ))
    );

    let machine = MultiFunctionMachine::new(InkjetPrinter, Photocopier);
    copy_job(&machine, &report)?;
    println!(
        "{}",
        ui::pass("MultiFunctionMachine delegated the same job to its parts")
    );

    Ok(())
}
