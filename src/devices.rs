//! Office devices, first behind one fat trait, then behind narrow ones.
//!
//! [`Machine`] demands print, fax, and scan from every implementer, so
//! print-only hardware ends up with methods it cannot honor. The
//! segregated [`Printer`] and [`Scanner`] traits let each device declare
//! exactly what it supports, and [`MultiFunctionMachine`] composes one of
//! each back into a combined device.

use std::fmt;

use anyhow::{bail, Result};

/// A document handed to print, fax, and scan operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The fat interface: every machine must answer for all three operations.
pub trait Machine {
    fn print(&self, document: &Document) -> Result<()>;
    fn fax(&self, document: &Document) -> Result<()>;
    fn scan(&self, document: &Document) -> Result<()>;
}

/// High-end hardware that genuinely supports everything [`Machine`] demands.
#[derive(Debug)]
pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, _document: &Document) -> Result<()> {
        Ok(())
    }

    fn fax(&self, _document: &Document) -> Result<()> {
        Ok(())
    }

    fn scan(&self, _document: &Document) -> Result<()> {
        Ok(())
    }
}

/// Print-only hardware forced through the fat interface.
///
/// The two operations it lacks stay visible to every caller: `fax`
/// pretends by doing nothing, `scan` refuses outright. Both are the cost
/// of the oversized trait and are kept that way on purpose.
#[derive(Debug)]
pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn print(&self, _document: &Document) -> Result<()> {
        Ok(())
    }

    // Callable and useless.
    fn fax(&self, _document: &Document) -> Result<()> {
        Ok(())
    }

    // Unsupported, and only discoverable at call time.
    fn scan(&self, _document: &Document) -> Result<()> {
        bail!("OldFashionedPrinter cannot scan")
    }
}

/// The print capability on its own.
pub trait Printer {
    fn print(&self, document: &Document) -> Result<()>;
}

/// The scan capability on its own.
pub trait Scanner {
    fn scan(&self, document: &Document) -> Result<()>;
}

/// Declares only the one capability it has.
#[derive(Debug)]
pub struct InkjetPrinter;

impl Printer for InkjetPrinter {
    fn print(&self, document: &Document) -> Result<()> {
        println!("{}", document);
        Ok(())
    }
}

/// Combined hardware that declares both capabilities.
#[derive(Debug)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, _document: &Document) -> Result<()> {
        Ok(())
    }
}

impl Scanner for Photocopier {
    fn scan(&self, _document: &Document) -> Result<()> {
        Ok(())
    }
}

/// Print and scan together. Anything that has both capabilities gets this
/// for free.
pub trait MultiFunction: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunction for T {}

/// A combined device built from one printer and one scanner.
#[derive(Debug)]
pub struct MultiFunctionMachine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultiFunctionMachine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Printer, S: Scanner> Printer for MultiFunctionMachine<P, S> {
    fn print(&self, document: &Document) -> Result<()> {
        self.printer.print(document)
    }
}

impl<P: Printer, S: Scanner> Scanner for MultiFunctionMachine<P, S> {
    fn scan(&self, document: &Document) -> Result<()> {
        self.scanner.scan(document)
    }
}
