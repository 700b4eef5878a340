//! CLI entry point and command dispatch for solid.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solid")]
#[command(version)]
#[command(about = "Runnable SOLID design-principle demos", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    solid all                  Walk through every demo in sequence\n    solid journal              Run a single demo (journal, catalog, shapes, devices)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Single Responsibility: a journal with persistence split out
    Journal {
        /// File the journal is saved to
        #[arg(long, default_value = "Journal.txt")]
        output: PathBuf,
    },
    /// Open/Closed: product filtering with composable specifications
    Catalog {
        /// Also print the combined-filter matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Liskov Substitution: the square that breaks the rectangle contract
    Shapes,
    /// Interface Segregation: one fat machine trait vs narrow capabilities
    Devices,
    /// Run every demo in sequence
    All {
        /// File the journal demo writes to
        #[arg(long, default_value = "Journal.txt")]
        output: PathBuf,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Journal { output } => cmd::journal::cmd_journal(&output),
        Commands::Catalog { json } => cmd::catalog::cmd_catalog(json),
        Commands::Shapes => cmd::shapes::cmd_shapes(),
        Commands::Devices => cmd::devices::cmd_devices(),
        Commands::All { output } => cmd::run_all(&output),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "solid", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("solid {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}
