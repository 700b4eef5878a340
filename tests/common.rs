//! Common test helpers for integration tests

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// TestHarness provides an isolated working directory for driving the
/// solid binary. The directory is auto-cleaned on drop, so demos that
/// write files (the journal demo) leave nothing behind.
pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the solid binary with the given arguments in the harness
    /// directory.
    pub fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_solid"))
            .args(args)
            .current_dir(self.path())
            .output()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished run, lossily decoded.
pub fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished run, lossily decoded.
pub fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
