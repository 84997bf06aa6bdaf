//! One `cargo` invocation with progress output.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// What a failing step does to the overall task.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Print the error output and abort.
    Abort,
    /// Print a warning and carry on.
    Warn,
}

/// A labelled cargo command.
pub struct Step<'a> {
    pub label: &'a str,
    pub args: &'a [&'a str],
    pub on_failure: OnFailure,
}

impl<'a> Step<'a> {
    pub const fn fatal(label: &'a str, args: &'a [&'a str]) -> Self {
        Self {
            label,
            args,
            on_failure: OnFailure::Abort,
        }
    }

    pub const fn advisory(label: &'a str, args: &'a [&'a str]) -> Self {
        Self {
            label,
            args,
            on_failure: OnFailure::Warn,
        }
    }

    /// Run the step. Returns the captured output when it succeeded.
    pub fn run(&self) -> Result<Option<Output>> {
        println!("{}", format!("  {}...", self.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(self.args)
            .output()
            .with_context(|| format!("Failed to run: cargo {}", self.args.join(" ")))?;

        if output.status.success() {
            println!(
                "{}",
                format!("  ✓ {} in {:.2}s", self.label, start.elapsed().as_secs_f64()).green()
            );
            println!();
            return Ok(Some(output));
        }

        match self.on_failure {
            OnFailure::Abort => {
                eprintln!("{}", format!("  ✗ {} failed", self.label).red().bold());
                eprintln!();
                eprintln!("{}", String::from_utf8_lossy(&output.stderr));
                eprintln!("{}", String::from_utf8_lossy(&output.stdout));
                anyhow::bail!("{} failed", self.label);
            }
            OnFailure::Warn => {
                eprintln!("{}", format!("  ⚠ {} reported problems", self.label).yellow().bold());
                eprintln!();
                Ok(None)
            }
        }
    }
}
