use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

/// Run the duet emulator in the foreground, streaming its log.
pub fn run(fast: bool) -> Result<()> {
    println!();
    println!("{}", "🎵 Starting duet emulator...".cyan().bold());
    println!();

    let mut cmd = Command::new("cargo");
    cmd.args([
        "run",
        "-p",
        "firmware",
        "--example",
        "duet_emulator",
        "--features",
        "emulator",
    ]);
    if fast {
        cmd.args(["--", "--fast"]);
    }

    let status = cmd.status().context("Failed to run the emulator")?;
    if !status.success() {
        anyhow::bail!("Emulator exited with {status}");
    }

    println!();
    Ok(())
}
