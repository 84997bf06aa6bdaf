use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

use crate::step::Step;
use crate::{CHIP, TARGET};

const BUILD_DEBUG: &[&str] = &[
    "build", "-p", "firmware", "--target", TARGET, "--features", "hardware",
];
const BUILD_RELEASE: &[&str] = &[
    "build", "-p", "firmware", "--target", TARGET, "--features", "hardware", "--release",
];

/// Build the firmware, report its section sizes and run it under probe-rs.
///
/// `probe-rs run` stays attached after flashing and streams the defmt log
/// until interrupted.
pub fn run(release: bool) -> Result<()> {
    let profile = if release { "release" } else { "debug" };

    println!();
    println!(
        "{}",
        format!("🔨 Building firmware ({profile})...").cyan().bold()
    );
    println!();

    let build = if release { BUILD_RELEASE } else { BUILD_DEBUG };
    Step::fatal("Firmware build", build).run()?;

    let elf = format!("target/{TARGET}/{profile}/firmware");
    print_sections(&elf);

    println!("{}", format!("📡 Flashing {CHIP}...").cyan().bold());
    println!("   {}", "Press the user button to play the demo song".dimmed());
    println!("   {}", "Ctrl-C detaches".dimmed());
    println!();

    let status = Command::new("probe-rs")
        .args(["run", "--chip", CHIP, elf.as_str()])
        .status()
        .context("Failed to run probe-rs. Is probe-rs installed? (cargo install probe-rs-tools)")?;

    if !status.success() {
        eprintln!("{}", "✗ probe-rs session failed".red().bold());
        anyhow::bail!("probe-rs exited with {status}; is the NUCLEO board connected?");
    }

    Ok(())
}

/// Flash and RAM usage per section. Skipped quietly without `rust-size`.
fn print_sections(elf: &str) {
    let Ok(out) = Command::new("rust-size").args(["-A", elf]).output() else {
        return;
    };
    if !out.status.success() {
        return;
    }

    println!("{}", "📊 Sections:".cyan());
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .filter(|line| {
            [".vector_table", ".text", ".rodata", ".data", ".bss"]
                .iter()
                .any(|section| line.starts_with(section))
        })
        .for_each(|line| println!("   {}", line.dimmed()));
    println!();
}
