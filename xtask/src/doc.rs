use anyhow::Result;
use colored::Colorize;

use crate::step::Step;

/// Document the host-buildable side of the workspace.
///
/// The hardware driver only builds for the target, so the firmware crate
/// is documented with the emulator backend.
pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let mut args = vec![
        "doc",
        "--no-deps",
        "--document-private-items",
        "-p",
        "platform",
        "-p",
        "playback",
        "-p",
        "firmware",
        "--features",
        "firmware/emulator",
    ];
    if open {
        args.push("--open");
    }

    Step::fatal("rustdoc", &args).run()?;

    if !open {
        println!(
            "   {}",
            "Open target/doc/playback/index.html in your browser".dimmed()
        );
        println!();
    }

    Ok(())
}
