use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::Step;

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    let mut steps = Vec::new();
    if !integration_only {
        steps.push(Step::fatal("Unit tests", &["test", "--lib", "--workspace"]));
        steps.push(Step::fatal(
            "Emulator unit tests",
            &["test", "--lib", "-p", "firmware", "--features", "emulator"],
        ));
    }
    if !unit_only {
        steps.push(Step::fatal(
            "Integration tests",
            &["test", "--tests", "--workspace", "--exclude", "xtask"],
        ));
    }
    steps.push(Step::advisory("Doc tests", &["test", "--doc", "--workspace"]));

    for step in &steps {
        if let Some(output) = step.run()? {
            let summary = TestSummary::parse(&String::from_utf8_lossy(&output.stdout));
            println!("     {}", summary.to_string().dimmed());
            println!();
        }
    }

    println!(
        "{}",
        format!(
            "✓ All tests completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

/// Totals across every "test result:" line of a cargo test run.
#[derive(Debug, Default, PartialEq, Eq)]
struct TestSummary {
    passed: u32,
    failed: u32,
    ignored: u32,
}

impl TestSummary {
    // Lines look like "test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out"
    fn parse(output: &str) -> Self {
        let mut summary = Self::default();
        for line in output.lines() {
            let Some(counts) = line.split("test result:").nth(1) else {
                continue;
            };
            for part in counts.split(';') {
                let mut words = part.split_whitespace().rev();
                let (Some(kind), Some(n)) = (words.next(), words.next()) else {
                    continue;
                };
                let Ok(n) = n.parse::<u32>() else {
                    continue;
                };
                match kind {
                    "passed" => summary.passed = summary.passed.saturating_add(n),
                    "failed" => summary.failed = summary.failed.saturating_add(n),
                    "ignored" => summary.ignored = summary.ignored.saturating_add(n),
                    _ => {}
                }
            }
        }
        summary
    }
}

impl std::fmt::Display for TestSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} ignored",
            self.passed, self.failed, self.ignored
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_result_line() {
        let out = "\
test result: ok. 5 passed; 0 failed; 1 ignored; 0 measured; 0 filtered out
running 3 tests
test result: ok. 3 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out";
        assert_eq!(
            TestSummary::parse(out),
            TestSummary {
                passed: 8,
                failed: 0,
                ignored: 1
            }
        );
    }

    #[test]
    fn no_result_lines_is_all_zero() {
        assert_eq!(TestSummary::parse("Compiling foo"), TestSummary::default());
    }
}
