//! Renders a [`Report`] for terminals.
//!
//! The report itself is a plain in-memory struct; anything beyond this
//! human-readable printout (files, serialization, CI formats) is the
//! caller's business.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ledger::AssertList;
use crate::report::Report;

/// Output configuration for report printing.
pub struct ConsoleConfig {
    pub use_colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// Print a report: header, counters, recorded assertion locations, and a
/// final verdict line.
pub fn print_report(report: &Report, config: &ConsoleConfig) {
    let choice = if config.use_colors {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    println!("=== {} ({} {}) ===", report.name, report.date, report.time);
    let _ = stdout.reset();

    println!(
        "total {}, executed {}, disabled {}",
        report.total, report.executed, report.disabled
    );
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    print!("passed {}", report.passed);
    let _ = stdout.reset();
    print!(", ");
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    println!("failed {}", report.failed);
    let _ = stdout.reset();

    print_records("failing assertions", &report.fail_records);
    print_records("passing assertions", &report.pass_records);

    let (verdict, color) = if report.all_passed() {
        ("PASSED", Color::Green)
    } else {
        ("FAILED", Color::Red)
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    println!("verdict: {}", verdict);
    let _ = stdout.reset();
    println!();
}

fn print_records(label: &str, list: &AssertList) {
    if list.is_empty() {
        return;
    }
    println!("{} ({}):", label, list.attempts());
    for record in list.iter() {
        println!("  {}", record);
    }
    let dropped = list.attempts() - list.len() as u64;
    if dropped > 0 {
        println!("  ... and {} more not recorded", dropped);
    }
}
