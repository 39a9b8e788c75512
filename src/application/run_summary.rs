use std::io::{self, Write};

use colored::Colorize;
use supports_color::Stream;

use crate::walker::WalkSummary;

/// Prints the closing one-line summary of a run to stderr.
pub fn print_summary(summary: &WalkSummary) {
    colored::control::set_override(supports_color::on(Stream::Stderr).is_some());
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(io::stderr(), "{}", summary_line(summary));
}

fn summary_line(summary: &WalkSummary) -> String {
    let failed = summary.files_failed.to_string();
    let warnings = summary.warnings.len().to_string();
    format!(
        "{} {} files hashed, {} unreadable, {} directories walked, {} warnings",
        "done:".bold(),
        summary.files_hashed.to_string().green(),
        if summary.files_failed > 0 { failed.red() } else { failed.normal() },
        summary.directories,
        if summary.warnings.is_empty() { warnings.normal() } else { warnings.yellow() },
    )
}
