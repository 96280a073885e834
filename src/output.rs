//! # Output Module
//!
//! This module centralizes the user-facing report. Stdout carries one line
//! per non-empty violation category and nothing else, so the output stays
//! predictable for scripts.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

use crate::report::Violations;

/// One report line: the label, then the space-joined paths.
fn report_line(label: impl Display, paths: &[String]) -> String {
  format!("{} {}", label, paths.join(" "))
}

/// Formats the report as plain lines.
pub fn format_report(violations: &Violations, guard_token: &str) -> Vec<String> {
  violations
    .categories()
    .map(|(kind, paths)| report_line(kind.label(guard_token), paths))
    .collect()
}

/// Prints the report to stdout. Labels are red when colors are enabled.
pub fn print_report(violations: &Violations, guard_token: &str) {
  for (kind, paths) in violations.categories() {
    let label = kind.label(guard_token);
    println!("{}", report_line(label.if_supports_color(Stream::Stdout, |l| l.red()), paths));
  }
}
