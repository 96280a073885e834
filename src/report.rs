//! # Report Module
//!
//! This module holds the result of a run: three independent, append-only
//! buckets of offending paths, one per violation category.

/// The categories a file can be reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
  /// The file does not start with a well-formed license header.
  BadLicense,
  /// A header file does not contain the guard token at all.
  MissingGuard,
  /// A header file contains the guard token, but not surrounded by blank
  /// lines.
  MalformedGuard,
}

impl ViolationKind {
  /// Report order.
  pub const ALL: [ViolationKind; 3] = [
    ViolationKind::BadLicense,
    ViolationKind::MissingGuard,
    ViolationKind::MalformedGuard,
  ];

  /// The fixed label printed before the offending paths.
  pub fn label(self, guard_token: &str) -> String {
    match self {
      ViolationKind::BadLicense => "Files with bad licenses:".to_string(),
      ViolationKind::MissingGuard => format!("Files without {guard_token}:"),
      ViolationKind::MalformedGuard => format!("Files with a bad {guard_token}:"),
    }
  }
}

/// Offending paths collected during a run.
///
/// A path may sit in the license bucket and one guard bucket at the same
/// time. Paths keep the order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
  pub bad_license: Vec<String>,
  pub missing_guard: Vec<String>,
  pub malformed_guard: Vec<String>,
}

impl Violations {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends `path` to the bucket for `kind`.
  pub fn record(&mut self, kind: ViolationKind, path: String) {
    self.bucket_mut(kind).push(path);
  }

  /// The paths recorded for `kind`.
  pub fn paths(&self, kind: ViolationKind) -> &[String] {
    match kind {
      ViolationKind::BadLicense => &self.bad_license,
      ViolationKind::MissingGuard => &self.missing_guard,
      ViolationKind::MalformedGuard => &self.malformed_guard,
    }
  }

  fn bucket_mut(&mut self, kind: ViolationKind) -> &mut Vec<String> {
    match kind {
      ViolationKind::BadLicense => &mut self.bad_license,
      ViolationKind::MissingGuard => &mut self.missing_guard,
      ViolationKind::MalformedGuard => &mut self.malformed_guard,
    }
  }

  /// `true` when every bucket is empty, i.e. the run passed.
  pub fn is_empty(&self) -> bool {
    ViolationKind::ALL.iter().all(|kind| self.paths(*kind).is_empty())
  }

  /// Total number of entries across all buckets.
  pub fn total(&self) -> usize {
    ViolationKind::ALL.iter().map(|kind| self.paths(*kind).len()).sum()
  }

  /// Non-empty buckets in report order.
  pub fn categories(&self) -> impl Iterator<Item = (ViolationKind, &[String])> {
    ViolationKind::ALL
      .into_iter()
      .map(move |kind| (kind, self.paths(kind)))
      .filter(|(_, paths)| !paths.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_labels() {
    assert_eq!(ViolationKind::BadLicense.label("#pragma once"), "Files with bad licenses:");
    assert_eq!(ViolationKind::MissingGuard.label("#pragma once"), "Files without #pragma once:");
    assert_eq!(
      ViolationKind::MalformedGuard.label("#pragma once"),
      "Files with a bad #pragma once:"
    );
  }

  #[test]
  fn test_empty_violations() {
    let violations = Violations::new();
    assert!(violations.is_empty());
    assert_eq!(violations.total(), 0);
    assert_eq!(violations.categories().count(), 0);
  }

  #[test]
  fn test_record_keeps_order_and_buckets_independent() {
    let mut violations = Violations::new();
    violations.record(ViolationKind::MalformedGuard, "b.h".to_string());
    violations.record(ViolationKind::BadLicense, "z.cpp".to_string());
    violations.record(ViolationKind::BadLicense, "a.h".to_string());
    violations.record(ViolationKind::MalformedGuard, "a.h".to_string());

    assert!(!violations.is_empty());
    assert_eq!(violations.total(), 4);
    assert_eq!(violations.paths(ViolationKind::BadLicense), ["z.cpp", "a.h"]);
    assert!(violations.paths(ViolationKind::MissingGuard).is_empty());
    assert_eq!(violations.paths(ViolationKind::MalformedGuard), ["b.h", "a.h"]);
  }

  #[test]
  fn test_categories_skip_empty_buckets_in_report_order() {
    let mut violations = Violations::new();
    violations.record(ViolationKind::MalformedGuard, "b.h".to_string());
    violations.record(ViolationKind::BadLicense, "a.cpp".to_string());

    let kinds: Vec<ViolationKind> = violations.categories().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, vec![ViolationKind::BadLicense, ViolationKind::MalformedGuard]);
  }
}
