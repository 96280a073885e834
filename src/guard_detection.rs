//! # Guard Detection Module
//!
//! This module contains the include guard rule for header files. The guard
//! token must either open the file or follow a non-blank line and exactly
//! one blank line, and must be followed by one blank line and more code, or
//! end the file.
//!
//! The check is textual. It does not verify that the token appears only
//! once, and it cannot tell a misplaced guard from one inside a comment.

use regex::Regex;

use crate::license_detection::PatternError;

/// Outcome of the include guard rule for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStatus {
  /// The token is present and surrounded by blank lines.
  WellFormed,
  /// The token is present but not in the well-formed shape.
  Malformed,
  /// The token does not occur at all.
  Missing,
  /// The path is exempt from the rule.
  Excluded,
}

/// Detects the guard token and classifies its placement.
#[derive(Debug, Clone)]
pub struct GuardDetector {
  token: String,
  well_formed: Regex,
}

impl GuardDetector {
  /// Creates a detector for `token`, e.g. `#pragma once`.
  pub fn new(token: &str) -> Result<Self, PatternError> {
    let source = format!(r"(?:^|\S\n\n){}(?:\n\n\S.|\n?\z)", regex::escape(token));
    let well_formed = Regex::new(&source).map_err(|source| PatternError {
      rule: "include guard",
      source,
    })?;
    Ok(Self {
      token: token.to_string(),
      well_formed,
    })
  }

  /// The guard token this detector looks for.
  pub fn token(&self) -> &str {
    &self.token
  }

  /// Classifies `content`. Never returns [`GuardStatus::Excluded`].
  pub fn classify(&self, content: &str) -> GuardStatus {
    if self.well_formed.is_match(content) {
      GuardStatus::WellFormed
    } else if content.contains(self.token.as_str()) {
      GuardStatus::Malformed
    } else {
      GuardStatus::Missing
    }
  }
}
