//! # License Detection Module
//!
//! This module contains the license header rule. A file passes when it
//! starts with exactly this block, followed by one blank line:
//!
//! ```text
//! /*
//!  * Copyright (c) 2018-2020, Andreas Kling <kling@serenityos.org>
//!  * Copyright (c) 2021, Somebody Else
//!  *
//!  * SPDX-License-Identifier: BSD-2-Clause
//!  */
//!
//! ```
//!
//! One or more copyright lines are allowed. Years are four digits, with an
//! optional four-digit range end.

use regex::Regex;

/// Error raised when a configured value cannot be turned into a pattern.
#[derive(Debug, thiserror::Error)]
#[error("Failed to build the {rule} pattern: {source}")]
pub struct PatternError {
  /// Which rule the pattern belongs to.
  pub rule: &'static str,
  #[source]
  pub source: regex::Error,
}

/// Trait for license detectors.
///
/// Implementations decide whether file content starts with an acceptable
/// license header.
pub trait LicenseDetector {
  /// Checks if the content begins with a well-formed license header.
  fn has_license(&self, content: &str) -> bool;
}

/// Detects the SPDX-tagged block comment header.
#[derive(Debug, Clone)]
pub struct SpdxHeaderDetector {
  pattern: Regex,
}

impl SpdxHeaderDetector {
  /// Creates a detector expecting `spdx_identifier` on the SPDX line.
  pub fn new(spdx_identifier: &str) -> Result<Self, PatternError> {
    let source = format!(
      concat!(
        r"^/\*\n",
        r"( \* Copyright \(c\) [0-9]{{4}}(-[0-9]{{4}})?, .*\n)+",
        r" \*\n",
        r" \* SPDX-License-Identifier: {}\n",
        r" \*/\n",
        r"\n",
      ),
      regex::escape(spdx_identifier)
    );
    let pattern = Regex::new(&source).map_err(|source| PatternError {
      rule: "license header",
      source,
    })?;
    Ok(Self { pattern })
  }
}

impl LicenseDetector for SpdxHeaderDetector {
  /// The header must sit at the very start of the content; anything may
  /// follow the blank line after it.
  fn has_license(&self, content: &str) -> bool {
    self.pattern.is_match(content)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const GOOD: &str = "/*\n * Copyright (c) 2020, Andreas Kling <kling@serenityos.org>\n *\n * SPDX-License-Identifier: BSD-2-Clause\n */\n\n#include <AK/Vector.h>\n";

  fn detector() -> SpdxHeaderDetector {
    SpdxHeaderDetector::new("BSD-2-Clause").expect("valid pattern")
  }

  #[test]
  fn test_accepts_single_copyright_line() {
    assert!(detector().has_license(GOOD));
  }

  #[test]
  fn test_accepts_multiple_lines_and_year_ranges() {
    let content = concat!(
      "/*\n",
      " * Copyright (c) 2018-2021, Andreas Kling <kling@serenityos.org>\n",
      " * Copyright (c) 2022, the SerenityOS developers.\n",
      " *\n",
      " * SPDX-License-Identifier: BSD-2-Clause\n",
      " */\n",
      "\n",
    );
    assert!(detector().has_license(content));
  }

  #[test]
  fn test_header_must_be_at_start() {
    let content = format!("\n{GOOD}");
    assert!(!detector().has_license(&content));

    let content = format!("// leading comment\n{GOOD}");
    assert!(!detector().has_license(&content));
  }

  #[test]
  fn test_rejects_missing_spdx_line() {
    let content = "/*\n * Copyright (c) 2020, Someone\n *\n */\n\nint x;\n";
    assert!(!detector().has_license(content));
  }

  #[test]
  fn test_rejects_other_identifier() {
    let content = GOOD.replace("BSD-2-Clause", "MIT");
    assert!(!detector().has_license(&content));
  }

  #[test]
  fn test_rejects_bad_years() {
    for year in ["202", "20201", "2020-21", "20x0"] {
      let content = GOOD.replace("2020", year);
      assert!(!detector().has_license(&content), "year {year} should be rejected");
    }
  }

  #[test]
  fn test_rejects_missing_blank_line_after_header() {
    let content = GOOD.replace(" */\n\n", " */\n");
    assert!(!detector().has_license(&content));
  }

  #[test]
  fn test_rejects_missing_blank_comment_line() {
    let content = GOOD.replace(" *\n * SPDX", " * SPDX");
    assert!(!detector().has_license(&content));
  }

  #[test]
  fn test_rejects_missing_copyright_comma() {
    let content = GOOD.replace("2020, Andreas", "2020 Andreas");
    assert!(!detector().has_license(&content));
  }

  #[test]
  fn test_detector_sees_raw_carriage_returns() {
    // Line endings are normalized when files are read, not here.
    let content = GOOD.replace('\n', "\r\n");
    assert!(!detector().has_license(&content));
  }

  #[test]
  fn test_rejects_empty_content() {
    assert!(!detector().has_license(""));
  }

  #[test]
  fn test_custom_identifier_is_escaped() {
    let detector = SpdxHeaderDetector::new("GPL-2.0+").expect("valid pattern");
    let content = GOOD.replace("BSD-2-Clause", "GPL-2.0+");
    assert!(detector.has_license(&content));

    let content = GOOD.replace("BSD-2-Clause", "GPL-2x0");
    assert!(!detector.has_license(&content));
  }
}
