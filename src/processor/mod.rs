//! # Processor Module
//!
//! This module runs both header rules over the selected files and collects
//! the offending paths into [`Violations`].
//!
//! - [`file_io`] - File reading
//!
//! The two rules are independent: a file failing the license rule is still
//! checked for its include guard, and the other way round.

mod file_io;

use std::path::Path;

use anyhow::Result;
pub use file_io::FileIO;
use tracing::{debug, info};

use crate::config::Config;
use crate::file_filter::starts_with_any;
use crate::guard_detection::{GuardDetector, GuardStatus};
use crate::license_detection::{LicenseDetector, SpdxHeaderDetector};
use crate::report::{ViolationKind, Violations};
use crate::verbose_log;

/// Outcome of the license header rule for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseStatus {
  /// The file starts with a well-formed header.
  Valid,
  /// The header is missing or malformed.
  Invalid,
  /// The path is exempt from the rule.
  Excluded,
}

/// Both rule outcomes for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOutcome {
  pub license: LicenseStatus,
  /// `None` for files that are not headers.
  pub guard: Option<GuardStatus>,
}

impl FileOutcome {
  /// The violation categories this outcome puts the file in.
  pub fn violations(&self) -> impl Iterator<Item = ViolationKind> {
    let license = (self.license == LicenseStatus::Invalid).then_some(ViolationKind::BadLicense);
    let guard = match self.guard {
      Some(GuardStatus::Missing) => Some(ViolationKind::MissingGuard),
      Some(GuardStatus::Malformed) => Some(ViolationKind::MalformedGuard),
      _ => None,
    };
    license.into_iter().chain(guard)
  }
}

/// Checks files against the license header and include guard rules.
pub struct Processor {
  license_detector: Box<dyn LicenseDetector>,
  guard_detector: GuardDetector,
  header_suffix: String,
  license_excludes: Vec<String>,
  guard_excludes: Vec<String>,
}

impl Processor {
  /// Creates a processor whose rules are compiled from `config`.
  ///
  /// # Errors
  ///
  /// Fails if the configured SPDX identifier or guard token cannot be
  /// compiled into a pattern.
  pub fn new(config: &Config) -> Result<Self> {
    let license_detector = SpdxHeaderDetector::new(&config.license.spdx_identifier)?;
    Self::with_license_detector(config, Box::new(license_detector))
  }

  /// Creates a processor with a custom license detector. The guard rule and
  /// all exclusions still come from `config`.
  pub fn with_license_detector(config: &Config, license_detector: Box<dyn LicenseDetector>) -> Result<Self> {
    Ok(Self {
      license_detector,
      guard_detector: GuardDetector::new(&config.guard.token)?,
      header_suffix: format!(".{}", config.files.header_extension),
      license_excludes: config.license.exclude.clone(),
      guard_excludes: config.guard.exclude.clone(),
    })
  }

  /// The guard token the include guard rule looks for.
  pub fn guard_token(&self) -> &str {
    self.guard_detector.token()
  }

  /// Applies both rules to already-loaded content.
  pub fn check_content(&self, path: &str, content: &str) -> FileOutcome {
    let license = if starts_with_any(path, &self.license_excludes) {
      LicenseStatus::Excluded
    } else if self.license_detector.has_license(content) {
      LicenseStatus::Valid
    } else {
      LicenseStatus::Invalid
    };

    let guard = if !path.ends_with(self.header_suffix.as_str()) {
      None
    } else if starts_with_any(path, &self.guard_excludes) {
      Some(GuardStatus::Excluded)
    } else {
      Some(self.guard_detector.classify(content))
    };

    let outcome = FileOutcome { license, guard };
    debug!("{}: license {:?}, guard {:?}", path, outcome.license, outcome.guard);
    outcome
  }

  /// Reads `path` and applies both rules.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be read as UTF-8 text.
  pub fn check_file(&self, path: &str) -> Result<FileOutcome> {
    verbose_log!("Checking file: {}", path);
    let content = FileIO::read_full_content(Path::new(path))?;
    Ok(self.check_content(path, &content))
  }

  /// Checks every path in order and collects the offenders.
  ///
  /// # Errors
  ///
  /// The first unreadable file aborts the run; no partial result is
  /// returned.
  pub fn process<I>(&self, paths: I) -> Result<Violations>
  where
    I: IntoIterator<Item = String>,
  {
    let mut violations = Violations::new();
    let mut checked = 0usize;

    for path in paths {
      let outcome = self.check_file(&path)?;
      checked += 1;

      for kind in outcome.violations() {
        violations.record(kind, path.clone());
      }
    }

    info!("Checked {} files, {} violations", checked, violations.total());
    Ok(violations)
  }
}
