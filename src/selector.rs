//! # File Selector Module
//!
//! Builds the list of files to check: either the paths given on the command
//! line, taken literally, or every file git tracks in the repository. The
//! list is then narrowed by the path-only rules in [`crate::file_filter`].

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::FilesConfig;
use crate::file_filter::{CompositeFilter, FileFilter, create_default_filter};
use crate::git;

/// Where the candidate list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
  /// Paths supplied by the caller. No existence check is made.
  Explicit(Vec<String>),
  /// All files tracked by the git repository at the workspace root.
  Tracked,
}

impl CandidateSource {
  /// Explicit paths when any were given, tracked files otherwise.
  pub fn from_args(paths: Vec<String>) -> Self {
    if paths.is_empty() {
      Self::Tracked
    } else {
      Self::Explicit(paths)
    }
  }
}

/// Selects the files to check.
pub struct FileSelector {
  filter: CompositeFilter,
}

impl FileSelector {
  pub fn new(files: &FilesConfig) -> Self {
    Self {
      filter: create_default_filter(files),
    }
  }

  /// Produces the unfiltered candidate list in discovery order.
  ///
  /// # Errors
  ///
  /// Listing tracked files is all-or-nothing: if it fails the whole run
  /// fails, before any file is checked.
  pub fn candidates(&self, source: CandidateSource, root: &Path) -> Result<Vec<String>> {
    match source {
      CandidateSource::Explicit(paths) => {
        info!("Checking {} paths given on the command line", paths.len());
        Ok(paths)
      }
      CandidateSource::Tracked => {
        let files = git::get_git_tracked_files(root)
          .with_context(|| format!("Failed to list tracked files in {}", root.display()))?;
        info!("Checking files tracked by git in {}", root.display());
        Ok(files)
      }
    }
  }

  /// Lazily filters `candidates`, keeping input order and duplicates.
  pub fn select(&self, candidates: Vec<String>) -> impl Iterator<Item = String> + '_ {
    candidates
      .into_iter()
      .filter(move |path| self.filter.should_process(path).should_process)
  }
}
