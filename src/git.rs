//! # Git Module
//!
//! This module contains the git plumbing headercheck needs: locating the
//! repository that encloses a directory and listing the files it tracks.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{ErrorCode, Repository};
use tracing::debug;

/// Finds the working-tree root of the git repository containing `start`.
///
/// # Returns
///
/// `Ok(None)` when `start` is not inside a repository (or only inside a bare
/// one), `Ok(Some(root))` otherwise.
///
/// # Errors
///
/// Returns an error when a repository exists but cannot be opened, for example
/// because git2's ownership validation rejects it.
pub fn discover_repo_root(start: &Path) -> Result<Option<PathBuf>> {
  let repo = match Repository::discover(start) {
    Ok(repo) => repo,
    Err(e) if e.code() == ErrorCode::NotFound => {
      debug!("No git repository found above {}", start.display());
      return Ok(None);
    }
    Err(e) => {
      return Err(e).with_context(|| format!("Failed to open git repository containing {}", start.display()));
    }
  };

  Ok(repo.workdir().map(Path::to_path_buf))
}

/// Lists every file tracked in the index of the repository at `root`.
///
/// Paths are relative to the repository root, use `/` as the separator and
/// come back in index order, the same listing `git ls-files` prints. A path
/// with unresolved conflicts appears once per conflict stage.
///
/// # Errors
///
/// Returns an error if the repository or its index cannot be opened, or if a
/// tracked path is not valid UTF-8.
pub fn get_git_tracked_files(root: &Path) -> Result<Vec<String>> {
  let repo = Repository::open(root).with_context(|| format!("Failed to open git repository at {}", root.display()))?;
  let index = repo.index().with_context(|| "Failed to read git index")?;

  let mut files: Vec<String> = Vec::with_capacity(index.len());
  for entry in index.iter() {
    files.push(String::from_utf8(entry.path).with_context(|| "Tracked path is not valid UTF-8")?);
  }

  debug!("Found {} tracked files in {}", files.len(), root.display());
  Ok(files)
}
