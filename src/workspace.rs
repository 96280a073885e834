//! # Workspace Module
//!
//! This module defines the repository root headercheck runs from. All
//! candidate paths, including explicit arguments, are resolved relative to
//! it, so the process changes into the root before anything is selected.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::git;

/// Workspace root selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
  /// Workspace rooted at a git repository.
  Git { root: PathBuf },
  /// Workspace rooted at a plain directory.
  Directory { root: PathBuf },
}

impl Workspace {
  pub fn root(&self) -> &Path {
    match self {
      Self::Git { root } | Self::Directory { root } => root.as_path(),
    }
  }

  pub const fn is_git(&self) -> bool {
    matches!(self, Self::Git { .. })
  }

  /// Changes the process working directory to the workspace root.
  pub fn enter(&self) -> Result<()> {
    std::env::set_current_dir(self.root())
      .with_context(|| format!("Failed to change directory to {}", self.root().display()))?;
    info!("Working from {}", self.root().display());
    Ok(())
  }
}

/// Resolve the workspace.
///
/// Discovery starts from `explicit_root` when given, else from the current
/// directory. The enclosing git repository's working tree becomes the root;
/// outside a repository the starting directory itself is used.
pub fn resolve_workspace(explicit_root: Option<&Path>) -> Result<Workspace> {
  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  let start = match explicit_root {
    Some(root) if root.is_absolute() => root.to_path_buf(),
    Some(root) => current_dir.join(root),
    None => current_dir,
  };

  if !start.is_dir() {
    anyhow::bail!("Root is not a directory: {}", start.display());
  }

  if let Some(root) = git::discover_repo_root(&start)? {
    return Ok(Workspace::Git { root });
  }

  Ok(Workspace::Directory { root: start })
}
