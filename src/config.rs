//! # Configuration Module
//!
//! This module provides the immutable configuration headercheck runs with:
//! which extensions are checked, which paths are skipped or excluded from
//! each rule, the include-guard token and the SPDX identifier expected in the
//! license header.
//!
//! The built-in defaults describe the SerenityOS tree. Any of them can be
//! overridden in a `.headercheck.toml` file or a file named by the
//! `HEADERCHECK_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headercheck.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADERCHECK_CONFIG";

/// Which files are candidates for checking at all.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilesConfig {
  /// Extension of source files, without the leading dot.
  pub source_extension: String,

  /// Extension of header files, without the leading dot. Only these files are
  /// checked for an include guard.
  pub header_extension: String,

  /// Paths starting with any of these prefixes are never checked.
  pub ignored_prefixes: Vec<String>,

  /// Exact paths that are never checked (generated files and the like).
  pub skip: Vec<String>,
}

impl Default for FilesConfig {
  fn default() -> Self {
    Self {
      source_extension: "cpp".to_string(),
      header_extension: "h".to_string(),
      ignored_prefixes: vec!["Base/".to_string()],
      skip: vec!["Kernel/FileSystem/Ext2FS/Definitions.h".to_string()],
    }
  }
}

/// Settings for the license header rule.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LicenseConfig {
  /// The identifier expected on the `SPDX-License-Identifier:` line.
  pub spdx_identifier: String,

  /// Path prefixes exempt from the license header rule.
  pub exclude: Vec<String>,
}

impl Default for LicenseConfig {
  fn default() -> Self {
    Self {
      spdx_identifier: "BSD-2-Clause".to_string(),
      exclude: [
        "AK/Checked.h",
        "AK/Function.h",
        "Userland/Libraries/LibJS/SafeFunction.h",
        "Userland/Libraries/LibC/elf.h",
        "Userland/Libraries/LibCodeComprehension/Cpp/Tests/",
        "Userland/Libraries/LibCpp/Tests/parser/",
        "Userland/Libraries/LibCpp/Tests/preprocessor/",
      ]
      .into_iter()
      .map(String::from)
      .collect(),
    }
  }
}

/// Settings for the include guard rule.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GuardConfig {
  /// The guard directive every header must contain.
  pub token: String,

  /// Path prefixes exempt from the include guard rule.
  pub exclude: Vec<String>,
}

impl Default for GuardConfig {
  fn default() -> Self {
    Self {
      token: "#pragma once".to_string(),
      exclude: vec!["Userland/Libraries/LibC/assert.h".to_string()],
    }
  }
}

/// Main configuration struct for headercheck.
///
/// Every table and key is optional; anything left out keeps its built-in
/// default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
  pub files: FilesConfig,
  pub license: LicenseConfig,
  pub guard: GuardConfig,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A setting has a value headercheck cannot work with.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read, parsed
  /// or validated.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - Both extensions are non-empty and don't include the leading dot
  /// - The guard token and SPDX identifier are non-empty
  pub fn validate(&self) -> Result<(), ConfigError> {
    for (key, ext) in [
      ("files.source-extension", &self.files.source_extension),
      ("files.header-extension", &self.files.header_extension),
    ] {
      if ext.is_empty() {
        return Err(ConfigError::InvalidValue {
          key: key.to_string(),
          message: "extension cannot be empty".to_string(),
        });
      }
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidValue {
          key: key.to_string(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }

    if self.guard.token.trim().is_empty() {
      return Err(ConfigError::InvalidValue {
        key: "guard.token".to_string(),
        message: "token cannot be empty".to_string(),
      });
    }

    if self.license.spdx_identifier.trim().is_empty() {
      return Err(ConfigError::InvalidValue {
        key: "license.spdx-identifier".to_string(),
        message: "identifier cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADERCHECK_CONFIG` environment variable
/// 3. `.headercheck.toml` in the repository root
///
/// An explicit path that does not exist is returned as-is so that loading it
/// reports the missing file instead of silently falling back to defaults.
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using repository config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found, using built-in defaults");
  None
}

/// Load configuration from the discovered path, or fall back to the built-in
/// defaults.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `root` - The repository root directory
/// * `no_config` - If true, skip config file discovery and use defaults
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Config> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(Config::default());
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display())),
    None => Ok(Config::default()),
  }
}
