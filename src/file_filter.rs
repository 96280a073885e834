//! # File Filter Module
//!
//! This module contains the filters that decide which candidate paths are
//! checked at all. Decisions are made on the path text only; file contents
//! are never inspected here.

use tracing::debug;

use crate::config::FilesConfig;

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter candidate paths.
pub trait FileFilter {
  /// Determines whether a path should be checked.
  fn should_process(&self, path: &str) -> FilterResult;
}

/// Returns `true` if `path` starts with any of `prefixes`.
///
/// Prefixes are plain text, so `AK/Function.h` also matches
/// `AK/Function.h.in`.
pub fn starts_with_any(path: &str, prefixes: &[String]) -> bool {
  prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Keeps only paths ending in one of the configured extensions.
pub struct ExtensionFilter {
  suffixes: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a filter for extensions given without the leading dot.
  pub fn new<I, S>(extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let suffixes = extensions.into_iter().map(|ext| format!(".{}", ext.as_ref())).collect();
    Self { suffixes }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &str) -> FilterResult {
    if self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str())) {
      FilterResult::process()
    } else {
      FilterResult::skip("Unchecked extension")
    }
  }
}

/// Drops paths under any of the ignored directory prefixes.
pub struct PrefixFilter {
  prefixes: Vec<String>,
}

impl PrefixFilter {
  pub const fn new(prefixes: Vec<String>) -> Self {
    Self { prefixes }
  }
}

impl FileFilter for PrefixFilter {
  fn should_process(&self, path: &str) -> FilterResult {
    if starts_with_any(path, &self.prefixes) {
      FilterResult::skip("Under an ignored directory")
    } else {
      FilterResult::process()
    }
  }
}

/// Drops specific paths, compared exactly.
pub struct SkipListFilter {
  paths: Vec<String>,
}

impl SkipListFilter {
  pub const fn new(paths: Vec<String>) -> Self {
    Self { paths }
  }
}

impl FileFilter for SkipListFilter {
  fn should_process(&self, path: &str) -> FilterResult {
    if self.paths.iter().any(|skipped| skipped == path) {
      FilterResult::skip("Listed in files.skip")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &str) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        debug!("Skipping {}: {}", path, result.reason.as_deref().unwrap_or("filtered"));
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Constructs the selection filter described by the `[files]` config table.
///
/// A path is kept when it ends in the source or header extension, is not
/// under an ignored prefix, and is not on the skip list.
pub fn create_default_filter(files: &FilesConfig) -> CompositeFilter {
  let filters: Vec<Box<dyn FileFilter>> = vec![
    Box::new(ExtensionFilter::new([&files.source_extension, &files.header_extension])),
    Box::new(PrefixFilter::new(files.ignored_prefixes.clone())),
    Box::new(SkipListFilter::new(files.skip.clone())),
  ];
  CompositeFilter::new(filters)
}
