//! # File I/O Module
//!
//! File reading for the processor. Each file is opened, read whole and
//! closed before the next one is touched. Line endings are normalized to
//! `\n` so CRLF and CR files are checked like LF ones.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read full file content as UTF-8 text with `\n` line endings.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be opened or read, or is not valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(normalize_line_endings(content))
  }
}

/// Turns `\r\n` and any lone `\r` into `\n`.
fn normalize_line_endings(content: String) -> String {
  if !content.contains('\r') {
    return content;
  }
  content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_full_content() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("Vector.h");
    std::fs::write(&path, "#pragma once\n\nint x;\n").expect("write file");

    assert_eq!(
      FileIO::read_full_content(&path).expect("read file"),
      "#pragma once\n\nint x;\n"
    );
  }

  #[test]
  fn test_read_normalizes_line_endings() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("Crlf.h");
    std::fs::write(&path, "#pragma once\r\n\r\nint x;\rint y;\r\n").expect("write file");

    assert_eq!(
      FileIO::read_full_content(&path).expect("read file"),
      "#pragma once\n\nint x;\nint y;\n"
    );
  }

  #[test]
  fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("a\r\nb".to_string()), "a\nb");
    assert_eq!(normalize_line_endings("a\rb\r".to_string()), "a\nb\n");
    assert_eq!(normalize_line_endings("a\r\r\nb".to_string()), "a\n\nb");
    assert_eq!(normalize_line_endings("a\nb".to_string()), "a\nb");
  }

  #[test]
  fn test_read_missing_file_names_path() {
    let err = FileIO::read_full_content(Path::new("/nonexistent/Foo.h")).expect_err("should fail");
    assert!(err.to_string().contains("/nonexistent/Foo.h"));
  }

  #[test]
  fn test_read_invalid_utf8_fails() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("binary.cpp");
    std::fs::write(&path, [0x2f, 0x2a, 0xff, 0xfe, 0x0a]).expect("write file");

    assert!(FileIO::read_full_content(&path).is_err());
  }
}
