//! # Logging Module
//!
//! This module provides logging utilities for headercheck:
//! - A `tracing` subscriber on stderr whose level follows `-v` / `-q`
//! - Verbose logging that can be enabled/disabled
//! - Color mode control for the report
//!
//! Logs always go to stderr so that stdout only ever carries the report.
//!
//! ## Example
//!
//! ```rust
//! use headercheck::logging::{ColorMode, set_verbose};
//! use headercheck::verbose_log;
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Checking file: {}", "AK/Vector.h");
//! ```

mod modes;

pub use modes::{ColorMode, default_level, init_tracing, is_verbose, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
