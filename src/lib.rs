//! # headercheck
//!
//! A tool that enforces two textual conventions across a C++ source tree:
//!
//! * every `.cpp` and `.h` file starts with an SPDX-tagged copyright block
//!   followed by a blank line
//! * every `.h` file contains `#pragma once`, surrounded by blank lines
//!
//! It reports every offending file, grouped by category, and exits non-zero
//! when there is at least one.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use headercheck::config::Config;
//! use headercheck::output::print_report;
//! use headercheck::processor::Processor;
//! use headercheck::selector::FileSelector;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let processor = Processor::new(&config)?;
//!     let selector = FileSelector::new(&config.files);
//!
//!     let candidates = vec!["AK/Vector.h".to_string(), "README.md".to_string()];
//!     let violations = processor.process(selector.select(candidates))?;
//!
//!     print_report(&violations, processor.guard_token());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`selector`] - Chooses the files to check
//! * [`processor`] - Applies both rules and collects violations
//! * [`output`] - Prints the report
//!
//! [`selector`]: crate::selector
//! [`processor`]: crate::processor
//! [`output`]: crate::output

pub mod config;
pub mod file_filter;
pub mod git;
pub mod guard_detection;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod selector;
pub mod workspace;
