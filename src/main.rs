//! # headercheck
//!
//! Checks C++ sources for the project's license header and header files for
//! a well-placed `#pragma once`.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_check(cli.check_args)
}
