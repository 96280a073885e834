//! # Check Command
//!
//! This module implements the check run: resolve the repository root, load
//! the configuration, select files, apply both rules and report.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use headercheck::config::load_config;
use headercheck::logging::{ColorMode, init_tracing, set_verbose};
use headercheck::output::print_report;
use headercheck::processor::Processor;
use headercheck::selector::{CandidateSource, FileSelector};
use headercheck::verbose_log;
use headercheck::workspace::resolve_workspace;
use tracing::debug;

/// Arguments for the check run
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Files to check, relative to the repository root. When omitted, every
  /// file tracked by git is checked.
  #[arg(required = false)]
  pub paths: Vec<String>,

  /// Directory to start repository discovery from (default: current
  /// directory)
  #[arg(long, value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// Path to config file (default: .headercheck.toml in the repository root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all logging except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Skip git repository ownership check. Useful when running in Docker or
  /// other containerized environments where the repository may be owned by a
  /// different user.
  #[arg(long)]
  pub skip_git_owner_check: bool,
}

/// Run the check with the given arguments.
///
/// Exits the process with status 1 when any violation is found. Fatal
/// errors are returned and surface as status 1 from `main`.
pub fn run_check(args: CheckArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  }
  args.colors.apply();

  if args.skip_git_owner_check {
    debug!("Disabling git repository ownership check");
    // SAFETY: This is safe to call as long as no git operations are in progress.
    // We call this early, before any Repository operations.
    unsafe {
      let _ = git2::opts::set_verify_owner_validation(false);
    }
  }

  let workspace = resolve_workspace(args.root.as_deref())?;
  debug!(
    "Using {} root: {}",
    if workspace.is_git() { "git" } else { "directory" },
    workspace.root().display()
  );

  // Resolved before changing directory so a relative --config means what
  // the user typed.
  let config = load_config(args.config.as_deref(), workspace.root(), args.no_config)?;

  workspace.enter()?;

  let processor = Processor::new(&config)?;
  let selector = FileSelector::new(&config.files);

  let candidates = selector.candidates(CandidateSource::from_args(args.paths), workspace.root())?;
  verbose_log!("Found {} candidate paths", candidates.len());

  let violations = processor.process(selector.select(candidates))?;

  print_report(&violations, processor.guard_token());

  if !violations.is_empty() {
    process::exit(1);
  }

  Ok(())
}
