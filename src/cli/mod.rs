//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing. There are no subcommands; the only
//! thing headercheck does is check.

mod check;

pub use check::{CheckArgs, run_check};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), " ", env!("GIT_DATE"), ")"),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check every tracked .cpp and .h file in the enclosing repository
  headercheck

  # Check specific files (relative to the repository root)
  headercheck AK/Vector.h Kernel/Process.cpp

  # Check a repository from outside it
  headercheck --root ~/src/serenity

  # Ignore .headercheck.toml and use the built-in rules
  headercheck --no-config
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;
  use headercheck::logging::ColorMode;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["headercheck"]).expect("parse");
    let args = cli.check_args;

    assert!(args.paths.is_empty());
    assert!(args.root.is_none());
    assert!(args.config.is_none());
    assert!(!args.no_config);
    assert_eq!(args.verbose, 0);
    assert!(!args.quiet);
    assert_eq!(args.colors, ColorMode::Auto);
  }

  #[test]
  fn test_parse_paths_and_flags() {
    let cli = Cli::try_parse_from([
      "headercheck",
      "-vv",
      "--colors",
      "never",
      "--root",
      "/src/serenity",
      "AK/Vector.h",
      "Kernel/Process.cpp",
    ])
    .expect("parse");
    let args = cli.check_args;

    assert_eq!(args.paths, vec!["AK/Vector.h".to_string(), "Kernel/Process.cpp".to_string()]);
    assert_eq!(args.verbose, 2);
    assert_eq!(args.colors, ColorMode::Never);
    assert_eq!(args.root.as_deref(), Some(std::path::Path::new("/src/serenity")));
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["headercheck", "-q", "-v"]).is_err());
  }

  #[test]
  fn test_no_subcommands() {
    // A word that looks like a subcommand is just another path.
    let cli = Cli::try_parse_from(["headercheck", "check"]).expect("parse");
    assert_eq!(cli.check_args.paths, vec!["check".to_string()]);
  }
}
