//! CLI command definitions using clap

use crate::config::{ColorChoice, JsonStyle, OUTPUT_DIR_ENV};
use bbs_timer::{TimeRange, TimeSpec};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// bbs-timer: turn a start and end time into timer keyframe JSON
#[derive(Parser, Debug)]
#[command(name = "bbs-timer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a timer and export it as JSON
    Generate(GenerateArgs),

    /// Validate a range without writing anything
    Check(CheckArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Start and end of a timer.
///
/// Each is `HH:MM:SS`; use `-` for a disabled field, e.g. `-:05:00`.
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Start time (HH:MM:SS, '-' disables a field)
    #[arg(short, long, allow_hyphen_values = true)]
    pub start: TimeSpec,

    /// End time (HH:MM:SS, '-' disables a field)
    #[arg(short, long, allow_hyphen_values = true)]
    pub end: TimeSpec,
}

impl RangeArgs {
    /// The requested range
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Timer range
    #[command(flatten)]
    pub range: RangeArgs,

    /// Directory to write the timer file into
    #[arg(short, long, env = OUTPUT_DIR_ENV, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl GenerateArgs {
    /// JSON layout requested on the command line
    #[must_use]
    pub const fn json_style(&self) -> JsonStyle {
        if self.compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        }
    }
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Timer range
    #[command(flatten)]
    pub range: RangeArgs,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print configuration as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use bbs_timer::Field;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bbs-timer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_generate_args() {
        let cli = parse(&["generate", "--start", "00:01:00", "--end", "00:00:00"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.range.start, TimeSpec::hms(0, 1, 0));
        assert_eq!(args.range.end, TimeSpec::hms(0, 0, 0));
        assert!(!args.stdout);
        assert_eq!(args.json_style(), JsonStyle::Pretty);
    }

    #[test]
    fn test_hyphen_values_are_specs() {
        let cli = parse(&["check", "-s", "-:05:00", "-e", "-:00:00"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.range.start.hours, Field::Disabled);
        assert_eq!(args.range.range().start.to_seconds(), 300);
    }

    #[test]
    fn test_bad_spec_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["bbs-timer", "check", "-s", "1:2", "-e", "00:00:00"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_compact_flag() {
        let cli = parse(&["generate", "-s", "0:0:1", "-e", "0:0:0", "--compact"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.json_style(), JsonStyle::Compact);
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["-vv", "--color", "never", "config"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorArg::Never));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
