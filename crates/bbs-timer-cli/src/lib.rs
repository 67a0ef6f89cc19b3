//! bbs-timer CLI library
//!
//! Command-line front end for the `bbs-timer` crate. It collects the start
//! and end times, reports validation failures, and writes the generated
//! timer to disk.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, ConfigArgs, GenerateArgs, RangeArgs};
pub use config::{CliConfig, ColorChoice, JsonStyle, Verbosity, OUTPUT_DIR_ENV};
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use output::Reporter;
