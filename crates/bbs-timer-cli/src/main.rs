//! bbs-timer: export timer keyframes from the command line
//!
//! ## Usage
//!
//! ```bash
//! bbs-timer generate --start 00:01:00 --end 00:00:00   # one-minute countdown
//! bbs-timer generate -s -:05:00 -e -:00:00 --stdout    # MM:SS, printed
//! bbs-timer check -s 01:00:00 -e 00:00:00              # validate only
//! ```

use bbs_timer_cli::{
    handlers, init_logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Reporter, Verbosity,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = build_config(&cli);
    let use_color = config.color.should_color();
    init_logging(config.verbosity, use_color);
    let reporter = Reporter::new(use_color, config.verbosity.is_quiet());

    match run(cli.command, config, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: CliConfig, reporter: &Reporter) -> CliResult<()> {
    match command {
        Commands::Generate(args) => {
            let config = config
                .with_output_dir(args.output_dir.clone())
                .with_json_style(args.json_style());
            handlers::execute_generate(&config, reporter, &args).map(|_| ())
        }
        Commands::Check(args) => handlers::execute_check(reporter, &args).map(|_| ()),
        Commands::Config(args) => handlers::execute_config(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
