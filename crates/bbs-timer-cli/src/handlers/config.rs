//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    if args.json {
        let json = serde_json::to_string_pretty(config)?;
        println!("{json}");
    } else {
        print!("{}", render_config(config));
    }
    Ok(())
}

/// Human-readable configuration listing
#[must_use]
pub fn render_config(config: &CliConfig) -> String {
    format!(
        "Current configuration:\n  Verbosity: {:?}\n  Color: {:?}\n  Output dir: {}\n  JSON style: {:?}\n",
        config.verbosity,
        config.color,
        config.output_dir.display(),
        config.json_style
    )
}
