//! Log subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::filter::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flags. Returns `false` when a
/// subscriber was already installed, which leaves the existing one active.
pub fn init_logging(verbosity: Verbosity, use_color: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_color)
        .try_init()
        .is_ok()
}
