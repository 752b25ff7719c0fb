//! Diagnostic logging setup.
//!
//! Log lines go to stderr so `--json` output on stdout stays parseable.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the `-v` count to a maximum level. `--quiet` wins over any `-v`.
pub fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` directives are honoured on top
/// of the verbosity level.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level_for(verbosity, quiet).into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(5, false), Level::TRACE);
    }

    #[test]
    fn test_quiet_overrides_verbosity() {
        assert_eq!(level_for(3, true), Level::ERROR);
    }
}
