//! Tracing setup for the binary.

use std::io::IsTerminal;

use eyre::WrapErr;
use itertools::Itertools;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

use cosmos_rpc_app::config::{GlobalConfig, LogLevel};

/// The name of the environment variable through which one can override
/// the tracing filter built in [`build_tracing_filter`].
const LOG_VAR: &str = "RUST_LOG";

/// The crates targeted by the default log level.
const TARGET_CRATES: [&str; 2] = ["cosmos_rpc_app", "cosmos_rpc_cli"];

/// Build a tracing directive setting the log level for our crates to the
/// given `log_level`.
pub fn default_directive(log_level: LogLevel) -> String {
    TARGET_CRATES
        .iter()
        .map(|&c| format!("{c}={log_level}"))
        .join(",")
}

/// Builds a tracing filter based on the input `log_level`, unless
/// `RUST_LOG` is set.
fn build_tracing_filter(default_level: LogLevel) -> eyre::Result<EnvFilter> {
    let directive =
        std::env::var(LOG_VAR).unwrap_or_else(|_| default_directive(default_level));

    EnvFilter::try_new(&directive)
        .wrap_err_with(|| format!("invalid tracing directive '{directive}'"))
}

/// Check if both stdout and stderr are proper terminal (tty),
/// so that we know whether or not to enable colored output.
pub fn enable_ansi() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}

/// Installs the global subscriber: JSON lines on stdout when
/// `log_json` is set, human-readable output on stderr otherwise.
pub fn init_tracing(cfg: &GlobalConfig) -> eyre::Result<()> {
    let filter = build_tracing_filter(cfg.log_level)?;

    if cfg.log_json {
        Registry::default()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_writer(std::io::stdout),
            )
            .with(ErrorLayer::default())
            .try_init()?;
    } else {
        Registry::default()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_ansi(enable_ansi())
                    .with_writer(std::io::stderr),
            )
            .with(ErrorLayer::default())
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_targets_our_crates() {
        assert_eq!(
            default_directive(LogLevel::Debug),
            "cosmos_rpc_app=debug,cosmos_rpc_cli=debug"
        );
    }

    #[test]
    fn default_directive_is_a_valid_filter() {
        for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Error] {
            assert!(EnvFilter::try_new(default_directive(level)).is_ok());
        }
    }
}
