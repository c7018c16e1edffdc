//! Logging setup
//!
//! Console only. Everything goes to stderr so stdout stays clean for
//! command output.

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn,mesa_client=info,mesa_cli=info";

/// Install the global subscriber.
///
/// `RUST_LOG` wins when present; otherwise `verbose` picks between
/// [`DEFAULT_FILTER`] and `debug`. `json_format` switches the console layer
/// to one JSON object per line.
pub fn init_logger(verbose: bool, json_format: bool) -> anyhow::Result<()> {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}
