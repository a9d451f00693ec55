//! Tracing subscriber installation.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::settings::LogFormat;

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for command output. Filtering follows `RUST_LOG`.
///
/// A second call leaves the first subscriber in place and logs a warning.
pub fn init(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
