//! Logging subscriber initialisation.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::RebateError;
use crate::config::{LogFormat, LoggingConfig};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` directives take precedence; otherwise `log_level` applies.
///
/// # Errors
///
/// Returns [`RebateError::Logging`] if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), RebateError> {
    let registry = tracing_subscriber::registry().with(build_env_filter(config));

    match config.log_format {
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init()?,
    }
    Ok(())
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},hyper=warn,tower=warn", config.log_level))
    })
}
