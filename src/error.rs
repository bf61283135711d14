use thiserror::Error;

use crate::LoadError;

/// Unified error type covering rule loading, I/O and output encoding.
///
/// Returned by the service entry points such as
/// [`server::serve()`](crate::server::serve). Selection itself never fails.
#[derive(Debug, Error)]
pub enum RebateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "server")]
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
