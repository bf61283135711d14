use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading discount rules into a
/// [`RuleStore`](super::RuleStore).
///
/// A failed load never disturbs the rules already in the store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read discount rules from '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed discount rules: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for LoadError {
    fn from(source: serde_json::Error) -> Self {
        Self::Malformed { source }
    }
}
