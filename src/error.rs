//! Error types.

use thiserror::Error;

/// Required configuration is missing. Raised before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a source path must be specified")]
    MissingPath,
    #[error("a source URL must be specified")]
    MissingUrl,
}
