//! Shared error type across slowbox crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SlowboxError>;

/// Unified error type used by core and server.
///
/// The taxonomy is deliberately small: behavior policies cannot fail, and a
/// simulated 4xx/5xx is a designed outcome rather than an error. What remains
/// is startup plumbing (config, metrics registration) and catch-all internal
/// failures.
#[derive(Debug, Error)]
pub enum SlowboxError {
    #[error("config: {0}")]
    Config(String),
    #[error("metrics: {0}")]
    Metrics(String),
    #[error("internal: {0}")]
    Internal(String),
}
