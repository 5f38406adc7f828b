//! Error types for driving pipelines.
//!
//! Statically typed inputs and targets cannot be of an unsupported shape, so
//! most of these come from the dynamically shaped JSON layer or from drivers
//! that need something a transformer does not provide.

use thiserror::Error;

/// Errors surfaced synchronously to the caller of a driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is neither a sequence nor a mapping.
    #[error("unsupported input shape: {shape}")]
    UnsupportedInput { shape: &'static str },

    /// The accumulation target is neither a sequence nor a mapping.
    #[error("unsupported target shape: {shape}")]
    UnsupportedTarget { shape: &'static str },

    /// A driver asked a transformer for its initial accumulator and it has none.
    #[error("transformer has no initial value; supply one explicitly")]
    MissingInit,

    /// A mapping target received something other than a `[key, value]` pair.
    #[error("mapping target expects a [string, value] pair, got {found}")]
    InvalidEntry { found: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
