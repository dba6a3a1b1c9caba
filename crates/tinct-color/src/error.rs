//! Error types for color parsing.

use thiserror::Error;

/// Errors produced by the color engine.
///
/// Only parsing can fail: every other operation is total over [`Color`](crate::Color)
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matched none of the accepted color grammars.
    #[error("invalid color format: '{input}'")]
    InvalidColorFormat {
        /// The offending input, exactly as given.
        input: String,
    },

    /// A name did not match any variant of a closed enumeration
    /// (representation, metric, blend space).
    #[error("unknown {kind} '{name}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        ColorError::InvalidColorFormat {
            input: input.to_string(),
        }
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
