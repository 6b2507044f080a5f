//! Error types for opt-precision.
//!
//! The type bindings themselves cannot fail at runtime. These errors cover
//! the value-level helpers: parsing a precision name, comparing a recorded
//! precision to the build, and reinterpreting scalar buffers.

use thiserror::Error;

use crate::precision::Precision;

/// Error type for opt-precision.
#[derive(Debug, Error)]
pub enum PrecisionError {
    /// Text did not name a supported precision family.
    #[error("Unknown precision '{0}' (expected 'f32' or 'f64')")]
    UnknownPrecision(String),

    /// Data or configuration produced under another precision family.
    #[error("Precision mismatch: this build uses {expected}, found {found}")]
    Mismatch {
        expected: Precision,
        found: Precision,
    },

    /// A scalar buffer cannot be viewed as a slice of vectors.
    #[error("Cannot view {len} scalars as Vector{width}: {reason}")]
    Layout {
        len: usize,
        width: usize,
        reason: String,
    },
}

/// Convenience alias for `Result<T, PrecisionError>`.
pub type PrecisionResult<T> = Result<T, PrecisionError>;
