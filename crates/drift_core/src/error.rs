//! Error types for the particle field.

use thiserror::Error;

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised while building or stepping a field.
///
/// Stepping never fails on valid numeric input; these guard against a host
/// feeding NaN/Infinity, which would otherwise poison every later frame.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Elapsed time was NaN or infinite.
    #[error("non-finite time: {0}")]
    NonFiniteTime(f64),

    /// Pointer had a NaN or infinite component.
    #[error("non-finite pointer: ({x}, {y})")]
    NonFinitePointer { x: f32, y: f32 },

    /// Initial particle state with a NaN or infinite component.
    #[error("non-finite state for particle {index}")]
    NonFiniteState { index: usize },

    /// Position/velocity buffer with the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}
