//! Error types for input handling.
//!
//! The transformation operators themselves are total; these errors only come
//! from validating user-facing input.

use thiserror::Error;

/// Errors reported while collecting or validating lab input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabError {
    /// A reflection axis label did not name one of the four mirror lines.
    #[error("unknown reflection axis: {0:?}")]
    UnknownAxis(String),

    /// A vertex index was outside the polygon.
    #[error("vertex index {index} out of range for polygon with {len} vertices")]
    VertexIndex { index: usize, len: usize },

    /// A vertex coordinate was NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, found {found}")]
    TooFewVertices { found: usize },
}

/// Result alias for lab operations.
pub type Result<T> = std::result::Result<T, LabError>;
