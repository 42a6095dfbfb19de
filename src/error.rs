//! Error types for the breadboard engine.
//!
//! This module provides a unified error type [`BreadboardError`] that covers
//! the few failure conditions the engine recognizes. Most operations are
//! total: acting on a component id that no longer exists is a no-op, not an
//! error, because removal can race with a queued UI action. The one hard
//! precondition is geometric sanity: non-finite coordinates are rejected
//! before they can poison the adjacency computation.

use thiserror::Error;

use crate::board::ComponentId;

/// Result type alias using [`BreadboardError`].
pub type Result<T> = std::result::Result<T, BreadboardError>;

/// Unified error type for all breadboard operations.
#[derive(Error, Debug)]
pub enum BreadboardError {
    // ============ Geometry Preconditions ============
    /// A drop point or drag candidate contained NaN or infinity.
    #[error("Non-finite position ({x}, {y}) rejected")]
    NonFinitePosition { x: f64, y: f64 },

    /// A rotation angle contained NaN or infinity.
    #[error("Non-finite rotation {degrees} for component {id}")]
    NonFiniteRotation { id: ComponentId, degrees: f64 },

    // ============ CLI Errors ============
    /// Error in a layout script command.
    #[cfg(feature = "cli")]
    #[error("Script error at line {line}: {message}")]
    ScriptError { line: usize, message: String },

    /// Error reading a layout script file.
    #[cfg(feature = "cli")]
    #[error("Failed to read script file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BreadboardError {
    /// Create a non-finite position error.
    pub fn non_finite_position(x: f64, y: f64) -> Self {
        Self::NonFinitePosition { x, y }
    }

    /// Create a non-finite rotation error.
    pub fn non_finite_rotation(id: ComponentId, degrees: f64) -> Self {
        Self::NonFiniteRotation { id, degrees }
    }

    /// Create a script error.
    #[cfg(feature = "cli")]
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::ScriptError {
            line,
            message: message.into(),
        }
    }
}
