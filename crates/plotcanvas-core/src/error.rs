//! Error types for scene-graph operations.

use thiserror::Error;

/// Errors raised while building or querying a scene.
///
/// Every operation that returns one of these leaves the container or canvas
/// it was called on unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An element with the requested key is already present.
    #[error("Drawable key '{0}' already exists in container")]
    DuplicateKey(String),

    /// No element is stored under the requested key.
    #[error("No drawable named '{0}' in container")]
    KeyNotFound(String),

    /// A canvas extent is not a finite, strictly positive number.
    #[error("Invalid canvas {axis}: {value} (must be finite and greater than zero)")]
    InvalidDimension { axis: &'static str, value: f64 },

    /// The element stored under the key is not of the requested variant.
    #[error("Drawable '{name}' is a {actual}, not a {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// [`Canvas::add_on_top`](crate::canvas::Canvas::add_on_top) has no z-index left to assign.
    #[error("Stacking z-index counter is exhausted")]
    ZIndexExhausted,
}
