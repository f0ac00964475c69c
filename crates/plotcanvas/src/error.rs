//! Error types for plotcanvas operations.
//!
//! This module provides the main error type [`PlotError`] which wraps the
//! failures that can occur while building, rendering, or converting a canvas.

use std::io;

use thiserror::Error;

use crate::convert::ConversionError;

/// The main error type for plotcanvas operations.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Scene error: {0}")]
    Scene(#[from] plotcanvas_core::Error),

    #[error("Invalid scene file: {0}")]
    SceneFormat(String),

    #[error("Unsupported drawable '{name}' of kind '{kind}'")]
    UnsupportedDrawable { name: String, kind: &'static str },

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlotError {
    /// Create a new `UnsupportedDrawable` error.
    pub fn new_unsupported_drawable(name: impl Into<String>, kind: &'static str) -> Self {
        Self::UnsupportedDrawable {
            name: name.into(),
            kind,
        }
    }
}
