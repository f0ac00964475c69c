//! Plotcanvas - declarative 2D plotting rendered through TikZ.
//!
//! Scenes are built from a [`Canvas`](canvas::Canvas) holding named, z-ordered
//! drawables. [`CanvasRenderer`] serializes a canvas into a LaTeX document
//! with a `tikzpicture` body and hands it to a
//! [`DocumentConverter`](convert::DocumentConverter) that writes the final
//! artifact.

pub mod config;
pub mod convert;
pub mod export;

mod error;

pub use plotcanvas_core::{canvas, container, draw, geometry};

pub use error::PlotError;

use std::path::{Path, PathBuf};

use log::{debug, info, trace, warn};

use plotcanvas_core::canvas::Canvas;

use config::AppConfig;
use convert::DocumentConverter;
use export::{
    FragmentEmitter, RenderedDocument, SkippedDrawable, UnsupportedPolicy, tikz::TikzEmitter,
};

/// Builder for rendering canvases to documents and artifacts.
///
/// # Examples
///
/// ```rust,no_run
/// use plotcanvas::{CanvasRenderer, canvas::Canvas, config::AppConfig, draw::Rect};
///
/// let mut canvas = Canvas::new(14.0, 10.0).expect("valid extents");
/// canvas
///     .add(Box::new(Rect::new(0.1, 0.2, 0.6, 0.7)), Some("box1"))
///     .expect("unique name");
///
/// let renderer = CanvasRenderer::new(AppConfig::default());
///
/// // In-memory document
/// let document = renderer.render_document(&canvas).expect("Failed to render");
/// println!("{}", document.text());
///
/// // Artifact on disk, using the configured output path
/// let outcome = renderer.render(&canvas).expect("Failed to convert");
/// println!("{}", outcome.path().display());
/// ```
#[derive(Default)]
pub struct CanvasRenderer {
    config: AppConfig,
    converter: Option<Box<dyn DocumentConverter>>,
}

impl CanvasRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// The converter is chosen from the output path's extension at render
    /// time unless one is injected with [`with_converter`](Self::with_converter).
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            converter: None,
        }
    }

    /// Use `converter` for every artifact instead of choosing one by extension.
    pub fn with_converter(mut self, converter: Box<dyn DocumentConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serialize a canvas into a complete document.
    ///
    /// Drawables are emitted in ascending z-order. The canvas is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::UnsupportedDrawable`] if strict mode is enabled
    /// and the canvas contains a drawable variant the emitter does not know.
    pub fn render_document(&self, canvas: &Canvas) -> Result<RenderedDocument, PlotError> {
        let render_config = self.config.render();
        let precision = render_config.precision();
        let policy = render_config.unsupported_policy();
        let template = render_config.template().to_template();

        info!(elements = canvas.len(), precision, policy:?; "Rendering canvas");

        let emitter = TikzEmitter::new(precision);
        let mut body = String::new();
        let mut skipped = Vec::new();

        for (name, drawable) in canvas.iter_named_in_z_order() {
            if let Some(fragment) = emitter.emit(drawable) {
                trace!(name, z_index = drawable.effective_z_index(); "Emitted drawable");
                body.push_str(&fragment);
                continue;
            }

            match policy {
                UnsupportedPolicy::Fail => {
                    return Err(PlotError::new_unsupported_drawable(name, drawable.kind()));
                }
                UnsupportedPolicy::Skip => {
                    warn!(name, kind = drawable.kind(); "Skipping unsupported drawable");
                    skipped.push(SkippedDrawable::new(name, drawable.kind()));
                }
            }
        }

        let preamble = template.render_preamble(canvas.size(), precision);
        let document = RenderedDocument::new(&preamble, &body, template.trailer(), skipped);

        debug!(
            document_len = document.text().len(),
            skipped = document.skipped().len();
            "Document assembled"
        );
        Ok(document)
    }

    /// Render a canvas and convert it to the configured output path.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::UnsupportedDrawable`] as [`render_document`](Self::render_document)
    /// does, and [`PlotError::Conversion`] if the converter fails.
    pub fn render(&self, canvas: &Canvas) -> Result<RenderOutcome, PlotError> {
        let output_path = self.config.render().output_path();
        self.render_to(canvas, output_path)
    }

    /// Render a canvas and convert it to `output_path`, overriding the configuration.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn render_to(
        &self,
        canvas: &Canvas,
        output_path: &Path,
    ) -> Result<RenderOutcome, PlotError> {
        let document = self.render_document(canvas)?;
        let (text, skipped) = document.into_parts();

        info!(output_path = output_path.display().to_string(); "Converting document");
        match &self.converter {
            Some(converter) => converter.convert(&text, output_path)?,
            None => {
                convert::converter_for_path(output_path, self.config.converter())?
                    .convert(&text, output_path)?
            }
        }

        info!(output_path = output_path.display().to_string(); "Canvas rendered successfully");
        Ok(RenderOutcome {
            path: output_path.to_path_buf(),
            skipped,
        })
    }
}

/// Result of a successful [`CanvasRenderer::render`].
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    path: PathBuf,
    skipped: Vec<SkippedDrawable>,
}

impl RenderOutcome {
    /// Path of the written artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drawables left out of the document.
    pub fn skipped(&self) -> &[SkippedDrawable] {
        &self.skipped
    }
}
