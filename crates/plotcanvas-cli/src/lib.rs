//! CLI logic for the plotcanvas tool.
//!
//! Reads a scene file, renders it through [`CanvasRenderer`], and writes the
//! resulting artifact.

pub mod error_adapter;
pub mod scene;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};

use plotcanvas::{CanvasRenderer, PlotError};

/// Run the plotcanvas CLI application
///
/// # Errors
///
/// Returns `PlotError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing and construction errors
/// - Unsupported drawables in strict mode
/// - Conversion errors
pub fn run(args: &Args) -> Result<(), PlotError> {
    info!(input_path = args.input, output_path:? = args.output; "Processing scene");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(output) = &args.output {
        app_config.render_mut().set_output_path(output);
    }
    if args.strict {
        app_config.render_mut().set_strict_unsupported(true);
    }

    let canvas = scene::load_scene(&args.input)?;

    let renderer = CanvasRenderer::new(app_config);
    let outcome = renderer.render(&canvas)?;

    for skipped in outcome.skipped() {
        warn!(name = skipped.name(), kind = skipped.kind(); "Drawable was not rendered");
    }

    info!(output_file = outcome.path().display().to_string(); "Scene rendered successfully");

    Ok(())
}
