//! Scene files: TOML descriptions of a canvas and its elements.
//!
//! ```toml
//! [canvas]
//! width = 14
//! height = 10
//! stack = false        # optional: stack elements without a z_index
//!
//! [[element]]
//! kind = "rect"
//! name = "box1"        # optional, auto-named when omitted
//! coords = [0.1, 0.2, 0.6, 0.7]
//! z_index = 1          # optional
//! ```

use std::{fs, path::Path};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use plotcanvas::{PlotError, canvas::Canvas, draw::Rect, geometry::Size};

/// Scene-file errors for CLI
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to parse scene file: {0}")]
    Parse(String),
}

impl From<SceneError> for PlotError {
    fn from(err: SceneError) -> Self {
        match err {
            SceneError::Parse(msg) => PlotError::SceneFormat(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    canvas: CanvasSpec,

    #[serde(default, rename = "element")]
    elements: Vec<ElementSpec>,
}

#[derive(Debug, Deserialize)]
struct CanvasSpec {
    #[serde(flatten)]
    size: Size,

    /// Assign increasing z-indices to elements that do not set one.
    #[serde(default)]
    stack: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ElementSpec {
    Rect {
        #[serde(default)]
        name: Option<String>,
        coords: [f64; 4],
        #[serde(default)]
        z_index: Option<i32>,
    },
}

/// Reads and builds the canvas described by the scene file at `path`.
///
/// # Errors
///
/// Returns [`PlotError::Io`] if the file cannot be read,
/// [`PlotError::SceneFormat`] if it is not a valid scene description, and
/// [`PlotError::Scene`] for invalid extents or duplicate element names.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Canvas, PlotError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading scene");

    let source = fs::read_to_string(path)?;
    parse_scene(&source)
}

/// Builds the canvas described by scene-file `source`.
///
/// # Errors
///
/// See [`load_scene`].
pub fn parse_scene(source: &str) -> Result<Canvas, PlotError> {
    let scene: SceneFile = toml::from_str(source).map_err(|e| SceneError::Parse(e.to_string()))?;

    let mut canvas = Canvas::with_size(scene.canvas.size)?;
    for element in scene.elements {
        match element {
            ElementSpec::Rect {
                name,
                coords: [x1, y1, x2, y2],
                z_index,
            } => {
                let mut rect = Rect::new(x1, y1, x2, y2);
                let key = match z_index {
                    Some(z_index) => {
                        rect = rect.with_z_index(z_index);
                        canvas.add(Box::new(rect), name.as_deref())?
                    }
                    None if scene.canvas.stack => {
                        canvas.add_on_top(Box::new(rect), name.as_deref())?
                    }
                    None => canvas.add(Box::new(rect), name.as_deref())?,
                };
                debug!(key; "Scene element added");
            }
        }
    }

    info!(elements = canvas.len(); "Scene loaded");
    Ok(canvas)
}
