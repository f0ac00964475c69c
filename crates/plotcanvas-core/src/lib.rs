//! Plotcanvas Core Types and Definitions
//!
//! This crate provides the scene-graph nucleus of the plotcanvas plotting
//! library. It includes:
//!
//! - **Drawables**: The [`draw::Drawable`] trait and shape primitives such as [`draw::Rect`]
//! - **Containers**: Named, z-ordered element storage ([`container::ElementContainer`])
//! - **Canvas**: A sized drawing sheet owning its elements ([`canvas::Canvas`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//!
//! # Example
//!
//! ```
//! use plotcanvas_core::{canvas::Canvas, draw::Rect};
//!
//! let mut canvas = Canvas::new(14.0, 10.0).unwrap();
//! canvas.add(Box::new(Rect::new(0.1, 0.2, 0.6, 0.7)), Some("box1")).unwrap();
//! let key = canvas.add(Box::new(Rect::new(0.0, 0.0, 1.0, 1.0)), None).unwrap();
//!
//! assert_eq!(key, "_1");
//! assert_eq!(canvas.len(), 2);
//! ```

pub mod canvas;
pub mod container;
pub mod draw;
pub mod geometry;

mod error;

pub use error::Error;
