//! Document assembly for rendered canvases.
//!
//! A rendered document is a fixed preamble, a body made of one fragment per
//! emitted drawable, and a fixed trailer. Fragments come from a
//! [`FragmentEmitter`]; the TikZ emitter in [`tikz`] is the one used by
//! [`CanvasRenderer`](crate::CanvasRenderer).

pub mod tikz;

use std::ops::Range;

use plotcanvas_core::{draw::Drawable, geometry::Size};

/// Produces markup fragments for the drawable variants it recognizes.
pub trait FragmentEmitter {
    /// Returns the fragment for `drawable`, or `None` if its variant is not supported.
    fn emit(&self, drawable: &dyn Drawable) -> Option<String>;
}

/// What the renderer does with a drawable the emitter does not recognize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedPolicy {
    /// Log a warning and record the drawable in [`RenderedDocument::skipped`].
    #[default]
    Skip,
    /// Abort rendering with [`PlotError::UnsupportedDrawable`](crate::PlotError::UnsupportedDrawable).
    Fail,
}

/// Preamble and trailer text wrapped around the emitted body.
///
/// The preamble may contain `{width}` and `{height}` placeholders which are
/// replaced with the canvas extents.
///
/// # Example
///
/// ```
/// # use plotcanvas::export::DocumentTemplate;
/// # use plotcanvas::geometry::Size;
/// let template = DocumentTemplate::new("size {width}x{height}\n", "end\n");
/// assert_eq!(template.render_preamble(Size::new(14.0, 10.0), 1), "size 14.0x10.0\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    preamble: String,
    trailer: String,
}

impl DocumentTemplate {
    pub fn new(preamble: impl Into<String>, trailer: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            trailer: trailer.into(),
        }
    }

    /// Returns the raw preamble, placeholders included.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn trailer(&self) -> &str {
        &self.trailer
    }

    /// Returns the preamble with the canvas extents substituted.
    pub fn render_preamble(&self, size: Size, precision: usize) -> String {
        self.preamble
            .replace("{width}", &format_number(size.width(), precision))
            .replace("{height}", &format_number(size.height(), precision))
    }
}

impl Default for DocumentTemplate {
    /// A standalone LaTeX article whose page matches the canvas, with an open
    /// `tikzpicture` environment.
    fn default() -> Self {
        Self::new(
            tikz::DEFAULT_PREAMBLE.to_string(),
            tikz::DEFAULT_TRAILER.to_string(),
        )
    }
}

/// A drawable left out of the document under [`UnsupportedPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDrawable {
    name: String,
    kind: &'static str,
}

impl SkippedDrawable {
    pub fn new(name: impl Into<String>, kind: &'static str) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Key of the drawable in its container.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant name reported by the drawable.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

/// The full document text produced for one canvas.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    text: String,
    body: Range<usize>,
    skipped: Vec<SkippedDrawable>,
}

impl RenderedDocument {
    /// Concatenates preamble, body and trailer.
    pub fn new(preamble: &str, body: &str, trailer: &str, skipped: Vec<SkippedDrawable>) -> Self {
        let mut text = String::with_capacity(preamble.len() + body.len() + trailer.len());
        text.push_str(preamble);
        text.push_str(body);
        text.push_str(trailer);

        Self {
            text,
            body: preamble.len()..preamble.len() + body.len(),
            skipped,
        }
    }

    /// Returns the complete document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns only the emitted fragments.
    pub fn body(&self) -> &str {
        &self.text[self.body.clone()]
    }

    /// Drawables that were skipped because the emitter did not support them.
    pub fn skipped(&self) -> &[SkippedDrawable] {
        &self.skipped
    }

    /// Consumes the document, returning the text and the skipped drawables.
    pub fn into_parts(self) -> (String, Vec<SkippedDrawable>) {
        (self.text, self.skipped)
    }
}

/// Formats a number in fixed-point notation with `precision` fractional digits.
pub fn format_number(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.1, 6), "0.100000");
        assert_eq!(format_number(14.0, 2), "14.00");
        assert_eq!(format_number(-1.5, 2), "-1.50");
        assert_eq!(format_number(3.0, 0), "3");
    }

    #[test]
    fn test_render_preamble_substitutes_extents() {
        let template = DocumentTemplate::new("w={width} h={height} w={width}", "");
        assert_eq!(
            template.render_preamble(Size::new(14.0, 10.0), 2),
            "w=14.00 h=10.00 w=14.00"
        );
    }

    #[test]
    fn test_default_template_is_tikz_document() {
        let template = DocumentTemplate::default();
        assert!(template.preamble().starts_with("\\documentclass"));
        assert!(template.preamble().ends_with("\\begin{tikzpicture}\n"));
        assert_eq!(template.trailer(), "\\end{tikzpicture}\n\\end{document}\n");
    }

    #[test]
    fn test_rendered_document_parts() {
        let skipped = vec![SkippedDrawable::new("legend", "legend")];
        let document = RenderedDocument::new("head\n", "body\n", "tail\n", skipped);

        assert_eq!(document.text(), "head\nbody\ntail\n");
        assert_eq!(document.body(), "body\n");
        assert_eq!(document.skipped().len(), 1);
        assert_eq!(document.skipped()[0].name(), "legend");

        let (text, skipped) = document.into_parts();
        assert_eq!(text, "head\nbody\ntail\n");
        assert_eq!(skipped[0].kind(), "legend");
    }

    #[test]
    fn test_rendered_document_empty_body() {
        let document = RenderedDocument::new("head\n", "", "tail\n", Vec::new());
        assert_eq!(document.text(), "head\ntail\n");
        assert_eq!(document.body(), "");
    }
}
