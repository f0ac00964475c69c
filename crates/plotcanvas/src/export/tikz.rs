//! TikZ emission.
//!
//! Every recognized drawable becomes one TikZ drawing command inside the
//! document's `tikzpicture` environment.

use log::trace;

use plotcanvas_core::draw::{Drawable, Rect};

use crate::export::{FragmentEmitter, format_number};

/// Default preamble: a borderless article page sized to the canvas (in cm).
pub const DEFAULT_PREAMBLE: &str = "\
\\documentclass[11pt]{article}
\\usepackage{amsmath,amssymb}
\\usepackage[margin=0cm,paperwidth={width}cm,paperheight={height}cm]{geometry}
\\usepackage{tikz}
\\pagestyle{empty}
\\usepackage[osf]{mathpazo}
\\begin{document}
\\thispagestyle{empty}
\\begin{tikzpicture}
";

/// Default trailer closing the environments opened by [`DEFAULT_PREAMBLE`].
pub const DEFAULT_TRAILER: &str = "\
\\end{tikzpicture}
\\end{document}
";

/// Emits TikZ commands with fixed-point coordinates.
///
/// # Example
///
/// ```
/// # use plotcanvas::draw::Rect;
/// # use plotcanvas::export::{FragmentEmitter, tikz::TikzEmitter};
/// let emitter = TikzEmitter::new(6);
/// let fragment = emitter.emit(&Rect::new(0.1, 0.2, 0.6, 0.7)).unwrap();
/// assert_eq!(fragment, " \\draw (0.100000,0.200000) -- (0.600000,0.700000);\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TikzEmitter {
    precision: usize,
}

impl TikzEmitter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    fn emit_rect(&self, rect: &Rect) -> String {
        format!(
            " \\draw ({},{}) -- ({},{});\n",
            self.number(rect.x1()),
            self.number(rect.y1()),
            self.number(rect.x2()),
            self.number(rect.y2()),
        )
    }

    fn number(&self, value: f64) -> String {
        format_number(value, self.precision)
    }
}

impl FragmentEmitter for TikzEmitter {
    fn emit(&self, drawable: &dyn Drawable) -> Option<String> {
        if let Some(rect) = drawable.downcast_ref::<Rect>() {
            trace!(rect:% = rect; "Emitting rect");
            return Some(self.emit_rect(rect));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;

    #[derive(Debug)]
    struct Legend;

    impl Drawable for Legend {
        fn z_index(&self) -> Option<i32> {
            None
        }

        fn set_z_index(&mut self, _z_index: Option<i32>) {}

        fn kind(&self) -> &'static str {
            "legend"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_emit_rect_default_precision() {
        let emitter = TikzEmitter::new(6);
        let fragment = emitter.emit(&Rect::new(0.1, 0.2, 0.6, 0.7));

        assert_eq!(
            fragment.as_deref(),
            Some(" \\draw (0.100000,0.200000) -- (0.600000,0.700000);\n")
        );
    }

    #[test]
    fn test_emit_rect_custom_precision() {
        let emitter = TikzEmitter::new(2);
        let fragment = emitter.emit(&Rect::new(1.0, -2.5, 3.1234, 4.0)).unwrap();

        assert_eq!(fragment, " \\draw (1.00,-2.50) -- (3.12,4.00);\n");
    }

    #[test]
    fn test_emit_rect_keeps_corner_order() {
        let emitter = TikzEmitter::new(1);
        let fragment = emitter.emit(&Rect::new(5.0, 4.0, 1.0, 2.0)).unwrap();

        assert_eq!(fragment, " \\draw (5.0,4.0) -- (1.0,2.0);\n");
    }

    #[test]
    fn test_emit_unknown_variant() {
        let emitter = TikzEmitter::new(6);
        assert!(emitter.emit(&Legend).is_none());
    }

    #[test]
    fn test_default_template_placeholders() {
        assert!(DEFAULT_PREAMBLE.contains("paperwidth={width}cm"));
        assert!(DEFAULT_PREAMBLE.contains("paperheight={height}cm"));
        assert!(DEFAULT_TRAILER.starts_with("\\end{tikzpicture}"));
    }
}
