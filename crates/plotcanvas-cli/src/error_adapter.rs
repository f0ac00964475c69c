//! Error adapter for converting PlotError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use plotcanvas::{PlotError, convert::ConversionError};

/// Adapter giving a [`PlotError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a PlotError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlotError::Io(_) => "plotcanvas::io",
            PlotError::Scene(_) | PlotError::SceneFormat(_) => "plotcanvas::scene",
            PlotError::UnsupportedDrawable { .. } => "plotcanvas::unsupported",
            PlotError::Conversion(_) => "plotcanvas::conversion",
            PlotError::Config(_) => "plotcanvas::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PlotError::UnsupportedDrawable { .. } => {
                "run without --strict to skip drawables the renderer cannot emit"
            }
            PlotError::Conversion(ConversionError::ToolNotFound { .. }) => {
                "install a LaTeX distribution, or write a .tex file instead"
            }
            PlotError::Conversion(ConversionError::UnsupportedFormat(_)) => {
                "use an output path ending in .tex, .pdf or .png"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`PlotError`] into a reportable diagnostic.
pub fn to_reportable(err: &PlotError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = PlotError::Config("bad".to_string());
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "plotcanvas::config");
        assert_eq!(adapter.to_string(), "Configuration error: bad");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_unsupported_help() {
        let err = PlotError::new_unsupported_drawable("legend", "legend");
        let adapter = to_reportable(&err);

        assert_eq!(
            adapter.code().unwrap().to_string(),
            "plotcanvas::unsupported"
        );
        assert!(adapter.help().unwrap().to_string().contains("--strict"));
    }

    #[test]
    fn test_missing_tool_help() {
        let err = PlotError::Conversion(ConversionError::ToolNotFound {
            tool: "pdflatex".to_string(),
        });
        let adapter = to_reportable(&err);

        assert_eq!(
            adapter.code().unwrap().to_string(),
            "plotcanvas::conversion"
        );
        assert!(adapter.help().unwrap().to_string().contains(".tex"));
    }

    #[test]
    fn test_scene_format_code() {
        let err = PlotError::SceneFormat("unknown variant `hexagon`".to_string());
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "plotcanvas::scene");
        assert!(adapter.to_string().starts_with("Invalid scene file:"));
    }

    #[test]
    fn test_source_is_forwarded() {
        let err = PlotError::Conversion(ConversionError::UnsupportedFormat("a.svg".to_string()));
        let adapter = to_reportable(&err);

        assert!(std::error::Error::source(&adapter).is_some());
    }
}
