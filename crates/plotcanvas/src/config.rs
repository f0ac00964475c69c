//! Configuration types for canvas rendering.
//!
//! This module provides configuration structures that control how a canvas is
//! serialized and converted. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and converter settings.
//! - [`RenderConfig`] - Output path, numeric precision, unsupported-drawable policy and template.
//! - [`TemplateConfig`] - Optional overrides for the document preamble and trailer.
//! - [`ConverterConfig`] - External tools used to turn the document into an artifact.
//!
//! # Example
//!
//! ```
//! # use plotcanvas::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().precision(), 6);
//! assert!(!config.render().strict_unsupported());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::export::{DocumentTemplate, UnsupportedPolicy};

/// Number of fractional digits used for coordinates by default.
pub const DEFAULT_PRECISION: usize = 6;

/// Top-level configuration combining render and converter settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Converter configuration section.
    #[serde(default)]
    converter: ConverterConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, converter: ConverterConfig) -> Self {
        Self { render, converter }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the render configuration mutably.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }

    /// Returns the converter configuration.
    pub fn converter(&self) -> &ConverterConfig {
        &self.converter
    }
}

/// Settings that control document generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Where the converted artifact is written.
    output_path: PathBuf,

    /// Fractional digits for every emitted coordinate.
    precision: usize,

    /// Fail on drawables the emitter does not recognize instead of skipping them.
    strict_unsupported: bool,

    /// Preamble and trailer overrides.
    template: TemplateConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("out.pdf"),
            precision: DEFAULT_PRECISION,
            strict_unsupported: false,
            template: TemplateConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn strict_unsupported(&self) -> bool {
        self.strict_unsupported
    }

    pub fn template(&self) -> &TemplateConfig {
        &self.template
    }

    /// Returns the policy applied to unrecognized drawables.
    pub fn unsupported_policy(&self) -> UnsupportedPolicy {
        if self.strict_unsupported {
            UnsupportedPolicy::Fail
        } else {
            UnsupportedPolicy::Skip
        }
    }

    /// Sets the output path (builder style).
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Sets the coordinate precision (builder style).
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the unsupported-drawable strictness (builder style).
    pub fn with_strict_unsupported(mut self, strict: bool) -> Self {
        self.strict_unsupported = strict;
        self
    }

    /// Sets the template overrides (builder style).
    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.template = template;
        self
    }

    pub fn set_output_path(&mut self, output_path: impl Into<PathBuf>) {
        self.output_path = output_path.into();
    }

    pub fn set_strict_unsupported(&mut self, strict: bool) {
        self.strict_unsupported = strict;
    }
}

/// Optional overrides for the document template.
///
/// Missing fields fall back to [`DocumentTemplate::default`]. The preamble
/// may contain `{width}` and `{height}` placeholders, replaced by the canvas
/// extents when a document is rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    preamble: Option<String>,

    #[serde(default)]
    trailer: Option<String>,
}

impl TemplateConfig {
    /// Creates template overrides.
    pub fn new(preamble: Option<String>, trailer: Option<String>) -> Self {
        Self { preamble, trailer }
    }

    /// Resolves the overrides against the default template.
    pub fn to_template(&self) -> DocumentTemplate {
        let default = DocumentTemplate::default();
        DocumentTemplate::new(
            self.preamble
                .clone()
                .unwrap_or_else(|| default.preamble().to_string()),
            self.trailer
                .clone()
                .unwrap_or_else(|| default.trailer().to_string()),
        )
    }
}

/// External tools used by the LaTeX converter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// LaTeX engine producing a PDF from the document.
    latex_command: String,

    /// PDF rasterizer used for PNG output.
    raster_command: String,

    /// Raster resolution in dots per inch.
    raster_resolution: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            latex_command: "pdflatex".to_string(),
            raster_command: "pdftoppm".to_string(),
            raster_resolution: 150,
        }
    }
}

impl ConverterConfig {
    pub fn latex_command(&self) -> &str {
        &self.latex_command
    }

    pub fn raster_command(&self) -> &str {
        &self.raster_command
    }

    pub fn raster_resolution(&self) -> u32 {
        self.raster_resolution
    }

    /// Sets the LaTeX engine (builder style).
    pub fn with_latex_command(mut self, command: impl Into<String>) -> Self {
        self.latex_command = command.into();
        self
    }

    /// Sets the PDF rasterizer (builder style).
    pub fn with_raster_command(mut self, command: impl Into<String>) -> Self {
        self.raster_command = command.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.render().output_path(), Path::new("out.pdf"));
        assert_eq!(config.render().precision(), DEFAULT_PRECISION);
        assert_eq!(config.render().unsupported_policy(), UnsupportedPolicy::Skip);
        assert_eq!(config.converter().latex_command(), "pdflatex");
        assert_eq!(config.converter().raster_command(), "pdftoppm");
        assert_eq!(config.converter().raster_resolution(), 150);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            precision = 3
            strict_unsupported = true

            [converter]
            latex_command = "lualatex"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.render().precision(), 3);
        assert_eq!(config.render().unsupported_policy(), UnsupportedPolicy::Fail);
        assert_eq!(config.render().output_path(), Path::new("out.pdf"));
        assert_eq!(config.converter().latex_command(), "lualatex");
        assert_eq!(config.converter().raster_command(), "pdftoppm");
    }

    #[test]
    fn test_deserialize_template_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [render.template]
            preamble = "BEGIN {width}x{height}\n"
            "#,
        )
        .expect("valid config");

        let template = config.render().template().to_template();
        assert_eq!(template.preamble(), "BEGIN {width}x{height}\n");
        assert_eq!(template.trailer(), DocumentTemplate::default().trailer());
    }

    #[test]
    fn test_render_config_builders() {
        let render = RenderConfig::default()
            .with_output_path("plot.tex")
            .with_precision(2)
            .with_strict_unsupported(true);

        assert_eq!(render.output_path(), Path::new("plot.tex"));
        assert_eq!(render.precision(), 2);
        assert!(render.strict_unsupported());
    }
}
