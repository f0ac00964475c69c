//! Conversion of rendered documents into artifacts on disk.
//!
//! The renderer hands the finished document text to a [`DocumentConverter`].
//! Two converters are provided:
//!
//! - [`TexWriter`] writes the document unchanged (`.tex` output).
//! - [`LatexConverter`] compiles the document with an external LaTeX engine
//!   (`.pdf` output) and optionally rasterizes the result (`.png` output).
//!
//! Conversions are never retried.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, error, info};
use thiserror::Error;

use crate::config::ConverterConfig;

/// Lines of tool output kept in [`ConversionError::ToolFailed`].
const LOG_TAIL_LINES: usize = 20;

/// File stem used for intermediate files in the work directory.
const JOB_NAME: &str = "plotcanvas";

/// Errors raised while converting a document into an artifact.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("External tool '{tool}' was not found")]
    ToolNotFound { tool: String },

    #[error("External tool '{tool}' failed (exit status {status:?})\n{log}")]
    ToolFailed {
        tool: String,
        status: Option<i32>,
        log: String,
    },

    #[error("Expected artifact was not produced: {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Converts document text into an artifact written to `output_path`.
pub trait DocumentConverter {
    /// Writes the artifact for `document` to `output_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] on malformed markup, a missing external
    /// toolchain, or I/O failure.
    fn convert(&self, document: &str, output_path: &Path) -> Result<(), ConversionError>;
}

/// Artifact formats recognized from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tex,
    Pdf,
    Png,
}

impl OutputFormat {
    /// Determines the format from the extension of `path` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedFormat`] for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConversionError> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "tex" => Ok(Self::Tex),
            "pdf" => Ok(Self::Pdf),
            "png" => Ok(Self::Png),
            _ => Err(ConversionError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Returns the converter that produces `output_path`'s format.
///
/// # Errors
///
/// Returns [`ConversionError::UnsupportedFormat`] if the extension is not recognized.
pub fn converter_for_path(
    output_path: &Path,
    config: &ConverterConfig,
) -> Result<Box<dyn DocumentConverter>, ConversionError> {
    match OutputFormat::from_path(output_path)? {
        OutputFormat::Tex => Ok(Box::new(TexWriter)),
        OutputFormat::Pdf | OutputFormat::Png => Ok(Box::new(LatexConverter::new(config.clone()))),
    }
}

/// Writes the document text as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexWriter;

impl DocumentConverter for TexWriter {
    fn convert(&self, document: &str, output_path: &Path) -> Result<(), ConversionError> {
        info!(output_path = output_path.display().to_string(); "Writing TeX document");
        fs::write(output_path, document)?;
        Ok(())
    }
}

/// Compiles documents with an external LaTeX engine.
///
/// The document is compiled in a temporary directory; only the final
/// artifact is copied to the output path.
#[derive(Debug, Clone, Default)]
pub struct LatexConverter {
    config: ConverterConfig,
}

impl LatexConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    fn compile_pdf(&self, document: &str, work_dir: &Path) -> Result<PathBuf, ConversionError> {
        let tex_path = work_dir.join(format!("{JOB_NAME}.tex"));
        fs::write(&tex_path, document)?;

        let mut command = Command::new(self.config.latex_command());
        command
            .current_dir(work_dir)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(&tex_path);
        run_tool(self.config.latex_command(), &mut command)?;

        let pdf_path = work_dir.join(format!("{JOB_NAME}.pdf"));
        if !pdf_path.exists() {
            return Err(ConversionError::MissingArtifact(pdf_path));
        }
        Ok(pdf_path)
    }

    fn rasterize(&self, pdf_path: &Path, work_dir: &Path) -> Result<PathBuf, ConversionError> {
        let png_stem = work_dir.join(JOB_NAME);

        let mut command = Command::new(self.config.raster_command());
        command
            .current_dir(work_dir)
            .arg("-png")
            .arg("-singlefile")
            .arg("-r")
            .arg(self.config.raster_resolution().to_string())
            .arg(pdf_path)
            .arg(&png_stem);
        run_tool(self.config.raster_command(), &mut command)?;

        let png_path = png_stem.with_extension("png");
        if !png_path.exists() {
            return Err(ConversionError::MissingArtifact(png_path));
        }
        Ok(png_path)
    }
}

impl DocumentConverter for LatexConverter {
    fn convert(&self, document: &str, output_path: &Path) -> Result<(), ConversionError> {
        let format = OutputFormat::from_path(output_path)?;
        if format == OutputFormat::Tex {
            return Err(ConversionError::UnsupportedFormat(
                output_path.display().to_string(),
            ));
        }

        let work_dir = tempfile::tempdir()?;
        debug!(work_dir = work_dir.path().display().to_string(); "Compiling document");

        let pdf_path = self.compile_pdf(document, work_dir.path())?;
        let artifact = match format {
            OutputFormat::Png => self.rasterize(&pdf_path, work_dir.path())?,
            _ => pdf_path,
        };

        fs::copy(&artifact, output_path)?;
        info!(output_path = output_path.display().to_string(), format:?; "Artifact written");
        Ok(())
    }
}

fn run_tool(tool: &str, command: &mut Command) -> Result<(), ConversionError> {
    debug!(tool, command:? = command; "Running external tool");

    let output = command.output().map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ConversionError::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            ConversionError::Io(err)
        }
    })?;

    if output.status.success() {
        return Ok(());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let log = log_tail(&format!("{stdout}{stderr}"), LOG_TAIL_LINES);
    error!(tool, status:? = output.status.code(); "External tool failed");

    Err(ConversionError::ToolFailed {
        tool: tool.to_string(),
        status: output.status.code(),
        log,
    })
}

/// Returns the last `lines` lines of `text`.
fn log_tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
