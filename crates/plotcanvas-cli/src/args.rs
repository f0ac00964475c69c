//! Command-line argument definitions for the plotcanvas CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the unsupported-drawable policy, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the plotcanvas tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file (TOML)
    #[arg(help = "Path to the input scene file")]
    pub input: String,

    /// Path to the output artifact (.tex, .pdf or .png); overrides the configuration
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail on drawables the renderer does not support instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
