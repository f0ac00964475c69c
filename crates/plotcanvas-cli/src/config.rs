//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use plotcanvas::{PlotError, config::AppConfig};

/// Project-relative configuration file, checked before the platform directory.
const LOCAL_CONFIG_PATH: &str = "plotcanvas/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for PlotError {
    fn from(err: ConfigError) -> Self {
        PlotError::Config(err.to_string())
    }
}

/// Where a configuration file was picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Given with `--config`; must exist.
    Explicit,
    /// `plotcanvas/config.toml` under the working directory.
    Local,
    /// The per-user config directory of the platform.
    Platform,
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (plotcanvas/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PlotError> {
    let explicit_path: Option<&Path> = explicit_path.as_ref().map(AsRef::as_ref);

    let Some((source, path)) = discover_config(explicit_path) else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(path = path.display().to_string(), source:?; "Loading configuration");
    load_config_file(&path)
}

/// Picks the first configuration candidate in search order.
///
/// Only an explicit path is returned without checking that it exists, so a
/// mistyped `--config` is reported instead of silently falling back.
fn discover_config(explicit_path: Option<&Path>) -> Option<(ConfigSource, PathBuf)> {
    if let Some(path) = explicit_path {
        return Some((ConfigSource::Explicit, path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG_PATH);
    if local.is_file() {
        return Some((ConfigSource::Local, local));
    }

    let Some(dirs) = ProjectDirs::from("org", "plotcanvas", "plotcanvas") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let platform = dirs.config_dir().join("config.toml");
    if platform.is_file() {
        return Some((ConfigSource::Platform, platform));
    }

    debug!(path = platform.display().to_string(); "Platform configuration file not found");
    None
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file is missing, unreadable, or not valid TOML.
fn load_config_file(path: &Path) -> Result<AppConfig, PlotError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ConfigError::MissingFile(path.to_path_buf()).into(),
        _ => PlotError::Io(err),
    })?;

    toml::from_str(&content).map_err(|err| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render]\nprecision = 2\nstrict_unsupported = true\n").unwrap();

        let config = load_config(Some(&path)).expect("valid config");

        assert_eq!(config.render().precision(), 2);
        assert!(config.render().strict_unsupported());
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nope.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, PlotError::Config(msg) if msg.contains("Missing configuration file")));
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render\nprecision = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            PlotError::Config(msg) if msg.contains("Failed to parse TOML") && msg.contains("config.toml")
        ));
    }

    #[test]
    fn test_load_template_section() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render.template]\ntrailer = \"%% end\\n\"\n").unwrap();

        let config = load_config(Some(&path)).expect("valid config");

        assert_eq!(config.render().template().to_template().trailer(), "%% end\n");
    }

    #[test]
    fn test_explicit_path_wins_even_when_missing() {
        let path = Path::new("plotcanvas-no-such-config.toml");

        let (source, found) = discover_config(Some(path)).expect("explicit path is always used");

        assert_eq!(source, ConfigSource::Explicit);
        assert_eq!(found, path);
    }
}
