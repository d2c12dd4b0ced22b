//! Grid configuration files
//!
//! A grid configuration can be kept in a `.json` or `.toml` file using the
//! same camelCase field names as the inbound contract.

use std::path::{Path, PathBuf};

use anyhow::Context;
use brgrid_core::{GridConfig, GridError, Result};

use crate::UiModeByControl;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(GridError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse grid configuration text in `format`
pub fn parse_grid_config(text: &str, format: ConfigFormat) -> Result<GridConfig> {
    match format {
        ConfigFormat::Json => GridConfig::from_json_str(text),
        ConfigFormat::Toml => GridConfig::from_toml_str(text),
    }
}

/// Read a grid configuration from a `.json` or `.toml` file
pub fn load_grid_config(path: impl AsRef<Path>) -> Result<GridConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let config = parse_grid_config(&text, format)?;
    tracing::debug!(
        path = %path.display(),
        columns = config.columns.len(),
        rows = config.data.len(),
        "Loaded grid config"
    );
    Ok(config)
}

/// Read a grid configuration, attaching the file path to any error
pub fn load_grid_config_with_context(path: impl AsRef<Path>) -> anyhow::Result<GridConfig> {
    let path = path.as_ref();
    load_grid_config(path)
        .with_context(|| format!("Failed to load grid config from {}", path.display()))
}

/// Read presentation modes from a `.json` or `.toml` file.
///
/// Controls missing from the file keep their default mode.
pub fn load_ui_modes(path: impl AsRef<Path>) -> anyhow::Result<UiModeByControl> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let modes: UiModeByControl = match format {
        ConfigFormat::Json => serde_json::from_str(&text)?,
        ConfigFormat::Toml => toml::from_str(&text)?,
    };
    modes.validate()?;
    Ok(modes)
}

/// Default directory for brgrid configuration files
pub fn config_dir() -> anyhow::Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("brgrid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("grid.json", Some(ConfigFormat::Json))]
    #[case("grid.TOML", Some(ConfigFormat::Toml))]
    #[case("grid.yaml", None)]
    #[case("grid", None)]
    fn test_format_from_path(#[case] path: &str, #[case] expected: Option<ConfigFormat>) {
        assert_eq!(ConfigFormat::from_path(Path::new(path)).ok(), expected);
    }

    #[test]
    fn test_unsupported_format_error() {
        let err = ConfigFormat::from_path(Path::new("grid.yaml")).unwrap_err();
        assert!(matches!(err, GridError::UnsupportedFormat(ref p) if p == "grid.yaml"));
    }
}
