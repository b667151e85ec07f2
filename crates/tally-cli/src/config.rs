//! Optional `tally.toml` configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tally_core::Result;

pub const DEFAULT_DURATION_MS: f64 = 200.0;
pub const DEFAULT_FPS: f64 = 60.0;

/// Root of `tally.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// Display defaults, overridable per invocation by CLI flags.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Sweep duration in milliseconds
    pub duration_ms: f64,
    /// Locale tag for digit grouping (e.g. "en-IN")
    pub locale: Option<String>,
    /// Terminal redraw rate
    pub fps: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            locale: None,
            fps: DEFAULT_FPS,
        }
    }
}

impl DisplayConfig {
    /// Merge CLI flags over the configured values. Flags win.
    pub fn merged(self, duration_ms: Option<f64>, locale: Option<String>, fps: Option<f64>) -> Self {
        Self {
            duration_ms: duration_ms.unwrap_or(self.duration_ms),
            locale: locale.or(self.locale),
            fps: fps.unwrap_or(self.fps),
        }
    }
}

/// Load `path` if given, else `tally.toml` in the working directory if it
/// exists, else built-in defaults.
pub fn load(path: Option<&str>) -> Result<Config> {
    let path: PathBuf = match path {
        Some(p) => Path::new(p).to_path_buf(),
        None => {
            let default = Path::new("tally.toml");
            if !default.exists() {
                return Ok(Config::default());
            }
            default.to_path_buf()
        }
    };
    let text = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_section_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(config.display.fps, DEFAULT_FPS);
        assert!(config.display.locale.is_none());
    }

    #[test]
    fn parses_display_section() {
        let config: Config = toml::from_str(
            r#"
            [display]
            duration_ms = 500.0
            locale = "en-IN"
            fps = 30.0
            "#,
        )
        .unwrap();
        assert_eq!(config.display.duration_ms, 500.0);
        assert_eq!(config.display.locale.as_deref(), Some("en-IN"));
        assert_eq!(config.display.fps, 30.0);
    }

    #[test]
    fn flags_win_over_config() {
        let display = DisplayConfig {
            duration_ms: 500.0,
            locale: Some("en-IN".to_string()),
            fps: 30.0,
        };
        let merged = display.merged(Some(100.0), None, None);
        assert_eq!(merged.duration_ms, 100.0);
        assert_eq!(merged.locale.as_deref(), Some("en-IN"));
        assert_eq!(merged.fps, 30.0);
    }

    #[test]
    fn malformed_config_errors() {
        assert!(toml::from_str::<Config>("[display]\nduration_ms = \"fast\"").is_err());
    }
}
