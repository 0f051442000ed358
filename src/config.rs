//! Configuration management with layered loading
//!
//! Settings only affect presentation (log level, colours); the pricing
//! tables are fixed.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/retail-calc/retail-calc.toml`
//! 3. Environment variables: `RETAIL_CALC_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// When to colourise terminal output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide (honours NO_COLOR, CLICOLOR, CLICOLOR_FORCE)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Install this mode as the process-wide `colored` override.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("invalid color mode: {other} (expected auto|always|never)")),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(s)
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub log_level: Option<String>,
    pub color: Option<ColorMode>,
}

/// Unified configuration for retail-calc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Log level used without `-v` (default: warn)
    pub log_level: String,
    /// Colour policy for terminal output
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            color: ColorMode::Auto,
        }
    }
}

/// Get the XDG config directory for retail-calc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "retail-calc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("retail-calc.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            log_level: overlay
                .log_level
                .clone()
                .unwrap_or_else(|| self.log_level.clone()),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence, falling back to defaults.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/retail-calc/retail-calc.toml`
    /// 3. Environment variables: `RETAIL_CALC_*` prefix
    ///
    /// Settings only steer presentation, so an invalid layer never blocks a
    /// run: the defaults are returned together with the error to report.
    pub fn load_or_default() -> (Self, Option<ApplicationError>) {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_or_default_from(global.as_deref())
    }

    /// Like [`Settings::load_or_default`] with an explicit config file.
    pub fn load_or_default_from(path: Option<&Path>) -> (Self, Option<ApplicationError>) {
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load settings from an explicit config file instead of the global one.
    ///
    /// A missing `path` is an error; pass `None` for defaults plus env vars.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = path {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply RETAIL_CALC_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder()
            .add_source(Environment::with_prefix("RETAIL_CALC").prefix_separator("_"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("log_level") {
            settings.log_level = val;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_inherit() {
        let base = Settings::default();
        let overlay = RawSettings {
            log_level: Some("debug".into()),
            color: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.log_level, "debug");
        assert_eq!(merged.color, ColorMode::Auto);
    }

    #[test]
    fn given_color_strings_when_parsing_then_case_insensitive() {
        assert_eq!("ALWAYS".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!(" never ".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn given_missing_file_when_load_or_default_then_defaults_and_error() {
        let (settings, err) =
            Settings::load_or_default_from(Some(Path::new("/nonexistent/retail-calc.toml")));

        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(ApplicationError::Config { .. })));
    }

    #[test]
    fn global_config_path_ends_with_file_name() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("retail-calc.toml"));
        }
    }
}
