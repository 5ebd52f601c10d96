//! Configuration file support for the workout tools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/workout-stats/config.toml`.

use crate::{Error, OutputFormat, Package, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,

    /// Input packages; the built-in samples are used when empty
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// Report output configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub skip_invalid: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            skip_invalid: false,
        }
    }
}

fn default_format() -> String {
    "text".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.output_format()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        base.join("workout-stats").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Parsed output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.report.format.parse()
    }

    /// Packages to report: configured ones, or the built-in samples
    pub fn effective_packages(&self) -> Vec<Package> {
        if self.packages.is_empty() {
            crate::sample_packages()
        } else {
            self.packages.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(!config.report.skip_invalid);
        assert_eq!(config.effective_packages(), crate::sample_packages());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[report]
skip_invalid = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.report.skip_invalid);
        assert_eq!(config.report.format, "text"); // default
    }

    #[test]
    fn test_configured_packages_replace_samples() {
        let toml_str = r#"
[report]
format = "json"

[[packages]]
code = "RUN"
args = [15000, 1, 75]

[[packages]]
code = "SWM"
args = [720, 1.5, 80, 25, 40]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);

        let packages = config.effective_packages();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], Package::new("RUN", [15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].args[1], 1.5);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.report.skip_invalid = true;
        config.packages = vec![Package::new("WLK", [9000.0, 1.0, 75.0, 180.0])];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.report.skip_invalid);
        assert_eq!(loaded.packages, config.packages);
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[report]\nformat = \"xml\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");

        assert!(matches!(Config::load_from(&path), Err(Error::Io(_))));
    }
}
