use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    /// Artifact location, resolved relative to the working directory
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
    /// Keep loaded artifacts in memory instead of reloading on every call
    #[serde(default)]
    pub cache: bool,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            cache: false,
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_model_path() -> PathBuf { PathBuf::from("bmi_classifier.json") }
fn default_cache_capacity() -> u64 { 16 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// stdout carries the JSON result, keep stderr quiet unless asked
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local override file (config/local.toml)
    /// 4. Environment variables (prefixed with BMI_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BMI__MODEL__PATH -> model.path
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("BMI")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_model_settings() {
        let model = ModelSettings::default();
        assert_eq!(model.path, PathBuf::from("bmi_classifier.json"));
        assert!(!model.cache);
        assert_eq!(model.cache_capacity, 16);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config");
        writeln!(file, "[model]\npath = \"models/custom.json\"\ncache = true\n\n[logging]\nlevel = \"debug\"")
            .expect("write config");

        let settings = Settings::load_from(file.path()).expect("load settings");
        assert_eq!(settings.model.path, PathBuf::from("models/custom.json"));
        assert!(settings.model.cache);
        assert_eq!(settings.model.cache_capacity, 16);
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "compact");
    }
}
