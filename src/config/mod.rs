//! Configuration module for ssid-gbk
//!
//! Handles loading and managing configuration from YAML files and environment variables.

use crate::convert::{DEFAULT_CHARSET, DEFAULT_MAX_OUTPUT_LEN};
use crate::error::{Result, SsidError};
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Charset converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Code page label of non-UTF-8 SSIDs
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Capacity of the converted output in bytes; longer output is truncated
    #[serde(default = "default_max_output_len")]
    pub max_output_len: usize,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// Output in JSON format
    #[serde(default)]
    pub json: bool,
}

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// Dump the whole SSID history after every conversion
    #[serde(default = "default_debug_history")]
    pub debug_history: bool,

    /// Custom config path
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

// Default value functions
fn default_charset() -> String {
    env::var("SSID_GBK_CHARSET").unwrap_or_else(|_| DEFAULT_CHARSET.to_string())
}

fn default_max_output_len() -> usize {
    env::var("SSID_GBK_MAX_OUTPUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_OUTPUT_LEN)
}

fn default_debug_history() -> bool {
    env_flag("SSID_GBK_DEBUG").unwrap_or(false)
}

fn default_true() -> bool {
    true
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            max_output_len: default_max_output_len(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            json: false,
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            debug_history: default_debug_history(),
            config_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file and environment variables
    pub fn load() -> Result<Self> {
        let config_dir = path::config_dir()?;
        path::ensure_dir(&config_dir)?;

        let config_file = path::config_file()?;
        if !config_file.exists() {
            return Self::create_default(&config_file, Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Write a freshly built config, refusing one the env made invalid
    fn create_default(config_file: &Path, config: Self) -> Result<Self> {
        config.validate()?;
        config.save(config_file)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_file)
            .map_err(|e| SsidError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| SsidError::YamlError(format!("Failed to parse config file: {}", e)))?;

        config.global.config_path = Some(config_file.to_path_buf());

        // Override with environment variables
        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(val) = env::var("SSID_GBK_CHARSET") {
            self.converter.charset = val;
        }
        if let Some(val) = env::var("SSID_GBK_MAX_OUTPUT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.converter.max_output_len = val;
        }
        if let Some(val) = env_flag("SSID_GBK_DEBUG") {
            self.global.debug_history = val;
        }
    }

    /// Reject settings the converter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.converter.charset.trim().is_empty() {
            return Err(SsidError::config("converter.charset must not be empty"));
        }
        if self.converter.max_output_len == 0 {
            return Err(SsidError::config("converter.max_output_len must be greater than 0"));
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| SsidError::YamlError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| SsidError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.output.enable_colors);
        assert!(!config.output.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("converter"));
        assert!(yaml.contains("max_output_len"));
        assert!(yaml.contains("output"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "converter:\n  max_output_len: 64\noutput:\n  json: true").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(config.output.json);
        assert!(config.output.enable_colors);
        assert_eq!(config.global.config_path.as_deref(), Some(file.path()));
        if env::var("SSID_GBK_MAX_OUTPUT").is_err() {
            assert_eq!(config.converter.max_output_len, 64);
        }
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.output.enable_colors = false;
        config.save(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(!loaded.output.enable_colors);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "converter:\n  max_output_len: 0").unwrap();

        if env::var("SSID_GBK_MAX_OUTPUT").is_err() {
            assert!(matches!(
                AppConfig::load_from(file.path()),
                Err(SsidError::ConfigError(_))
            ));
        }
    }

    #[test]
    fn test_create_default_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.converter.max_output_len = 0;

        assert!(matches!(
            AppConfig::create_default(&path, config),
            Err(SsidError::ConfigError(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_create_default_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.converter.charset = "gbk".to_string();
        config.converter.max_output_len = 128;

        let created = AppConfig::create_default(&path, config).unwrap();
        assert_eq!(created.converter.max_output_len, 128);
        assert!(path.exists());
    }

    #[test]
    fn test_broken_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "converter: [unterminated").unwrap();

        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(SsidError::YamlError(_))
        ));
    }
}
