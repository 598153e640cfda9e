//! Path utilities for configuration files
//!
//! Handles XDG directory specifications and path resolution.

use crate::error::{Result, SsidError};
use std::env;
use std::path::{Path, PathBuf};

/// Get the ssid-gbk configuration directory
///
/// Priority:
/// 1. SSID_GBK_CONFIG_HOME environment variable
/// 2. SSID_GBK_HOME environment variable
/// 3. XDG_CONFIG_HOME/ssid-gbk
/// 4. ~/.config/ssid-gbk (fallback)
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("SSID_GBK_CONFIG_HOME") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(path) = env::var("SSID_GBK_HOME") {
        return Ok(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("ssid-gbk"));
    }

    Err(SsidError::config("Unable to determine config directory"))
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Ensure directory exists, create if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| SsidError::config(format!("Failed to create directory {:?}: {}", path, e)))?;
    }
    Ok(())
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = config_file() {
            assert!(path.ends_with("config.yaml"));
        }
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test");
        if dirs::home_dir().is_some() {
            assert!(!path.to_string_lossy().starts_with('~'));
        }
        assert_eq!(expand_tilde("/etc/ssid"), PathBuf::from("/etc/ssid"));
    }
}
