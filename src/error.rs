//! Error types for ssid-gbk
//!
//! This module defines custom error types using thiserror for better error handling.

use thiserror::Error;

/// Errors raised while transcoding an SSID to UTF-8
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The charset capability could not be acquired for the code page
    #[error("Charset converter unavailable for code page: {0}")]
    Unavailable(String),

    /// The bytes were rejected during transcoding
    #[error("Invalid input for code page {charset}: {len} bytes rejected")]
    InvalidInput { charset: String, len: usize },
}

/// Errors raised by the SSID history cache
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Operation attempted outside an init/deinit bracket
    #[error("SSID cache is not initialized")]
    NotInitialized,

    /// Lookup had no match
    #[error("SSID not found in history")]
    NotFound,
}

/// Main error type for ssid-gbk
#[derive(Error, Debug)]
pub enum SsidError {
    /// Charset conversion error
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// History cache error
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A lock guarding shared state was poisoned
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    /// Input could not be parsed into SSID bytes
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for ssid-gbk
pub type Result<T> = std::result::Result<T, SsidError>;

impl SsidError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SsidError::ParseError(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SsidError::ConfigError(msg.into())
    }

    /// Create a lock error
    pub fn lock<S: Into<String>>(msg: S) -> Self {
        SsidError::LockPoisoned(msg.into())
    }

    /// Whether this is a lookup miss rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, SsidError::Cache(CacheError::NotFound))
    }

    /// Whether the cache was used outside an init/deinit bracket
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, SsidError::Cache(CacheError::NotInitialized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_errors_are_distinct() {
        let missing: SsidError = CacheError::NotFound.into();
        let uninit: SsidError = CacheError::NotInitialized.into();

        assert!(missing.is_not_found());
        assert!(!missing.is_not_initialized());
        assert!(uninit.is_not_initialized());
        assert!(!uninit.is_not_found());
    }

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::InvalidInput {
            charset: "gbk".to_string(),
            len: 3,
        };
        assert_eq!(err.to_string(), "Invalid input for code page gbk: 3 bytes rejected");

        let wrapped: SsidError = ConversionError::Unavailable("x-none".to_string()).into();
        assert!(wrapped.to_string().contains("x-none"));
    }
}
