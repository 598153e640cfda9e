//! Core types and error handling
//!
//! This module re-exports commonly used types and traits for the ssid-gbk crate.

pub use crate::cache::{CacheEntry, SsidManager};
pub use crate::classify::is_gbk_ssid;
pub use crate::convert::Transcoder;
pub use crate::error::{CacheError, ConversionError, Result, SsidError};
pub use log::{debug, error, info, warn};
