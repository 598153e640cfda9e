//! Trait definitions for the convert module
//!
//! The charset conversion primitive is a supplied capability. The cache
//! manager only depends on this trait, so tests and embedders can plug in
//! their own transcoder.

use crate::error::ConversionError;

/// Common trait for charset-to-UTF-8 transcoders
pub trait Transcoder: Send + Sync {
    /// Code page label this transcoder reads from
    fn charset(&self) -> &str;

    /// Transcode `ssid` into UTF-8 bytes
    fn to_utf8(&self, ssid: &[u8]) -> Result<Vec<u8>, ConversionError>;
}
