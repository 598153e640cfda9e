//! Charset conversion module
//!
//! Converts SSIDs from a legacy code page to UTF-8 for display.
//!
//! - `traits`: the `Transcoder` seam the cache manager depends on
//! - `gbk`: encoding_rs backed GBK converter

pub mod gbk;
pub mod traits;

pub use gbk::{GbkConverter, DEFAULT_CHARSET, DEFAULT_MAX_OUTPUT_LEN};
pub use traits::Transcoder;

use crate::config::ConverterConfig;

/// Create the transcoder described by the configuration
pub fn create_transcoder(config: &ConverterConfig) -> Box<dyn Transcoder> {
    Box::new(GbkConverter::new(config.charset.clone(), config.max_output_len))
}
