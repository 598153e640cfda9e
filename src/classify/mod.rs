//! SSID encoding classification
//!
//! Two byte-pattern classifiers and the decision that combines them. Only the
//! UTF-8 versus GBK distinction is made; UTF-8 wins when a byte string
//! satisfies both grammars.

pub mod gbk;
pub mod utf8;

pub use gbk::is_gbk;
pub use utf8::is_utf8;

/// Check whether an SSID should be treated as GBK
///
/// True only when the bytes are not UTF-8 and do match the GBK pattern.
pub fn is_gbk_ssid(ssid: &[u8]) -> bool {
    !is_utf8(ssid) && is_gbk(ssid)
}
