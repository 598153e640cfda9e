//! GBK to UTF-8 transcoding
//!
//! Backed by encoding_rs. Unlike a display-oriented decoder, malformed input is
//! rejected instead of being patched with replacement characters: the result is
//! remembered as the UTF-8 name of the SSID and must map back to it exactly.

use super::traits::Transcoder;
use crate::error::ConversionError;
use crate::utils::hex::format_ssid;
use encoding_rs::Encoding;

/// Default code page for legacy Chinese SSIDs
pub const DEFAULT_CHARSET: &str = "gbk";

/// Default capacity of the converted output, in bytes
pub const DEFAULT_MAX_OUTPUT_LEN: usize = 512;

/// encoding_rs backed converter for a GBK family code page
#[derive(Debug, Clone)]
pub struct GbkConverter {
    charset: String,
    max_output_len: usize,
}

impl GbkConverter {
    pub fn new<S: Into<String>>(charset: S, max_output_len: usize) -> Self {
        Self {
            charset: charset.into(),
            max_output_len,
        }
    }

    fn encoding(&self) -> Result<&'static Encoding, ConversionError> {
        Encoding::for_label(self.charset.as_bytes())
            .ok_or_else(|| ConversionError::Unavailable(self.charset.clone()))
    }
}

impl Default for GbkConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CHARSET, DEFAULT_MAX_OUTPUT_LEN)
    }
}

impl Transcoder for GbkConverter {
    fn charset(&self) -> &str {
        &self.charset
    }

    fn to_utf8(&self, ssid: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let encoding = self.encoding()?;

        let decoded = encoding
            .decode_without_bom_handling_and_without_replacement(ssid)
            .ok_or_else(|| {
                log::debug!("{} rejected bytes:{}", encoding.name(), format_ssid(ssid));
                ConversionError::InvalidInput {
                    charset: self.charset.clone(),
                    len: ssid.len(),
                }
            })?;

        // The output is a C string: anything after an embedded NUL is dropped
        let text = match decoded.find('\0') {
            Some(end) => &decoded[..end],
            None => &decoded[..],
        };

        let full_len = text.len();
        let text = truncate_utf8(text, self.max_output_len);
        if text.len() < full_len {
            log::warn!(
                "Converted SSID truncated from {} to {} bytes",
                full_len,
                text.len()
            );
        }

        log::debug!("{} decoded '{}' from bytes:{}", encoding.name(), text, format_ssid(ssid));

        Ok(text.as_bytes().to_vec())
    }
}

/// Cut `text` to at most `max` bytes without splitting a character
fn truncate_utf8(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbk_to_utf8() {
        // GBK encoding of "中国" (China)
        let gbk_bytes = vec![0xD6, 0xD0, 0xB9, 0xFA];
        let result = GbkConverter::default().to_utf8(&gbk_bytes).unwrap();
        assert_eq!(result, vec![0xE4, 0xB8, 0xAD, 0xE5, 0x9B, 0xBD]);
    }

    #[test]
    fn test_ascii_passes_through() {
        let result = GbkConverter::default().to_utf8(b"AP-").unwrap();
        assert_eq!(result, b"AP-".to_vec());
    }

    #[test]
    fn test_unknown_charset() {
        let converter = GbkConverter::new("x-no-such-charset", 512);
        assert_eq!(
            converter.to_utf8(&[0xD6, 0xD0]),
            Err(ConversionError::Unavailable("x-no-such-charset".to_string()))
        );
    }

    #[test]
    fn test_invalid_input() {
        // lone lead byte at the end
        let err = GbkConverter::default().to_utf8(&[0x41, 0xD6]).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { len: 2, .. }));
    }

    #[test]
    fn test_output_is_bounded() {
        let converter = GbkConverter::new("gbk", 4);
        // "中国" is 6 UTF-8 bytes, only the first character fits
        let result = converter.to_utf8(&[0xD6, 0xD0, 0xB9, 0xFA]).unwrap();
        assert_eq!(result, "中".as_bytes().to_vec());
    }

    #[test]
    fn test_stops_at_nul() {
        let result = GbkConverter::default()
            .to_utf8(&[0xD6, 0xD0, 0x00, 0xB9, 0xFA])
            .unwrap();
        assert_eq!(result, "中".as_bytes().to_vec());
    }

    #[test]
    fn test_truncate_utf8() {
        assert_eq!(truncate_utf8("中国", 6), "中国");
        assert_eq!(truncate_utf8("中国", 5), "中");
        assert_eq!(truncate_utf8("中国", 2), "");
    }
}
