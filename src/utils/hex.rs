//! Hex rendering and parsing for SSID bytes
//!
//! SSIDs are opaque bytes, so diagnostics show them as hex rather than text.

use crate::error::{Result, SsidError};
use std::fmt::Write as FmtWrite;

/// Only the first 32 bytes (the 802.11 SSID limit) are rendered in dumps
pub const MAX_DUMP_BYTES: usize = 32;

/// Render up to the first 32 bytes as `" xx"` groups
pub fn format_ssid(ssid: &[u8]) -> String {
    let mut out = String::with_capacity(MAX_DUMP_BYTES * 3);
    for byte in ssid.iter().take(MAX_DUMP_BYTES) {
        let _ = write!(out, " {:02x}", byte);
    }
    out
}

/// Render the diagnostic line `{tag}[len=N]  xx xx ...`
pub fn dump_line(tag: &str, ssid: &[u8]) -> String {
    format!("{}[len={}] {}", tag, ssid.len(), format_ssid(ssid))
}

/// Log an SSID through `dump_line`
pub fn dump_ssid(tag: &str, ssid: &[u8]) {
    log::info!("{}", dump_line(tag, ssid));
}

/// Render all bytes as contiguous lowercase hex
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Parse hex such as `d6d0b9fa`, `0xd6d0b9fa`, `d6 d0 b9 fa` or `d6:d0:b9:fa`
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: Vec<u8> = trimmed
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(SsidError::parse(format!("Odd number of hex digits: {}", input)));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let high = hex_value(pair[0]);
            let low = hex_value(pair[1]);
            match (high, low) {
                (Some(h), Some(l)) => Ok((h << 4) | l),
                _ => Err(SsidError::parse(format!("Invalid hex digits in: {}", input))),
            }
        })
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ssid() {
        assert_eq!(format_ssid(&[0xD6, 0xD0, 0x0A]), " d6 d0 0a");
        assert_eq!(format_ssid(&[]), "");
    }

    #[test]
    fn test_format_ssid_is_bounded() {
        let long = vec![0xAB; 40];
        let rendered = format_ssid(&long);
        assert_eq!(rendered.len(), MAX_DUMP_BYTES * 3);
    }

    #[test]
    fn test_dump_line() {
        assert_eq!(dump_line("addToHistory: GBK ", &[0xD6, 0xD0]), "addToHistory: GBK [len=2]  d6 d0");
        assert_eq!(dump_line("empty", &[]), "empty[len=0] ");

        let long = vec![0x41; 40];
        assert!(dump_line("t", &long).starts_with("t[len=40]  41"));
    }

    #[test]
    fn test_parse_hex_forms() {
        let expected = vec![0xD6, 0xD0, 0xB9, 0xFA];
        assert_eq!(parse_hex("d6d0b9fa").unwrap(), expected);
        assert_eq!(parse_hex("0xD6D0B9FA").unwrap(), expected);
        assert_eq!(parse_hex("d6 d0 b9 fa").unwrap(), expected);
        assert_eq!(parse_hex("d6:d0:b9:fa").unwrap(), expected);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(parse_hex("d6d").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0xE4, 0x00, 0x0f]), "e4000f");
    }
}
