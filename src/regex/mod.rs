//! Regular expressions for matching SSIDs in scan output
//!
//! wpa_supplicant and iw print SSIDs with non-printable bytes escaped as
//! `\xHH`. A GBK SSID therefore shows up as a run of such escapes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escaped SSID token regex
/// Matches a whitespace-free run containing at least one `\xHH` escape
pub static ESCAPED_SSID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[^\s\\]|\\.)*\\x[0-9a-fA-F]{2}(?:[^\s\\]|\\.)*")
        .expect("Failed to compile escaped SSID regex")
});

/// Single `\xHH` escape regex
pub static ESCAPED_BYTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\x[0-9a-fA-F]{2}").expect("Failed to compile escaped byte regex")
});

/// Find the SSID of a tab-separated `scan_results` line
///
/// The SSID is the whole last field, literal spaces included. Returns `None`
/// when the line has no tab or the last field carries no `\xHH` escape.
pub fn find_scan_result_ssid(text: &str) -> Option<(usize, usize, String)> {
    let start = text.rfind('\t')? + 1;
    let field = text[start..].trim_end_matches(['\r', '\n']);

    if !ESCAPED_BYTE_RE.is_match(field) {
        return None;
    }
    Some((start, start + field.len(), field.to_string()))
}

/// Find all escaped SSID tokens in text with their positions
pub fn find_escaped_ssids(text: &str) -> Vec<(usize, usize, String)> {
    ESCAPED_SSID_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
        .collect()
}
