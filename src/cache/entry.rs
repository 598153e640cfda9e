//! SSID history entry

use crate::utils::hex::to_hex;
use serde::Serialize;

/// A remembered conversion: the SSID as received and its UTF-8 rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub original: Vec<u8>,
    pub converted: Vec<u8>,
}

impl CacheEntry {
    pub fn new(original: Vec<u8>, converted: Vec<u8>) -> Self {
        Self { original, converted }
    }

    /// Hex/text view used for JSON output
    pub fn report(&self) -> EntryReport {
        EntryReport {
            original: to_hex(&self.original),
            converted: to_hex(&self.converted),
            display: String::from_utf8_lossy(&self.converted).into_owned(),
        }
    }
}

/// Serializable view of a `CacheEntry`
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub original: String,
    pub converted: String,
    pub display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let entry = CacheEntry::new(vec![0xD6, 0xD0], "中".as_bytes().to_vec());
        let report = entry.report();
        assert_eq!(report.original, "d6d0");
        assert_eq!(report.converted, "e4b8ad");
        assert_eq!(report.display, "中");
    }
}
