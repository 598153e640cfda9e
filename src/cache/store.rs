//! Append-only SSID history store
//!
//! Entries are kept in insertion order and scanned linearly. Storage is
//! direction-free: the lookup direction is derived by classifying the query
//! with the same decision used before conversion.

use super::entry::CacheEntry;
use crate::classify::is_gbk_ssid;
use crate::utils::hex::dump_ssid;

/// Ordered collection of `(original, converted)` pairs, unique by `original`
#[derive(Debug, Default)]
pub struct SsidCache {
    entries: Vec<CacheEntry>,
}

impl SsidCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unless `original` is already present
    ///
    /// Returns `true` when a new entry was stored. The first conversion of a
    /// given original wins; later ones are discarded.
    pub fn insert_if_absent(&mut self, original: &[u8], converted: &[u8]) -> bool {
        if self.entries.iter().any(|e| e.original == original) {
            return false;
        }

        dump_ssid("addToHistory: GBK ", original);
        dump_ssid("addToHistory: UTF ", converted);

        self.entries
            .push(CacheEntry::new(original.to_vec(), converted.to_vec()));
        true
    }

    /// Find the counterpart of `query`
    ///
    /// A GBK query is matched against originals and yields the UTF-8 form;
    /// anything else is matched against converted forms and yields the original.
    pub fn lookup(&self, query: &[u8]) -> Option<&[u8]> {
        if is_gbk_ssid(query) {
            self.entries
                .iter()
                .find(|e| e.original == query)
                .map(|e| e.converted.as_slice())
        } else {
            self.entries
                .iter()
                .find(|e| e.converted == query)
                .map(|e| e.original.as_slice())
        }
    }

    pub fn entries(&self) -> &[CacheEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
