//! SSID manager - classification, conversion and the history cache
//!
//! The manager is the entry point callers use. It owns the transcoder and the
//! history cache; the cache only exists between `init` and `deinit`.

use super::entry::CacheEntry;
use super::store::SsidCache;
use crate::classify::is_gbk_ssid;
use crate::config::AppConfig;
use crate::convert::{create_transcoder, GbkConverter, Transcoder};
use crate::error::{CacheError, Result, SsidError};
use crate::utils::hex::dump_ssid;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Manager for SSID conversion and the bidirectional history
///
/// # Thread Safety
///
/// SsidManager is thread-safe and can be shared across threads using Arc.
/// Initialization state and entries sit behind one lock, so concurrent `init`
/// calls are safe. Transcoding runs outside the lock; only cache access is
/// serialized.
pub struct SsidManager {
    transcoder: Box<dyn Transcoder>,
    /// `None` outside an init/deinit bracket
    cache: RwLock<Option<SsidCache>>,
    debug_history: bool,
}

impl SsidManager {
    /// Create a manager with configuration
    pub fn new(config: &AppConfig) -> Self {
        let mut manager = Self::with_transcoder(create_transcoder(&config.converter));
        manager.debug_history = config.global.debug_history;
        manager
    }

    /// Create a manager around a supplied transcoder
    pub fn with_transcoder(transcoder: Box<dyn Transcoder>) -> Self {
        Self {
            transcoder,
            cache: RwLock::new(None),
            debug_history: false,
        }
    }

    fn read_cache(&self) -> Result<RwLockReadGuard<'_, Option<SsidCache>>> {
        self.cache
            .read()
            .map_err(|e| SsidError::lock(format!("Failed to acquire cache read lock: {}", e)))
    }

    fn write_cache(&self) -> Result<RwLockWriteGuard<'_, Option<SsidCache>>> {
        self.cache
            .write()
            .map_err(|e| SsidError::lock(format!("Failed to acquire cache write lock: {}", e)))
    }

    /// Start a session; a no-op when already initialized
    pub fn init(&self) -> Result<()> {
        let mut cache = self.write_cache()?;
        if cache.is_none() {
            *cache = Some(SsidCache::new());
            log::info!("SSID history initialized (charset: {})", self.transcoder.charset());
        }
        Ok(())
    }

    /// End the session and discard every entry
    pub fn deinit(&self) -> Result<()> {
        let mut cache = self.write_cache()?;
        if let Some(old) = cache.take() {
            log::info!("SSID history released ({} entries)", old.len());
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.read_cache().map(|c| c.is_some()).unwrap_or(false)
    }

    /// Check whether an SSID should be treated as GBK
    pub fn classify(&self, ssid: &[u8]) -> bool {
        is_gbk_ssid(ssid)
    }

    /// Convert an SSID to UTF-8 and remember the pair
    pub fn convert(&self, ssid: &[u8]) -> Result<Vec<u8>> {
        let converted = self.transcoder.to_utf8(ssid)?;
        self.record(ssid, &converted)?;

        if self.debug_history {
            self.dump_history();
        }

        Ok(converted)
    }

    /// Remember a pair the caller already has; duplicates of `original` are ignored
    pub fn record(&self, original: &[u8], converted: &[u8]) -> Result<()> {
        let mut guard = self.write_cache()?;
        let cache = guard.as_mut().ok_or(CacheError::NotInitialized)?;

        if !cache.insert_if_absent(original, converted) {
            log::debug!("SSID already in history, keeping first conversion");
        }
        Ok(())
    }

    /// Map either form of a remembered SSID to the other
    pub fn lookup(&self, query: &[u8]) -> Result<Vec<u8>> {
        let guard = self.read_cache()?;
        let cache = guard.as_ref().ok_or_else(|| {
            log::info!("SSID lookup failed: history is not initialized");
            CacheError::NotInitialized
        })?;

        cache
            .lookup(query)
            .map(|found| found.to_vec())
            .ok_or_else(|| CacheError::NotFound.into())
    }

    /// Bytes to show for a scanned SSID, falling back to the raw bytes
    pub fn display_ssid(&self, raw: &[u8]) -> Vec<u8> {
        if !self.classify(raw) {
            return raw.to_vec();
        }

        match self.convert(raw) {
            Ok(converted) => converted,
            Err(e) => {
                log::warn!("Using raw SSID bytes for display: {}", e);
                raw.to_vec()
            }
        }
    }

    /// Bytes to hand to the driver for a user-chosen SSID, falling back to the input
    pub fn driver_ssid(&self, chosen: &[u8]) -> Vec<u8> {
        match self.lookup(chosen) {
            Ok(original) if !self.classify(chosen) => original,
            Ok(_) => chosen.to_vec(),
            Err(e) => {
                if !e.is_not_found() {
                    log::warn!("Using SSID bytes as given: {}", e);
                }
                chosen.to_vec()
            }
        }
    }

    /// Snapshot of the current history in insertion order
    pub fn history(&self) -> Result<Vec<CacheEntry>> {
        let guard = self.read_cache()?;
        let cache = guard.as_ref().ok_or(CacheError::NotInitialized)?;
        Ok(cache.entries().to_vec())
    }

    /// Number of remembered SSIDs, zero outside a session
    pub fn len(&self) -> usize {
        self.read_cache()
            .map(|c| c.as_ref().map(SsidCache::len).unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Log every entry in the history
    pub fn dump_history(&self) {
        let Ok(guard) = self.read_cache() else {
            return;
        };
        let Some(cache) = guard.as_ref() else {
            return;
        };

        log::info!("*****");
        for entry in cache.entries() {
            dump_ssid("dumpHistory ssid", &entry.original);
            dump_ssid("dumpHistory utf_ssid", &entry.converted);
        }
    }
}

impl Default for SsidManager {
    fn default() -> Self {
        Self::with_transcoder(Box::new(GbkConverter::default()))
    }
}
