//! SSID history cache
//!
//! # Module Organization
//!
//! - `entry`: the remembered `(original, converted)` pair
//! - `store`: append-only store with direction-inferring lookup
//! - `manager`: lifecycle, conversion and locking around the store

pub mod entry;
pub mod manager;
pub mod store;

pub use entry::{CacheEntry, EntryReport};
pub use manager::SsidManager;
pub use store::SsidCache;
