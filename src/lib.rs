//! ssid-gbk: GBK/UTF-8 SSID detection, conversion and lookup
//!
//! Wireless scan results carry SSIDs as raw bytes. Legacy access points often
//! broadcast GBK-encoded names, which look garbled when shown as UTF-8. This
//! crate tells GBK SSIDs apart from UTF-8 ones, converts them for display and
//! remembers each conversion so a UTF-8 name picked by a user can be mapped
//! back to the bytes the driver expects.
//!
//! ```
//! use ssid_gbk::SsidManager;
//!
//! let manager = SsidManager::default();
//! manager.init().unwrap();
//!
//! let gbk = [0xD6, 0xD0, 0xB9, 0xFA];
//! let utf8 = manager.convert(&gbk).unwrap();
//! assert_eq!(utf8, "中国".as_bytes());
//! assert_eq!(manager.lookup(&utf8).unwrap(), gbk);
//! ```

pub mod cache;
pub mod classify;
pub mod cli;
pub mod config;
pub mod convert;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod regex;
pub mod utils;

// Re-export common types
pub use cache::{CacheEntry, SsidCache, SsidManager};
pub use classify::{is_gbk, is_gbk_ssid, is_utf8};
pub use config::AppConfig;
pub use convert::{GbkConverter, Transcoder};
pub use error::{CacheError, ConversionError, Result, SsidError};
pub use utils::hex::{dump_ssid, format_ssid};
