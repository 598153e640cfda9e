//! Entity parsing and processing module
//!
//! This module extracts escaped SSIDs from scan output and annotates GBK ones
//! with their UTF-8 rendering.

pub mod formatter;
pub mod parser;
pub mod types;

pub use types::*;
