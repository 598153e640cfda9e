//! Utility helpers shared across modules

pub mod hex;
pub mod path;
