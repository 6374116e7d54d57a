//! Shared domain types for BrainLogger.
//!
//! This crate has no database or HTTP dependencies. The store, the API
//! server and the terminal frontend all depend on it for the entry type
//! enumeration, the validation rules, and the common error type.

pub mod entry;
pub mod error;
pub mod types;
