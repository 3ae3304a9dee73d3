//! I/O module
//!
//! Handles the JSON Lines transaction store.
//!
//! # Components
//!
//! - `json_format` - Line codec for stored transactions (pure, no I/O)
//! - `transaction_log` - File-backed store with append and rewrite

pub mod json_format;
pub mod transaction_log;

pub use json_format::{parse_line, to_line};
pub use transaction_log::TransactionLog;
