//! Shared domain layer for the G-Sec auction tools.
//!
//! Holds the auction record model, descriptive statistics helpers, number
//! formatting, error types and CLI settings used by both binaries.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod stats;
