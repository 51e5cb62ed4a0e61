//! Error handling module for the card exporter.
//!
//! This module provides the crate-wide error type with:
//! - One error kind per failure class (connection, export, configuration)
//! - Concise single-line rendering of MongoDB driver errors
//! - `From` conversions so `?` works against the driver and `std::io`
//!
//! The top-level handler in `main` prints any of these as one
//! `Error: <description>` line; every `Display` impl keeps to one line.

pub mod kinds;
pub mod mongo;

// Re-export commonly used types
pub use kinds::{CardexError, ConfigError, ConnectionError, ExportError, Result};
