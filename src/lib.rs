//! Card Collection Exporter Library
//!
//! This library provides the core functionality for cardex, a tool that
//! downloads a MongoDB card collection and writes it to a local JSON file.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `connection`: MongoDB connection management
//! - `error`: Error types and handling
//! - `exporter`: Export pipeline (source, serialization, output, summary)
//! - `formatter`: JSON output formatting
//!
//! # Example
//!
//! ```no_run
//! use cardex::config::Config;
//! use cardex::connection::ConnectionManager;
//! use cardex::exporter::{ExportOptions, Exporter, MongoCardSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let mut manager = ConnectionManager::new(
//!         config.connection.uri.clone(),
//!         config.connection.clone(),
//!     );
//!     manager.connect().await?;
//!
//!     let database = manager.database(&config.export.database)?;
//!     let source = MongoCardSource::new(&database, &config.export.collection);
//!     let exporter = Exporter::new(
//!         source,
//!         ExportOptions {
//!             output_file: config.export.output_file.clone(),
//!             color_output: false,
//!             show_progress: false,
//!         },
//!     );
//!
//!     let outcome = exporter.run().await;
//!     manager.disconnect().await;
//!     outcome?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod connection;
pub mod error;
pub mod exporter;
pub mod formatter;

// Re-export commonly used types
pub use config::Config;
pub use connection::ConnectionManager;
pub use error::{CardexError, Result};
pub use exporter::{ExportOptions, ExportOutcome, Exporter, ExportSummary, MongoCardSource};
pub use formatter::JsonFormatter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
