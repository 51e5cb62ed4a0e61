//! Card collection export pipeline
//!
//! The whole program is one linear pipeline with an early exit:
//!
//! 1. Count the documents in the collection; zero is a normal outcome that
//!    reports a notice and writes nothing.
//! 2. Fetch the complete result set for a match-all query.
//! 3. Serialize every document to a JSON-representable value
//!    (identifier as string, date-times as ISO 8601).
//! 4. Write the ordered sequence as one pretty-printed JSON array.
//! 5. Report a structural sample and summary statistics.
//!
//! The database collaborator is abstracted behind [`CardSource`] so the
//! pipeline can run against a test double.

pub mod progress;
pub mod serialize;
pub mod source;
pub mod summary;
pub mod writer;

pub use serialize::serialize_document;
pub use source::{CardSource, MongoCardSource};
pub use summary::ExportSummary;
pub use writer::JsonArrayWriter;

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::formatter::JsonFormatter;
use progress::ProgressTracker;

/// Options controlling one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output file path, overwritten on each run
    pub output_file: PathBuf,

    /// Colorize the on-screen sample document
    pub color_output: bool,

    /// Display a progress bar while converting documents
    pub show_progress: bool,
}

/// Result of an export run
#[derive(Debug)]
pub struct ExportOutcome {
    /// Number of documents exported
    pub documents_exported: u64,

    /// Output file size in bytes (zero when nothing was written)
    pub file_size_bytes: u64,

    /// Time taken for the run
    pub elapsed_ms: u64,

    /// True when the collection was empty and no file was written
    pub skipped_empty: bool,
}

/// Exporter over a card source
///
/// Orchestrates count, fetch, serialization, file output, and reporting
/// for one collection.
pub struct Exporter<S: CardSource> {
    /// Document source (MongoDB in production, a double in tests)
    source: S,

    /// Run options
    options: ExportOptions,
}

impl<S: CardSource> Exporter<S> {
    /// Create a new exporter
    ///
    /// # Arguments
    /// * `source` - Document source to read from
    /// * `options` - Run options
    pub fn new(source: S, options: ExportOptions) -> Self {
        Self { source, options }
    }

    /// Execute the export pipeline
    ///
    /// # Returns
    /// * `Result<ExportOutcome>` - Export statistics or error
    pub async fn run(&self) -> Result<ExportOutcome> {
        let start_time = Instant::now();

        info!("Starting export");
        let count = self.source.count().await?;
        println!("Found {} cards in the collection", count);

        if count == 0 {
            // Empty collection is a normal outcome; no file is written.
            println!("No cards found in the collection!");
            return Ok(ExportOutcome {
                documents_exported: 0,
                file_size_bytes: 0,
                elapsed_ms: start_time.elapsed().as_millis() as u64,
                skipped_empty: true,
            });
        }

        println!("Downloading all cards...");
        let documents = self.source.fetch_all().await?;
        debug!("Fetched {} documents from source", documents.len());

        let tracker = ProgressTracker::new(documents.len() as u64, self.options.show_progress);
        let mut serialized = Vec::with_capacity(documents.len());
        for (index, doc) in documents.iter().enumerate() {
            serialized.push(serialize_document(doc));
            tracker.update((index + 1) as u64);
        }
        tracker.finish();

        let mut writer = JsonArrayWriter::new(&self.options.output_file)?;
        writer.write_all(&serialized).await?;
        let file_size_bytes = writer.file_size().await?;

        println!(
            "Successfully exported {} cards to {}",
            serialized.len(),
            self.options.output_file.display()
        );

        self.print_sample(&serialized)?;

        let summary = ExportSummary::collect(&serialized);
        summary.print();

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Export completed: {} documents, {} bytes, {} ms",
            serialized.len(),
            file_size_bytes,
            elapsed_ms
        );

        Ok(ExportOutcome {
            documents_exported: serialized.len() as u64,
            file_size_bytes,
            elapsed_ms,
            skipped_empty: false,
        })
    }

    /// Print the first document as a structural sample
    ///
    /// The sequence is never empty when this runs (the zero-count branch
    /// returns earlier), but guard anyway.
    fn print_sample(&self, serialized: &[serde_json::Value]) -> Result<()> {
        if let Some(first) = serialized.first() {
            let formatter = JsonFormatter::new(true, self.options.color_output, 2);
            println!();
            println!("Sample card structure:");
            println!("{}", formatter.format_value(first)?);
        }

        Ok(())
    }
}
