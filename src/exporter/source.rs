//! Database collaborator boundary for the exporter
//!
//! The exporter never talks to the driver directly; it consumes the
//! [`CardSource`] trait, which covers the two operations the pipeline
//! needs: counting the collection and fetching the complete result set.
//! Tests substitute an in-memory implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};
use tracing::{debug, info};

use crate::error::mongo::concise_message;
use crate::error::{ExportError, Result};

/// Trait for the document source the exporter reads from
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Count the documents in the collection
    ///
    /// # Returns
    /// * `Result<u64>` - Exact document count
    async fn count(&self) -> Result<u64>;

    /// Fetch the complete result set for a match-all query
    ///
    /// The returned order is the order the query produced; the exporter
    /// preserves it through serialization and output.
    ///
    /// # Returns
    /// * `Result<Vec<Document>>` - All documents, in query order
    async fn fetch_all(&self) -> Result<Vec<Document>>;
}

/// MongoDB-backed card source over one collection
pub struct MongoCardSource {
    collection: Collection<Document>,
}

impl MongoCardSource {
    /// Create a source over the named collection
    ///
    /// # Arguments
    /// * `database` - Database handle
    /// * `collection_name` - Collection to export
    ///
    /// # Returns
    /// * `Self` - New source
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }
}

#[async_trait]
impl CardSource for MongoCardSource {
    async fn count(&self) -> Result<u64> {
        let count = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(|e| ExportError::CountFailed(concise_message(&e)))?;

        info!("Count result: {}", count);
        Ok(count)
    }

    async fn fetch_all(&self) -> Result<Vec<Document>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| ExportError::QueryFailed(concise_message(&e)))?;

        let mut documents = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| ExportError::QueryFailed(concise_message(&e)))?
        {
            documents.push(doc);
        }

        debug!("Fetched {} documents", documents.len());
        Ok(documents)
    }
}
