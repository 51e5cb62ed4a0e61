//! JSON array file writer for export output
//!
//! Writes the full sequence of serialized documents as one pretty-printed
//! JSON array, UTF-8 encoded with non-ASCII characters preserved literally,
//! overwriting any previous file at the same path.

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::formatter::JsonFormatter;

/// Writer for a single JSON array output file
pub struct JsonArrayWriter {
    /// Path to the output file
    path: PathBuf,

    /// Number of documents written
    written: usize,

    /// Formatter producing the 2-space-indented array
    formatter: JsonFormatter,
}

impl JsonArrayWriter {
    /// Create a new JSON array writer
    ///
    /// # Arguments
    /// * `path` - Output file path
    ///
    /// # Returns
    /// * `Result<Self>` - New writer instance or error
    pub fn new(path: &Path) -> Result<Self> {
        validate_path(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            written: 0,
            formatter: JsonFormatter::new(true, false, 2),
        })
    }

    /// Write all documents as one JSON array and flush
    ///
    /// # Arguments
    /// * `docs` - Serialized documents in export order
    ///
    /// # Returns
    /// * `Result<usize>` - Number of documents written
    pub async fn write_all(&mut self, docs: &[JsonValue]) -> Result<usize> {
        let json = self.formatter.format_value(&docs)?;

        let mut writer = create_writer(&self.path).await?;
        writer
            .write_all(json.as_bytes())
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        writer
            .flush()
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        self.written = docs.len();
        debug!("Wrote {} documents to {}", self.written, self.path.display());

        Ok(self.written)
    }

    /// Get the output file size in bytes
    ///
    /// # Returns
    /// * `Result<u64>` - File size in bytes
    pub async fn file_size(&self) -> Result<u64> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| ExportError::WriteFailed(format!("Failed to get file metadata: {}", e)))?;
        Ok(metadata.len())
    }
}

/// Helper function to create a buffered file writer
///
/// # Arguments
/// * `path` - File path to create
///
/// # Returns
/// * `Result<BufWriter<File>>` - Buffered writer or error
async fn create_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .await
        .map_err(|e| ExportError::WriteFailed(format!("Failed to create file: {}", e)))?;
    Ok(BufWriter::with_capacity(8 * 1024 * 1024, file)) // 8MB buffer
}

/// Helper function to validate file path and directory
///
/// # Arguments
/// * `path` - File path to validate
///
/// # Returns
/// * `Result<()>` - Success or error
fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::InvalidOutputPath("empty path".to_string()).into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ExportError::InvalidOutputPath(format!(
                "Directory does not exist: {}",
                parent.display()
            ))
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::fs;

    #[tokio::test]
    async fn test_writes_top_level_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let mut writer = JsonArrayWriter::new(&path).unwrap();

        let docs = vec![
            json!({ "_id": "a", "name": "Knight" }),
            json!({ "_id": "b", "name": "Tower" }),
        ];
        let written = writer.write_all(&docs).await.unwrap();
        assert_eq!(written, 2);

        let content = fs::read_to_string(&path).await.unwrap();
        let parsed: JsonValue = serde_json::from_str(&content).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_two_space_indentation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indent.json");
        let mut writer = JsonArrayWriter::new(&path).unwrap();

        writer.write_all(&[json!({ "a": 1 })]).await.unwrap();

        let content = fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("\n    \"a\": 1"));
    }

    #[tokio::test]
    async fn test_non_ascii_written_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unicode.json");
        let mut writer = JsonArrayWriter::new(&path).unwrap();

        writer
            .write_all(&[json!({ "name": "Épée ⚔" })])
            .await
            .unwrap();

        let content = fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("Épée ⚔"));
        assert!(!content.contains("\\u"));
    }

    #[tokio::test]
    async fn test_repeated_runs_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stable.json");
        let docs = vec![json!({ "cardId": 5, "type": "unit" })];

        let mut writer = JsonArrayWriter::new(&path).unwrap();
        writer.write_all(&docs).await.unwrap();
        let first = fs::read(&path).await.unwrap();

        let mut writer = JsonArrayWriter::new(&path).unwrap();
        writer.write_all(&docs).await.unwrap();
        let second = fs::read(&path).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overwrite.json");

        let mut writer = JsonArrayWriter::new(&path).unwrap();
        writer
            .write_all(&[json!({ "a": 1 }), json!({ "b": 2 })])
            .await
            .unwrap();

        let mut writer = JsonArrayWriter::new(&path).unwrap();
        writer.write_all(&[json!({ "c": 3 })]).await.unwrap();

        let content = fs::read_to_string(&path).await.unwrap();
        let parsed: JsonValue = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("size.json");
        let mut writer = JsonArrayWriter::new(&path).unwrap();

        writer.write_all(&[json!({ "test": "data" })]).await.unwrap();
        let size = writer.file_size().await.unwrap();
        assert!(size > 0);
    }

    #[test]
    fn test_invalid_directory_rejected() {
        let result = JsonArrayWriter::new(Path::new("/nonexistent/directory/file.json"));
        assert!(result.is_err());
    }
}
