use std::{fmt, io};

use crate::error::mongo::format_mongodb_error;

/// Crate-wide `Result` type using [`CardexError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, CardexError>;

/// Top-level error type for cardex operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum CardexError {
    /// Connection-related errors.
    Connection(ConnectionError),

    /// Export pipeline errors.
    Export(ExportError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// MongoDB driver errors.
    MongoDb(mongodb::error::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Connection-specific errors.
#[derive(Debug)]
pub enum ConnectionError {
    /// Failed to establish a connection.
    ConnectionFailed(String),

    /// Invalid connection URI.
    InvalidUri(String),

    /// Not currently connected to MongoDB.
    NotConnected,

    /// Ping command failed.
    PingFailed(String),
}

/// Export-specific errors.
#[derive(Debug)]
pub enum ExportError {
    /// The match-all query against the collection failed.
    QueryFailed(String),

    /// Counting documents in the collection failed.
    CountFailed(String),

    /// Writing the output file failed.
    WriteFailed(String),

    /// The output path is unusable (missing directory, empty name).
    InvalidOutputPath(String),

    /// Serializing a document to JSON failed.
    SerializeFailed(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for CardexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardexError::Connection(e) => write!(f, "Connection error: {e}"),
            CardexError::Export(e) => write!(f, "Export error: {e}"),
            CardexError::Config(e) => write!(f, "Configuration error: {e}"),
            CardexError::Io(e) => write!(f, "I/O error: {e}"),
            CardexError::MongoDb(e) => format_mongodb_error(f, e),
            CardexError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::ConnectionFailed(msg) => write!(f, "Failed to connect: {msg}"),
            ConnectionError::InvalidUri(uri) => write!(f, "Invalid connection URI: {uri}"),
            ConnectionError::NotConnected => write!(f, "Not connected to MongoDB"),
            ConnectionError::PingFailed(msg) => write!(f, "Ping failed: {msg}"),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            ExportError::CountFailed(msg) => write!(f, "Count failed: {msg}"),
            ExportError::WriteFailed(msg) => write!(f, "Failed to write output: {msg}"),
            ExportError::InvalidOutputPath(msg) => write!(f, "Invalid output path: {msg}"),
            ExportError::SerializeFailed(msg) => write!(f, "Failed to serialize document: {msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for CardexError {}
impl std::error::Error for ConnectionError {}
impl std::error::Error for ExportError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to CardexError ========================= */

impl From<io::Error> for CardexError {
    fn from(err: io::Error) -> Self {
        CardexError::Io(err)
    }
}

impl From<mongodb::error::Error> for CardexError {
    fn from(err: mongodb::error::Error) -> Self {
        CardexError::MongoDb(err)
    }
}

impl From<ConnectionError> for CardexError {
    fn from(err: ConnectionError) -> Self {
        CardexError::Connection(err)
    }
}

impl From<ExportError> for CardexError {
    fn from(err: ExportError) -> Self {
        CardexError::Export(err)
    }
}

impl From<ConfigError> for CardexError {
    fn from(err: ConfigError) -> Self {
        CardexError::Config(err)
    }
}

impl From<String> for CardexError {
    fn from(msg: String) -> Self {
        CardexError::Generic(msg)
    }
}

impl From<&str> for CardexError {
    fn from(msg: &str) -> Self {
        CardexError::Generic(msg.to_owned())
    }
}
