//! Connection management for MongoDB
//!
//! This module provides connection management functionality including:
//! - Connection establishment with ping verification
//! - Database handle access
//! - Connection state tracking
//! - Guaranteed release via `disconnect`

use mongodb::bson::doc;
use mongodb::{Client, Database, options::ClientOptions};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::error::{ConnectionError, Result};

/// MongoDB connection manager
///
/// Owns the single client used for one export run. The connection is
/// acquired before the first remote call and must be released with
/// [`ConnectionManager::disconnect`] on every exit path.
pub struct ConnectionManager {
    /// MongoDB client instance
    client: Option<Client>,

    /// Connection configuration
    config: ConnectionConfig,

    /// Current connection state
    state: Arc<RwLock<ConnectionState>>,

    /// Connection URI
    uri: String,
}

/// Connection state information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected
    Disconnected,

    /// Currently connecting
    Connecting,

    /// Connected and ready
    Connected,

    /// Connection failed
    Failed(String),
}

impl ConnectionManager {
    /// Create a new connection manager
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection URI
    /// * `config` - Connection configuration
    ///
    /// # Returns
    /// * `Self` - New connection manager instance
    pub fn new(uri: String, config: ConnectionConfig) -> Self {
        Self {
            client: None,
            config,
            state: Arc::new(RwLock::new(ConnectionState::Disconnected)),
            uri,
        }
    }

    /// Establish connection to MongoDB
    ///
    /// Parses the URI, applies the configured timeout, creates the client,
    /// and verifies the connection with a ping against the `admin` database.
    ///
    /// # Returns
    /// * `Result<()>` - Success or connection error
    pub async fn connect(&mut self) -> Result<()> {
        self.set_state(ConnectionState::Connecting).await;

        let options = match Self::parse_uri(&self.uri, self.config.timeout).await {
            Ok(options) => options,
            Err(e) => {
                self.set_state(ConnectionState::Failed(e.to_string())).await;
                return Err(e);
            }
        };

        let client = match Client::with_options(options) {
            Ok(client) => client,
            Err(e) => {
                self.set_state(ConnectionState::Failed(e.to_string())).await;
                return Err(ConnectionError::ConnectionFailed(e.to_string()).into());
            }
        };

        // The driver connects lazily; ping to surface failures now, while
        // we are still in the connect step.
        if let Err(e) = Self::ping(&client).await {
            client.shutdown().await;
            self.set_state(ConnectionState::Failed(e.to_string())).await;
            return Err(e);
        }

        info!("Connected to MongoDB");
        self.client = Some(client);
        self.set_state(ConnectionState::Connected).await;

        Ok(())
    }

    /// Disconnect from MongoDB
    ///
    /// Shuts the client down and releases its resources. Safe to call on
    /// every exit path; a manager that never connected is a no-op.
    pub async fn disconnect(&mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            debug!("MongoDB client shut down");
        }
        self.set_state(ConnectionState::Disconnected).await;
    }

    /// Get a database handle
    ///
    /// # Arguments
    /// * `name` - Database name
    ///
    /// # Returns
    /// * `Result<Database>` - Database handle or error
    pub fn database(&self, name: &str) -> Result<Database> {
        let client = self
            .client
            .as_ref()
            .ok_or(ConnectionError::NotConnected)?;

        Ok(client.database(name))
    }

    /// Get current connection state
    ///
    /// # Returns
    /// * `ConnectionState` - Current state
    pub async fn state(&self) -> ConnectionState {
        self.state.read().await.clone()
    }

    /// Check if currently connected
    ///
    /// # Returns
    /// * `bool` - True if connected
    pub async fn is_connected(&self) -> bool {
        matches!(*self.state.read().await, ConnectionState::Connected)
    }

    /// Parse connection URI and create client options
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection URI
    /// * `timeout_secs` - Connect and server-selection timeout in seconds
    ///
    /// # Returns
    /// * `Result<ClientOptions>` - Parsed client options or error
    async fn parse_uri(uri: &str, timeout_secs: u64) -> Result<ClientOptions> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| ConnectionError::InvalidUri(e.to_string()))?;

        let timeout = Duration::from_secs(timeout_secs);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some(format!("cardex/{}", env!("CARGO_PKG_VERSION")));

        Ok(options)
    }

    /// Update connection state
    ///
    /// # Arguments
    /// * `new_state` - New connection state
    async fn set_state(&self, new_state: ConnectionState) {
        *self.state.write().await = new_state;
    }

    /// Verify a client is alive by sending a ping
    ///
    /// # Arguments
    /// * `client` - Client to verify
    ///
    /// # Returns
    /// * `Result<()>` - Success or ping error
    async fn ping(client: &Client) -> Result<()> {
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ConnectionError::PingFailed(crate::error::mongo::concise_message(&e)))?;

        debug!("Ping succeeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Connect/ping paths require a live MongoDB deployment; these tests
    // cover the state machinery around them.

    #[tokio::test]
    async fn test_initial_state_is_disconnected() {
        let manager =
            ConnectionManager::new("mongodb://localhost:27017".into(), ConnectionConfig::default());
        assert_eq!(manager.state().await, ConnectionState::Disconnected);
        assert!(!manager.is_connected().await);
    }

    #[tokio::test]
    async fn test_database_before_connect_fails() {
        let manager =
            ConnectionManager::new("mongodb://localhost:27017".into(), ConnectionConfig::default());
        let result = manager.database("Empire-Deckbuilder");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_disconnect_without_connect_is_noop() {
        let mut manager =
            ConnectionManager::new("mongodb://localhost:27017".into(), ConnectionConfig::default());
        manager.disconnect().await;
        assert_eq!(manager.state().await, ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn test_parse_uri_applies_timeout() {
        let options = ConnectionManager::parse_uri("mongodb://localhost:27017", 7)
            .await
            .unwrap();
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(7)));
        assert_eq!(
            options.server_selection_timeout,
            Some(Duration::from_secs(7))
        );
    }

    #[tokio::test]
    async fn test_parse_uri_rejects_garbage() {
        let result = ConnectionManager::parse_uri("not-a-uri", 5).await;
        assert!(result.is_err());
    }
}
