use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ConnectionId, SchemaSnapshot};

/// Source of schema snapshots, implemented by whatever transport talks to
/// the actual database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// `database: None` asks for every database visible to the connection.
    async fn fetch_schema(
        &self,
        connection_id: &ConnectionId,
        database: Option<String>,
    ) -> Result<SchemaSnapshot, SchemaError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Unknown connection: {0}")]
    UnknownConnection(String),
    #[error("Unknown database: {0}")]
    UnknownDatabase(String),
    #[error("Malformed schema data: {0}")]
    Malformed(String),
    #[error("Schema fetch timed out after {0}s")]
    Timeout(u64),
    #[error("IO error: {0}")]
    Io(String),
}
