use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::debug;

use super::schema_document::SchemaDocument;
use crate::app::ports::{SchemaError, SchemaProvider};
use crate::domain::{ConnectionId, SchemaSnapshot};

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Reads the schema document from disk on every fetch, so edits to the file
/// show up on the next refresh.
pub struct FileSchemaProvider {
    path: PathBuf,
    timeout_secs: u64,
}

impl FileSchemaProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    async fn read_document(&self) -> Result<SchemaDocument, SchemaError> {
        let content = timeout(
            Duration::from_secs(self.timeout_secs),
            tokio::fs::read_to_string(&self.path),
        )
        .await
        .map_err(|_| SchemaError::Timeout(self.timeout_secs))?
        .map_err(|e| SchemaError::Io(format!("{}: {}", self.path.display(), e)))?;

        SchemaDocument::from_json(&content)
    }
}

#[async_trait]
impl SchemaProvider for FileSchemaProvider {
    async fn fetch_schema(
        &self,
        connection_id: &ConnectionId,
        database: Option<String>,
    ) -> Result<SchemaSnapshot, SchemaError> {
        debug!(
            path = %self.path.display(),
            connection = %connection_id,
            ?database,
            "reading schema file"
        );
        let document = self.read_document().await?;
        document.snapshot_for(connection_id, database.as_deref())
    }
}
