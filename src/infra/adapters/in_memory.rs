use async_trait::async_trait;

use super::schema_document::SchemaDocument;
use crate::app::ports::{SchemaError, SchemaProvider};
use crate::domain::{ConnectionId, SchemaSnapshot};

/// Serves a document held in memory, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaProvider {
    document: SchemaDocument,
}

impl InMemorySchemaProvider {
    pub fn new(document: SchemaDocument) -> Self {
        Self { document }
    }

    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        SchemaDocument::from_json(content).map(Self::new)
    }
}

#[async_trait]
impl SchemaProvider for InMemorySchemaProvider {
    async fn fetch_schema(
        &self,
        connection_id: &ConnectionId,
        database: Option<String>,
    ) -> Result<SchemaSnapshot, SchemaError> {
        self.document.snapshot_for(connection_id, database.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_document_tables() {
        let provider = InMemorySchemaProvider::from_json(
            r#"{"connections":{"c1":{"databases":[{"name":"shop","tables":[{"name":"users"}]}]}}}"#,
        )
        .unwrap();

        let snapshot = provider
            .fetch_schema(&ConnectionId::from("c1"), None)
            .await
            .unwrap();

        assert_eq!(snapshot.table_count(), 1);
    }

    #[tokio::test]
    async fn empty_provider_knows_no_connections() {
        let provider = InMemorySchemaProvider::default();

        let result = provider
            .fetch_schema(&ConnectionId::from("c1"), None)
            .await;

        assert_eq!(
            result.unwrap_err(),
            SchemaError::UnknownConnection("c1".to_string())
        );
    }
}
