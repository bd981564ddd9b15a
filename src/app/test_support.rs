//! Fixtures and fake providers shared by unit and integration tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{ColumnMeta, ConnectionId, SchemaSnapshot, TableMeta};
use crate::ports::{SchemaError, SchemaProvider};

/// Builds a snapshot from `(database, table, columns)` triples. Column types
/// are fixed to `int` except `name`-like columns which get `varchar`.
pub fn snapshot_with_tables(
    databases: &[&str],
    tables: &[(&str, &str, &[&str])],
) -> SchemaSnapshot {
    let tables = tables
        .iter()
        .map(|(database, name, columns)| {
            let columns = columns
                .iter()
                .map(|c| ColumnMeta::new(*c, column_type(c)))
                .collect();
            TableMeta::new(*name, *database, columns)
        })
        .collect();
    SchemaSnapshot::with_default_keywords(
        databases.iter().map(|d| (*d).to_string()).collect(),
        tables,
    )
}

fn column_type(column: &str) -> &'static str {
    if column == "name" || column.ends_with("_name") || column == "email" {
        "varchar(255)"
    } else {
        "int"
    }
}

/// Provider whose answers are fixed per requested database, optionally held
/// back until the test calls [`GatedSchemaProvider::release`].
#[derive(Default)]
pub struct GatedSchemaProvider {
    outcomes: HashMap<Option<String>, Result<SchemaSnapshot, SchemaError>>,
    gates: HashMap<Option<String>, Arc<Notify>>,
    leading_failures: Option<(usize, SchemaError)>,
    started: Notify,
    calls: AtomicUsize,
}

impl GatedSchemaProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, database: Option<&str>, snapshot: SchemaSnapshot) -> Self {
        self.outcomes
            .insert(database.map(str::to_string), Ok(snapshot));
        self
    }

    pub fn with_error(mut self, database: Option<&str>, error: SchemaError) -> Self {
        self.outcomes
            .insert(database.map(str::to_string), Err(error));
        self
    }

    /// The first `times` fetches fail with `error` whatever the database.
    pub fn failing_first(mut self, times: usize, error: SchemaError) -> Self {
        self.leading_failures = Some((times, error));
        self
    }

    /// Fetches for `database` block until released.
    pub fn gated(mut self, database: Option<&str>) -> Self {
        self.gates
            .insert(database.map(str::to_string), Arc::new(Notify::new()));
        self
    }

    pub fn release(&self, database: Option<&str>) {
        if let Some(gate) = self.gates.get(&database.map(str::to_string)) {
            gate.notify_one();
        }
    }

    /// Resolves once a fetch has begun (one permit per fetch).
    pub async fn fetch_started(&self) {
        self.started.notified().await;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchemaProvider for GatedSchemaProvider {
    async fn fetch_schema(
        &self,
        _connection_id: &ConnectionId,
        database: Option<String>,
    ) -> Result<SchemaSnapshot, SchemaError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        if let Some(gate) = self.gates.get(&database) {
            gate.notified().await;
        }
        if let Some((times, error)) = &self.leading_failures {
            if call < *times {
                return Err(error.clone());
            }
        }
        self.outcomes.get(&database).cloned().unwrap_or_else(|| {
            Err(SchemaError::UnknownDatabase(
                database.unwrap_or_else(|| "*".to_string()),
            ))
        })
    }
}
