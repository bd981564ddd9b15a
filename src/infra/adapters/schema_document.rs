//! JSON layout shared by the file-backed and in-memory providers.
//!
//! ```json
//! { "connections": { "local": {
//!     "databases": [ { "name": "shop", "tables": [
//!         { "name": "users", "columns": [ { "name": "id", "data_type": "int" } ] }
//!     ] } ]
//! } } }
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::app::ports::SchemaError;
use crate::domain::{ColumnMeta, ConnectionId, SchemaSnapshot, TableMeta, default_keywords};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    #[serde(default)]
    pub connections: HashMap<String, ConnectionSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionSchema {
    #[serde(default)]
    pub databases: Vec<DatabaseSchema>,
    /// Dialect keywords; the built-in list is used when absent.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSchema {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSchema {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
}

impl SchemaDocument {
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(content).map_err(|e| SchemaError::Malformed(e.to_string()))
    }

    /// Every database name is listed; tables come from `database` only, or
    /// from all databases when no database is requested.
    pub fn snapshot_for(
        &self,
        connection_id: &ConnectionId,
        database: Option<&str>,
    ) -> Result<SchemaSnapshot, SchemaError> {
        let connection = self
            .connections
            .get(connection_id.as_str())
            .ok_or_else(|| SchemaError::UnknownConnection(connection_id.to_string()))?;

        let selected: Vec<&DatabaseSchema> = match database {
            Some(name) => {
                let db = connection
                    .databases
                    .iter()
                    .find(|db| db.name == name)
                    .ok_or_else(|| SchemaError::UnknownDatabase(name.to_string()))?;
                vec![db]
            }
            None => connection.databases.iter().collect(),
        };

        let tables = selected
            .into_iter()
            .flat_map(|db| {
                db.tables
                    .iter()
                    .map(|t| TableMeta::new(t.name.clone(), db.name.clone(), t.columns.clone()))
            })
            .collect();
        let databases = connection.databases.iter().map(|db| db.name.clone()).collect();
        let keywords = connection.keywords.clone().unwrap_or_else(default_keywords);

        Ok(SchemaSnapshot::new(databases, tables, keywords))
    }
}
