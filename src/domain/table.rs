use serde::{Deserialize, Serialize};

use super::column::ColumnMeta;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMeta {
    pub name: String,
    /// Owning database (or schema, depending on the dialect)
    pub database: String,
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    pub fn new(
        name: impl Into<String>,
        database: impl Into<String>,
        columns: Vec<ColumnMeta>,
    ) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
            columns,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.database, self.name)
    }

    /// Bare name when the table lives in `current_database`, qualified otherwise.
    pub fn display_name(&self, current_database: Option<&str>) -> String {
        match current_database {
            Some(current) if current != self.database => self.qualified_name(),
            _ => self.name.clone(),
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
