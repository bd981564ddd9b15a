use std::collections::HashSet;
use std::time::Instant;

use super::keywords::DEFAULT_KEYWORDS;
use super::table::TableMeta;

/// Immutable schema metadata for one (connection, database) pair.
///
/// Never mutated after construction; the cache swaps whole snapshots.
#[derive(Debug, Clone)]
pub struct SchemaSnapshot {
    databases: Vec<String>,
    tables: Vec<TableMeta>,
    keywords: Vec<String>,
    fetched_at: Instant,
}

impl SchemaSnapshot {
    /// Databases and keywords are sets: duplicates are dropped, first
    /// occurrence keeps its position.
    pub fn new(databases: Vec<String>, tables: Vec<TableMeta>, keywords: Vec<String>) -> Self {
        Self {
            databases: dedup_preserving_order(databases),
            tables,
            keywords: dedup_preserving_order(keywords),
            fetched_at: Instant::now(),
        }
    }

    pub fn with_default_keywords(databases: Vec<String>, tables: Vec<TableMeta>) -> Self {
        Self::new(databases, tables, default_keywords())
    }

    /// Sentinel served when nothing is loaded. Keeps the keyword list so
    /// keyword completion works without schema.
    pub fn empty() -> Self {
        Self::with_default_keywords(Vec::new(), Vec::new())
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }

    pub fn tables(&self) -> &[TableMeta] {
        &self.tables
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn fetched_at(&self) -> Instant {
        self.fetched_at
    }

    /// True when the snapshot carries no schema-derived data.
    pub fn is_empty(&self) -> bool {
        self.databases.is_empty() && self.tables.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn find_table(&self, name: &str) -> Option<&TableMeta> {
        self.tables.iter().find(|t| t.matches_name(name))
    }
}

impl Default for SchemaSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|kw| (*kw).to_string()).collect()
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
