//! Entry point for editor surfaces.
//!
//! `complete` is synchronous and works from whatever snapshot the cache holds
//! right now. Refreshes only ever happen in the background.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::assembler::{DEFAULT_QUALIFY_THRESHOLD, SuggestionAssembler};
use crate::classifier::{self, Classification, ReplaceRange};
use crate::domain::{ConnectionId, SchemaState};
use crate::ports::{SchemaError, SchemaProvider};
use crate::schema_cache::SchemaCache;
use crate::suggestion::Suggestion;
use crate::table_refs::extract_table_references;

pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Snapshots at least this old trigger a background refresh on the next
    /// completion request. `None` disables age-based refresh.
    pub max_age: Option<Duration>,
    pub qualify_threshold: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_age: Some(DEFAULT_MAX_AGE),
            qualify_threshold: DEFAULT_QUALIFY_THRESHOLD,
        }
    }
}

pub struct CompletionSession {
    cache: Arc<SchemaCache>,
    assembler: SuggestionAssembler,
    max_age: Option<Duration>,
}

impl CompletionSession {
    pub fn new(provider: Arc<dyn SchemaProvider>) -> Self {
        Self::with_options(provider, SessionOptions::default())
    }

    pub fn with_options(provider: Arc<dyn SchemaProvider>, options: SessionOptions) -> Self {
        Self {
            cache: Arc::new(SchemaCache::new(provider)),
            assembler: SuggestionAssembler::with_qualify_threshold(options.qualify_threshold),
            max_age: options.max_age,
        }
    }

    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    pub fn schema_state(&self) -> SchemaState {
        self.cache.state()
    }

    /// Ranked suggestions for the cursor at 1-based (`line`, `column`).
    ///
    /// May start a background refresh but never waits for one.
    pub fn complete(&self, buffer: &str, line: usize, column: usize) -> Vec<Suggestion> {
        self.ensure_fresh();

        let prefix = classifier::line_prefix(buffer, line, column);
        let context = match classifier::classify(&prefix) {
            Classification::NoSuggestion => {
                debug!(line, column, "cursor on comment line, no suggestions");
                return Vec::new();
            }
            Classification::Suggest(context) => context,
        };

        let (snapshot, key) = self.cache.current_with_key();
        let table_refs = if context.column {
            extract_table_references(buffer)
        } else {
            Vec::new()
        };
        let suggestions = self.assembler.assemble(
            &context,
            &snapshot,
            &table_refs,
            key.database.as_deref(),
        );
        debug!(
            line,
            column,
            database_ctx = context.database,
            table_ctx = context.table,
            column_ctx = context.column,
            preceding_keyword = context.preceding_keyword.as_deref().unwrap_or("-"),
            table_refs = table_refs.len(),
            count = suggestions.len(),
            "completion assembled"
        );
        suggestions
    }

    /// Range to replace when a suggestion from `complete` is accepted.
    pub fn replace_range(&self, buffer: &str, line: usize, column: usize) -> ReplaceRange {
        classifier::replace_range(buffer, line, column)
    }

    pub fn on_connection_changed(&self, connection_id: Option<ConnectionId>) {
        self.cache.set_connection(connection_id);
    }

    pub fn on_database_changed(&self, database: Option<String>) -> Option<JoinHandle<()>> {
        self.cache.set_database(database)
    }

    /// Background refresh for the current binding, failures are logged.
    pub fn force_refresh(&self) -> Option<JoinHandle<()>> {
        self.cache.spawn_refresh()
    }

    /// Awaitable refresh for callers that want the outcome, such as one-shot
    /// command line use.
    pub async fn refresh(&self) -> Result<(), SchemaError> {
        self.cache.refresh().await
    }

    fn ensure_fresh(&self) {
        if self.cache.needs_refresh(self.max_age) {
            debug!(key = %self.cache.key(), "schema missing or stale, refreshing in background");
            self.cache.spawn_refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockSchemaProvider;
    use crate::suggestion::SuggestionCategory;
    use crate::test_support::snapshot_with_tables;

    fn users_provider() -> MockSchemaProvider {
        let mut provider = MockSchemaProvider::new();
        provider.expect_fetch_schema().returning(|_, _| {
            Ok(snapshot_with_tables(
                &["shop"],
                &[("shop", "users", &["id", "name"])],
            ))
        });
        provider
    }

    fn count(suggestions: &[Suggestion], category: SuggestionCategory) -> usize {
        suggestions.iter().filter(|s| s.category == category).count()
    }

    #[test]
    fn complete_without_runtime_or_connection_returns_keywords() {
        let session = CompletionSession::new(Arc::new(MockSchemaProvider::new()));

        let out = session.complete("SELECT ", 1, 8);

        assert!(count(&out, SuggestionCategory::Keyword) > 0);
        assert_eq!(count(&out, SuggestionCategory::Column), 0);
        assert_eq!(session.schema_state(), SchemaState::NotLoaded);
    }

    #[test]
    fn comment_line_returns_nothing() {
        let session = CompletionSession::new(Arc::new(MockSchemaProvider::new()));

        assert!(session.complete("-- SELECT ", 1, 11).is_empty());
    }

    #[tokio::test]
    async fn first_request_starts_background_load() {
        let session = CompletionSession::new(Arc::new(users_provider()));
        session.on_connection_changed(Some(ConnectionId::from("c1")));

        let first = session.complete("SELECT ", 1, 8);
        assert_eq!(count(&first, SuggestionCategory::Column), 0);
        assert_eq!(session.schema_state(), SchemaState::Loading);

        let mut rx = session.cache().subscribe();
        rx.changed().await.unwrap();

        let second = session.complete("SELECT ", 1, 8);
        assert_eq!(count(&second, SuggestionCategory::Column), 2);
    }

    #[tokio::test]
    async fn loading_state_does_not_spawn_again() {
        let mut provider = MockSchemaProvider::new();
        provider
            .expect_fetch_schema()
            .times(1)
            .returning(|_, _| Ok(snapshot_with_tables(&["shop"], &[])));
        let session = CompletionSession::new(Arc::new(provider));
        session.on_connection_changed(Some(ConnectionId::from("c1")));

        session.complete("SELECT ", 1, 8);
        session.complete("SELECT i", 1, 9);
        let mut rx = session.cache().subscribe();
        rx.changed().await.unwrap();
    }

    #[tokio::test]
    async fn max_age_zero_refreshes_but_serves_current_snapshot() {
        let session = CompletionSession::with_options(
            Arc::new(users_provider()),
            SessionOptions {
                max_age: Some(Duration::ZERO),
                ..SessionOptions::default()
            },
        );
        session.on_connection_changed(Some(ConnectionId::from("c1")));
        session.refresh().await.unwrap();

        let out = session.complete("SELECT ", 1, 8);

        assert_eq!(count(&out, SuggestionCategory::Column), 2);
        assert_eq!(session.schema_state(), SchemaState::Loading);
    }

    #[test]
    fn replace_range_delegates_to_classifier() {
        let session = CompletionSession::new(Arc::new(MockSchemaProvider::new()));

        let range = session.replace_range("SELECT na", 1, 10);

        assert_eq!(range.start_column, 8);
        assert_eq!(range.end_column, 10);
    }
}
