pub mod fixtures;

use std::sync::Arc;

use sqlhint::app::test_support::GatedSchemaProvider;
use sqlhint::app::{CompletionSession, Suggestion, SuggestionCategory};
use sqlhint::domain::ConnectionId;

pub const CONNECTION: &str = "local";

pub fn labels(suggestions: &[Suggestion], category: SuggestionCategory) -> Vec<&str> {
    suggestions
        .iter()
        .filter(|s| s.category == category)
        .map(|s| s.label.as_str())
        .collect()
}

pub fn has_schema_suggestions(suggestions: &[Suggestion]) -> bool {
    suggestions.iter().any(|s| {
        matches!(
            s.category,
            SuggestionCategory::Database | SuggestionCategory::Table | SuggestionCategory::Column
        )
    })
}

/// Session bound to [`CONNECTION`] with no database selected and nothing
/// loaded yet.
pub fn connected_session(provider: Arc<GatedSchemaProvider>) -> CompletionSession {
    let session = CompletionSession::new(provider);
    session.on_connection_changed(Some(ConnectionId::from(CONNECTION)));
    session
}

/// Cursor column just past the end of a single-line buffer.
pub fn end_column(buffer: &str) -> usize {
    buffer.chars().count() + 1
}
