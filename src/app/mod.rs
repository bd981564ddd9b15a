//! Completion engine: schema cache, lexical classification and suggestion
//! assembly behind a single [`CompletionSession`].

pub use sqlhint_domain as domain;

pub mod assembler;
pub mod classifier;
pub mod ports;
pub mod schema_cache;
pub mod session;
pub mod suggestion;
pub mod table_refs;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use assembler::SuggestionAssembler;
pub use classifier::{Classification, CompletionContext, ReplaceRange};
pub use schema_cache::SchemaCache;
pub use session::{CompletionSession, SessionOptions};
pub use suggestion::{Suggestion, SuggestionCategory};
