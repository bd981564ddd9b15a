pub mod schema_provider;

#[cfg(test)]
pub use schema_provider::MockSchemaProvider;
pub use schema_provider::{SchemaError, SchemaProvider};
