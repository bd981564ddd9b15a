pub mod file_schema;
pub mod in_memory;
pub mod schema_document;

pub use file_schema::FileSchemaProvider;
pub use in_memory::InMemorySchemaProvider;
pub use schema_document::SchemaDocument;
