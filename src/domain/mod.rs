pub mod column;
pub mod connection;
pub mod keywords;
pub mod metadata;
pub mod snapshot;
pub mod table;

pub use column::ColumnMeta;
pub use connection::{CacheKey, ConnectionId};
pub use keywords::DEFAULT_KEYWORDS;
pub use metadata::SchemaState;
pub use snapshot::{SchemaSnapshot, default_keywords};
pub use table::TableMeta;
