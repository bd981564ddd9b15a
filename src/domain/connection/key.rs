use std::fmt;

use super::id::ConnectionId;

/// Identity a schema snapshot was fetched under.
///
/// A snapshot is only valid while the cache is still bound to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CacheKey {
    pub connection_id: Option<ConnectionId>,
    pub database: Option<String>,
}

impl CacheKey {
    pub fn new(connection_id: Option<ConnectionId>, database: Option<String>) -> Self {
        Self {
            connection_id,
            database,
        }
    }

    /// No connection bound means there is nothing to fetch.
    pub fn is_bound(&self) -> bool {
        self.connection_id.is_some()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connection = self.connection_id.as_ref().map_or("-", ConnectionId::as_str);
        match &self.database {
            Some(db) => write!(f, "{connection}/{db}"),
            None => write!(f, "{connection}/*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_unbound() {
        assert!(!CacheKey::default().is_bound());
    }

    #[test]
    fn keys_differ_when_database_differs() {
        let conn = Some(ConnectionId::from("c1"));
        let a = CacheKey::new(conn.clone(), Some("db1".to_string()));
        let b = CacheKey::new(conn, Some("db2".to_string()));

        assert_ne!(a, b);
    }

    #[test]
    fn display_marks_missing_parts() {
        assert_eq!(CacheKey::default().to_string(), "-/*");
        let key = CacheKey::new(Some(ConnectionId::from("c1")), Some("shop".to_string()));
        assert_eq!(key.to_string(), "c1/shop");
    }
}
