use sqlhint::app::test_support::snapshot_with_tables;
use sqlhint::domain::SchemaSnapshot;

pub fn users_only() -> SchemaSnapshot {
    snapshot_with_tables(&["shop"], &[("shop", "users", &["id", "name"])])
}

pub fn shop() -> SchemaSnapshot {
    snapshot_with_tables(
        &["shop"],
        &[
            ("shop", "users", &["id", "name", "email"]),
            ("shop", "orders", &["id", "user_id", "total"]),
            ("shop", "products", &["sku", "title"]),
        ],
    )
}

pub fn two_databases() -> SchemaSnapshot {
    snapshot_with_tables(&["db1", "db2"], &[("db1", "accounts", &["id"])])
}

pub fn db2_only() -> SchemaSnapshot {
    snapshot_with_tables(&["db1", "db2"], &[("db2", "invoices", &["id", "amount"])])
}

pub const SCHEMA_JSON: &str = r#"{
    "connections": {
        "local": {
            "databases": [
                { "name": "shop", "tables": [
                    { "name": "users", "columns": [
                        { "name": "id", "data_type": "int" },
                        { "name": "email", "data_type": "varchar(255)" }
                    ] },
                    { "name": "orders", "columns": [
                        { "name": "id", "data_type": "int" },
                        { "name": "user_id", "data_type": "int" }
                    ] }
                ] },
                { "name": "analytics", "tables": [
                    { "name": "events", "columns": [ { "name": "kind", "data_type": "text" } ] }
                ] }
            ]
        }
    }
}"#;
