/// Keyword list served when a provider does not supply its own dialect list,
/// and by the empty snapshot so keyword completion never disappears.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "INSERT",
    "UPDATE",
    "DELETE",
    "CREATE",
    "ALTER",
    "DROP",
    "TABLE",
    "DATABASE",
    "INDEX",
    "VIEW",
    "PROCEDURE",
    "FUNCTION",
    "TRIGGER",
    "JOIN",
    "INNER",
    "LEFT",
    "RIGHT",
    "OUTER",
    "ON",
    "AS",
    "AND",
    "OR",
    "NOT",
    "IN",
    "BETWEEN",
    "LIKE",
    "IS",
    "NULL",
    "ORDER",
    "BY",
    "GROUP",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "DISTINCT",
    "COUNT",
    "SUM",
    "AVG",
    "MAX",
    "MIN",
    "ASC",
    "DESC",
    "SET",
    "VALUES",
    "INTO",
    "DEFAULT",
    "PRIMARY",
    "KEY",
    "FOREIGN",
    "REFERENCES",
    "UNIQUE",
    "CHECK",
    "CONSTRAINT",
    "CASCADE",
    "AUTO_INCREMENT",
    "UNSIGNED",
    "ZEROFILL",
    "BINARY",
    "COLLATE",
    "CHARSET",
    "ENGINE",
    "COMMENT",
    "IF",
    "EXISTS",
    "TEMPORARY",
    "TRUNCATE",
    "RENAME",
    "MODIFY",
    "CHANGE",
    "ADD",
    "COLUMN",
    "AFTER",
    "FIRST",
    "UNION",
    "ALL",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "END",
    "CAST",
    "CONVERT",
    "SUBSTRING",
    "CONCAT",
    "LENGTH",
    "TRIM",
    "UPPER",
    "LOWER",
    "REPLACE",
    "DATE",
    "TIME",
    "TIMESTAMP",
    "NOW",
    "YEAR",
    "MONTH",
    "DAY",
    "HOUR",
    "MINUTE",
    "SECOND",
    "INT",
    "INTEGER",
    "BIGINT",
    "SMALLINT",
    "TINYINT",
    "DECIMAL",
    "NUMERIC",
    "FLOAT",
    "DOUBLE",
    "REAL",
    "VARCHAR",
    "CHAR",
    "TEXT",
    "BLOB",
    "DATETIME",
    "BOOLEAN",
    "BOOL",
    "GRANT",
    "REVOKE",
    "COMMIT",
    "ROLLBACK",
    "SAVEPOINT",
    "START",
    "TRANSACTION",
    "BEGIN",
    "USE",
    "SHOW",
    "DESCRIBE",
    "EXPLAIN",
];
