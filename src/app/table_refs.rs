use std::sync::OnceLock;

use regex::Regex;

static TABLE_REF_RE: OnceLock<Regex> = OnceLock::new();

fn table_ref_re() -> &'static Regex {
    // Applied to the uppercased buffer; no word boundary before the keyword.
    TABLE_REF_RE.get_or_init(|| {
        Regex::new(r"(?:FROM|JOIN)\s+([A-Z0-9_]+)").expect("static table reference pattern")
    })
}

/// Lowercased table names that follow FROM or JOIN anywhere in `buffer`, in
/// document order, duplicates kept.
///
/// Best effort only: aliases, subqueries and quoted identifiers are not
/// resolved, and `db.table` yields just `db`.
pub fn extract_table_references(buffer: &str) -> Vec<String> {
    let upper = buffer.to_uppercase();
    table_ref_re()
        .captures_iter(&upper)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn aliases_are_ignored() {
        let refs = extract_table_references("SELECT a FROM Users u JOIN Orders o ON u.id=o.uid");

        assert_eq!(refs, ["users", "orders"]);
    }

    #[test]
    fn no_from_or_join_yields_empty() {
        assert!(extract_table_references("SELECT 1 + 1").is_empty());
        assert!(extract_table_references("").is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let refs = extract_table_references(
            "SELECT * FROM t1 WHERE id IN (SELECT id FROM t1)",
        );

        assert_eq!(refs, ["t1", "t1"]);
    }

    #[test]
    fn spans_multiple_lines() {
        let refs = extract_table_references("SELECT *\nFROM\n  users\nLEFT JOIN\torders ON 1=1");

        assert_eq!(refs, ["users", "orders"]);
    }

    #[rstest]
    #[case("SELECT * FROM shop.users", &["shop"])]
    #[case("SELECT * FROM `users`", &[])]
    #[case("SELECT * FROM ", &[])]
    #[case("delete from audit_log_2024", &["audit_log_2024"])]
    fn best_effort_identifier_rules(#[case] buffer: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_table_references(buffer), expected);
    }

    #[test]
    fn keyword_inside_identifier_still_matches() {
        // Substring semantics: "DATEFROM x" reads as "FROM x"
        assert_eq!(extract_table_references("SELECT datefrom x"), ["x"]);
    }
}
