//! Table and column inference.
//!
//! Best-effort guesses used when a pattern's captures don't name a table.

/// Columns that give away which table they belong to.
const COLUMN_TABLES: &[(&str, &str)] = &[
    ("amount", "sales"),
    ("price", "products"),
    ("order_value", "orders"),
    ("salary", "employees"),
    ("age", "customers"),
];

/// Table used when nothing else is known.
pub const PLACEHOLDER_TABLE: &str = "table";

/// First known table whose name occurs anywhere in `query`.
///
/// Plain substring search, so `"orders"` is found inside `"reorders"`.
/// Empty names are skipped.
pub fn detect_table<'t>(query: &str, tables: &'t [String]) -> Option<&'t str> {
    tables
        .iter()
        .filter(|t| !t.is_empty())
        .find(|t| query.contains(t.as_str()))
        .map(String::as_str)
}

/// Guess the table owning `column`.
///
/// Falls back to the first non-empty known table, then to
/// [`PLACEHOLDER_TABLE`].
pub fn infer_table_from_column(column: &str, tables: &[String]) -> String {
    COLUMN_TABLES
        .iter()
        .find(|(col, _)| *col == column)
        .map(|(_, table)| *table)
        .or_else(|| tables.iter().map(String::as_str).find(|t| !t.is_empty()))
        .unwrap_or(PLACEHOLDER_TABLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_first_listed_wins() {
        let known = tables(&["users", "orders"]);
        assert_eq!(detect_table("orders by users", &known), Some("users"));
    }

    #[test]
    fn test_detect_substring() {
        let known = tables(&["orders"]);
        assert_eq!(detect_table("count reorders", &known), Some("orders"));
        assert_eq!(detect_table("count people", &known), None);
    }

    #[test]
    fn test_detect_empty_tables() {
        assert_eq!(detect_table("show all users", &[]), None);
    }

    #[test]
    fn test_detect_skips_empty_names() {
        let known = tables(&["", "sales"]);
        assert_eq!(detect_table("average amount", &known), None);
        assert_eq!(detect_table("total amount in sales", &known), Some("sales"));
    }

    #[test]
    fn test_infer_known_columns() {
        let known = tables(&["users"]);
        assert_eq!(infer_table_from_column("amount", &known), "sales");
        assert_eq!(infer_table_from_column("price", &known), "products");
        assert_eq!(infer_table_from_column("order_value", &known), "orders");
        assert_eq!(infer_table_from_column("salary", &known), "employees");
        assert_eq!(infer_table_from_column("age", &known), "customers");
    }

    #[test]
    fn test_infer_fallbacks() {
        assert_eq!(
            infer_table_from_column("height", &tables(&["users", "orders"])),
            "users"
        );
        assert_eq!(infer_table_from_column("height", &[]), "table");
        assert_eq!(
            infer_table_from_column("height", &tables(&["", "people"])),
            "people"
        );
        assert_eq!(infer_table_from_column("height", &tables(&[""])), "table");
    }
}
