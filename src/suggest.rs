//! Example questions for a set of tables.

/// Tables that get an "Average amount" example instead of "Show ... data".
const AMOUNT_TABLES: &[&str] = &["sales", "orders"];

/// Four example questions per table, in table order.
pub fn suggestions<S: AsRef<str>>(tables: &[S]) -> Vec<String> {
    tables
        .iter()
        .map(|t| t.as_ref())
        .flat_map(|table| {
            let last = if AMOUNT_TABLES.iter().any(|t| *t == table) {
                format!("Average amount from {}", table)
            } else {
                format!("Show {} data", table)
            };
            [
                format!("Show all {}", table),
                format!("Count {}", table),
                format!("Top 10 {}", table),
                last,
            ]
        })
        .collect()
}
