//! Plain-language explanations of resolved intents.
//!
//! Explanations are short Markdown sentences meant to sit next to the
//! generated SQL.

use crate::intent::Intent;

/// Returned when an intent has no explanation, including unknown ones.
pub const CANNOT_EXPLAIN: &str = "❓ Could not explain this query.";

/// Trait for describing an intent in prose.
pub trait Explain {
    fn explain(&self) -> String;
}

impl Explain for Intent {
    fn explain(&self) -> String {
        match self {
            Intent::ShowAll { table } => format!(
                "📊 **Retrieves all records** from the `{}` table, displaying every column and row.",
                table
            ),
            Intent::CalculateSum { table, column } => format!(
                "➕ **Calculates the total sum** of all values in the `{}` column from the `{}` table.",
                column, table
            ),
            Intent::CountRecords { table } => format!(
                "🔢 **Counts the total number of records** in the `{}` table.",
                table
            ),
            Intent::FilterByCity { table, city } => format!(
                "🏙️ **Filters records** from the `{}` table to show only entries where the city is `{}`.",
                table, city
            ),
            Intent::FilterByColumn {
                table,
                column,
                value,
            } => format!(
                "🔍 **Filters records** from the `{}` table where `{}` equals `{}`.",
                table, column, value
            ),
            Intent::CalculateAvg { table, column } => format!(
                "📈 **Calculates the average value** of the `{}` column from the `{}` table.",
                column, table
            ),
            Intent::CalculateMax { table, column } => format!(
                "⬆️ **Finds the maximum value** in the `{}` column from the `{}` table.",
                column, table
            ),
            Intent::CalculateMin { table, column } => format!(
                "⬇️ **Finds the minimum value** in the `{}` column from the `{}` table.",
                column, table
            ),
            Intent::OrderBy { table, column } => format!(
                "🔄 **Sorts all records** from the `{}` table by the `{}` column in ascending order.",
                table, column
            ),
            Intent::Limit { table, limit } => format!(
                "🔝 **Retrieves the first {} records** from the `{}` table.",
                limit, table
            ),
            Intent::Unknown { .. } => CANNOT_EXPLAIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_all() {
        let intent = Intent::ShowAll {
            table: "products".into(),
        };
        assert_eq!(
            intent.explain(),
            "📊 **Retrieves all records** from the `products` table, displaying every column and row."
        );
    }

    #[test]
    fn test_aggregate_mentions_column_and_table() {
        let intent = Intent::CalculateAvg {
            table: "sales".into(),
            column: "amount".into(),
        };
        assert_eq!(
            intent.explain(),
            "📈 **Calculates the average value** of the `amount` column from the `sales` table."
        );
    }

    #[test]
    fn test_count_records() {
        let intent = Intent::CountRecords {
            table: "users".into(),
        };
        assert_eq!(
            intent.explain(),
            "🔢 **Counts the total number of records** in the `users` table."
        );
    }

    #[test]
    fn test_sum_max_min() {
        let sum = Intent::CalculateSum {
            table: "sales".into(),
            column: "amount".into(),
        };
        assert_eq!(
            sum.explain(),
            "➕ **Calculates the total sum** of all values in the `amount` column from the `sales` table."
        );

        let max = Intent::CalculateMax {
            table: "employees".into(),
            column: "salary".into(),
        };
        assert_eq!(
            max.explain(),
            "⬆️ **Finds the maximum value** in the `salary` column from the `employees` table."
        );

        let min = Intent::CalculateMin {
            table: "customers".into(),
            column: "age".into(),
        };
        assert_eq!(
            min.explain(),
            "⬇️ **Finds the minimum value** in the `age` column from the `customers` table."
        );
    }

    #[test]
    fn test_filter_by_column() {
        let intent = Intent::FilterByColumn {
            table: "users".into(),
            column: "role".into(),
            value: "admin".into(),
        };
        assert_eq!(
            intent.explain(),
            "🔍 **Filters records** from the `users` table where `role` equals `admin`."
        );
    }

    #[test]
    fn test_order_by() {
        let intent = Intent::OrderBy {
            table: "employees".into(),
            column: "salary".into(),
        };
        assert_eq!(
            intent.explain(),
            "🔄 **Sorts all records** from the `employees` table by the `salary` column in ascending order."
        );
    }

    #[test]
    fn test_filter_by_city() {
        let intent = Intent::FilterByCity {
            table: "customers".into(),
            city: "London".into(),
        };
        assert!(intent.explain().ends_with("where the city is `London`."));
    }

    #[test]
    fn test_limit() {
        let intent = Intent::Limit {
            table: "orders".into(),
            limit: "10".into(),
        };
        assert_eq!(
            intent.explain(),
            "🔝 **Retrieves the first 10 records** from the `orders` table."
        );
    }

    #[test]
    fn test_unknown() {
        let intent = Intent::Unknown {
            query: "".into(),
        };
        assert_eq!(intent.explain(), CANNOT_EXPLAIN);
    }
}
