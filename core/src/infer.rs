//! Column classification rules.
//!
//! Two name-based rules run before content inference: `date`/`issued`
//! columns are timestamps, and `*_id` columns are identifiers stored as
//! text. Everything else is classified by content with
//! [`infer_column_type`].

use crate::types::ColumnType;

/// Column names whose values are parsed as timestamps.
const TIMESTAMP_COLUMNS: &[&str] = &["date", "issued"];

/// Whether a column is parsed as timestamps, by naming convention.
pub fn is_timestamp_column(name: &str) -> bool {
    TIMESTAMP_COLUMNS.contains(&name)
}

/// Whether a column is an identifier column (name ends in `_id`).
///
/// Identifier columns are forced to `TEXT` regardless of content so that
/// key columns are stored uniformly across tables.
pub fn is_identifier_column(name: &str) -> bool {
    name.ends_with("_id")
}

/// Infers a column's SQL type from its raw string cells.
///
/// Empty cells are ignored. If every non-empty cell parses as `i64` the
/// column is `BIGINT`; failing that, if every non-empty cell parses as
/// `f64` it is `FLOAT`; otherwise it is `TEXT`. A column with no non-empty
/// cells falls back to `TEXT`.
pub fn infer_column_type<'a, I>(raw_values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut saw_value = false;
    let mut all_integer = true;
    let mut all_float = true;

    for raw in raw_values {
        if raw.is_empty() {
            continue;
        }
        saw_value = true;
        if all_integer && raw.parse::<i64>().is_err() {
            all_integer = false;
        }
        if !all_integer && all_float && raw.parse::<f64>().is_err() {
            all_float = false;
        }
        if !all_float {
            break;
        }
    }

    if !saw_value {
        ColumnType::Text
    } else if all_integer {
        ColumnType::BigInt
    } else if all_float {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_integers_is_bigint() {
        assert_eq!(
            infer_column_type(["1", "42", "-7"]),
            ColumnType::BigInt
        );
    }

    #[test]
    fn test_mixed_integer_float_is_float() {
        assert_eq!(
            infer_column_type(["1", "2.5", "3"]),
            ColumnType::Float
        );
    }

    #[test]
    fn test_any_non_numeric_is_text() {
        assert_eq!(
            infer_column_type(["1", "2.5", "abc"]),
            ColumnType::Text
        );
    }

    #[test]
    fn test_empty_cells_are_ignored() {
        assert_eq!(infer_column_type(["", "3", ""]), ColumnType::BigInt);
    }

    #[test]
    fn test_all_empty_falls_back_to_text() {
        assert_eq!(infer_column_type(["", ""]), ColumnType::Text);
        assert_eq!(infer_column_type([]), ColumnType::Text);
    }

    #[test]
    fn test_timestamp_column_names() {
        assert!(is_timestamp_column("date"));
        assert!(is_timestamp_column("issued"));
        assert!(!is_timestamp_column("created_at"));
        assert!(!is_timestamp_column("Date"));
    }

    #[test]
    fn test_identifier_column_names() {
        assert!(is_identifier_column("account_id"));
        assert!(is_identifier_column("district_id"));
        assert!(!is_identifier_column("identity"));
        assert!(!is_identifier_column("id"));
    }
}
