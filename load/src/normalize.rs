//! Per-column normalization and typing.
//!
//! Applies the naming-convention rules first (timestamp columns,
//! identifier columns), then falls back to content-based type inference.
//! Empty cells become [`Value::Null`] in every case.

use chrono::{NaiveDate, NaiveDateTime};
use csvdb_core::{
    Column, ColumnType, Value, infer_column_type, is_identifier_column, is_timestamp_column,
};

use crate::error::{LoadError, Result};

/// Formats tried for timestamp values carrying a time of day.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%y%m%d %H:%M:%S"];

/// Formats tried for date-only timestamp values (midnight assumed).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%y%m%d"];

/// Builds one typed [`Column`] from a header name and raw cells.
///
/// # Errors
///
/// Returns [`LoadError::InvalidTimestamp`] if the column is a timestamp
/// column and a non-empty cell matches none of the accepted formats.
pub(crate) fn build_column(name: &str, raw: &[&str]) -> Result<Column> {
    if is_timestamp_column(name) {
        let values = raw
            .iter()
            .map(|cell| timestamp_value(name, cell))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Column::new(name, ColumnType::DateTime, values));
    }

    if is_identifier_column(name) {
        // Forced to text even when every value is numeric, so key columns
        // are stored uniformly across tables.
        let values = raw
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    Value::Null
                } else {
                    Value::Text(cell.to_string())
                }
            })
            .collect();
        return Ok(Column::new(name, ColumnType::Text, values));
    }

    let ty = infer_column_type(raw.iter().copied());
    let values = raw.iter().map(|cell| typed_value(ty, cell)).collect();
    Ok(Column::new(name, ty, values))
}

fn timestamp_value(column: &str, cell: &str) -> Result<Value> {
    if cell.is_empty() {
        return Ok(Value::Null);
    }
    parse_timestamp(cell)
        .map(Value::Timestamp)
        .ok_or_else(|| LoadError::InvalidTimestamp {
            column: column.to_string(),
            value: cell.to_string(),
        })
}

fn typed_value(ty: ColumnType, cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match ty {
        // Inference guarantees these parses succeed for non-empty cells.
        ColumnType::BigInt => cell
            .parse::<i64>()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::Text(cell.to_string())),
        ColumnType::Float => cell
            .parse::<f64>()
            .map(Value::Real)
            .unwrap_or_else(|_| Value::Text(cell.to_string())),
        ColumnType::DateTime | ColumnType::Text => Value::Text(cell.to_string()),
    }
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(ts);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
