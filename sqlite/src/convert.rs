//! Row binding between the in-memory value model and SQLite.
//!
//! Builds one prepared `INSERT` per table and binds each row's cells in
//! header order. Timestamps are bound as `YYYY-MM-DD HH:MM:SS` text,
//! which is what SQLite stores in a `DATETIME` column.

use csvdb_core::{Table, Value};
use rusqlite::Connection;
use rusqlite::types::{ToSqlOutput, Value as SqlValue, ValueRef};

use crate::error::{Result, SqliteError};

/// Converts one cell to a bindable SQL parameter.
fn to_sql_output(value: &Value) -> ToSqlOutput<'_> {
    match value {
        Value::Null => ToSqlOutput::Owned(SqlValue::Null),
        Value::Integer(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
        Value::Real(f) => ToSqlOutput::Owned(SqlValue::Real(*f)),
        Value::Timestamp(_) => ToSqlOutput::Owned(SqlValue::Text(
            value
                .timestamp_text()
                .unwrap_or_default(),
        )),
        Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
    }
}

/// Renders the parameterized `INSERT` statement for a table.
fn insert_sql(table: &Table) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("\"{}\"", c.name))
        .collect();
    let placeholders: Vec<String> = (1..=table.columns.len())
        .map(|i| format!("?{i}"))
        .collect();
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Checks that every column holds the same number of cells.
fn check_column_arity(table: &Table) -> Result<()> {
    let expected = table.row_count();
    for column in &table.columns {
        if column.values.len() != expected {
            return Err(SqliteError::RaggedTable {
                table: table.name.clone(),
                expected,
                column: column.name.clone(),
                actual: column.values.len(),
            });
        }
    }
    Ok(())
}

/// Inserts every row of a table, returning the number inserted.
///
/// Uses one prepared statement and one `INSERT` per row, preserving
/// column order. The caller provides the transaction boundary.
///
/// # Errors
///
/// Returns [`SqliteError::RaggedTable`] if column lengths disagree, or
/// [`SqliteError::Database`] on any engine failure (type mismatch,
/// constraint violation where enforced).
pub(crate) fn insert_rows(conn: &Connection, table: &Table) -> Result<usize> {
    check_column_arity(table)?;
    if table.columns.is_empty() {
        return Ok(0);
    }

    let mut stmt = conn.prepare(&insert_sql(table))?;
    let rows = table.row_count();
    for row in 0..rows {
        let params = table.columns.iter().map(|c| to_sql_output(&c.values[row]));
        stmt.execute(rusqlite::params_from_iter(params))?;
    }
    Ok(rows)
}
