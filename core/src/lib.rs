//! Core data model for CSV-to-SQLite migration.
//!
//! This crate defines the in-memory representation of a tabular dataset
//! ([`Table`], [`Column`], [`Value`]) and the two inference rules that turn
//! a pile of CSV files into a relational schema:
//!
//! - **Type inference** — a column whose values all parse as integers
//!   becomes `BIGINT`, all-float columns become `FLOAT`, timestamp columns
//!   become `DATETIME`, and everything else falls back to `TEXT`.
//! - **Key inference** — a column named `"<table>_id"` is the table's
//!   primary key; any other column ending in `_id` is a foreign key to the
//!   table named after the column with the `_id` suffix stripped.
//!
//! Both rules operate purely on names and string values; this crate does
//! no I/O and does not depend on any database driver.
//!
//! # Example
//!
//! ```
//! use csvdb_core::{Column, ColumnType, Table, Value};
//!
//! let table = Table::new(
//!     "account",
//!     vec![
//!         Column::new("account_id", ColumnType::Text, vec![Value::Text("1".into())]),
//!         Column::new("district_id", ColumnType::Text, vec![Value::Text("18".into())]),
//!         Column::new("frequency", ColumnType::Text, vec![Value::Text("POPLATEK MESICNE".into())]),
//!     ],
//! );
//!
//! assert_eq!(table.primary_key().unwrap().name, "account_id");
//! let fks = table.foreign_keys();
//! assert_eq!(fks[0].referenced_table, "district");
//! ```

mod infer;
mod types;

pub use infer::{infer_column_type, is_identifier_column, is_timestamp_column};
pub use types::{Column, ColumnType, ForeignKey, Table, Value};
