//! SQLite output backend for CSV-to-SQLite migration.
//!
//! Takes the in-memory [`Table`](csvdb_core::Table)s produced by
//! `csvdb-load` and writes them to one SQLite database file in two
//! phases:
//!
//! 1. **DDL** — a `CREATE TABLE` per table (columns in header order,
//!    inferred primary/foreign keys), all in one committed transaction.
//! 2. **Bulk insert** — every row of every table, in one committed
//!    transaction over a fresh connection.
//!
//! The two commits are separate on purpose: a crash between them leaves
//! an empty-but-schema-complete database. Reruns against an existing
//! database fail at DDL time (no `IF NOT EXISTS`).
//!
//! # Quick start
//!
//! ```no_run
//! use csvdb_load::load_dir;
//! use csvdb_sqlite::migrate;
//!
//! let tables = load_dir(".").unwrap();
//! let report = migrate("csvdb.db", &tables).unwrap();
//! for (table, rows) in &report.rows_inserted {
//!     println!("{table}: {rows} rows");
//! }
//! ```

mod convert;
mod error;
mod migration;
mod schema;

pub use error::{Result, SqliteError};
pub use migration::{Migration, MigrationReport, migrate};
pub use schema::create_table_sql;
