//! CSV discovery and loading for CSV-to-SQLite migration.
//!
//! Turns a directory of CSV files into in-memory
//! [`Table`](csvdb_core::Table)s ready for DDL generation and bulk insert.
//! Loading is whole-file and synchronous; there is no streaming and no
//! size limit.
//!
//! Normalization happens per column while loading:
//!
//! - columns named `date` or `issued` are parsed as timestamps (an
//!   unparseable value aborts the load);
//! - columns ending in `_id` keep their values as text verbatim, so key
//!   columns are stored uniformly across tables;
//! - all other columns get their type inferred from content (all-integer
//!   → `BIGINT`, all-float → `FLOAT`, otherwise `TEXT`).
//!
//! # Example
//!
//! ```no_run
//! use csvdb_load::load_dir;
//!
//! let tables = load_dir(".").unwrap();
//! for table in &tables {
//!     println!("{}: {} rows", table.name, table.row_count());
//! }
//! ```

mod error;
mod loader;
mod normalize;

pub use error::{LoadError, Result};
pub use loader::{discover_csv_files, load_dir, load_table};
