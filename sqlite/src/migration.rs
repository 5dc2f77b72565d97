//! Two-phase migration: DDL transaction, then bulk-insert transaction.
//!
//! Phase one opens a connection, creates every table inside one
//! transaction, commits, and closes. Phase two opens a fresh connection,
//! inserts every table's rows inside one transaction, commits, and
//! closes. The phases commit separately, so a crash between them leaves
//! an empty-but-schema-complete database; there is no atomicity across
//! the whole batch beyond each phase's own commit.
//!
//! # Example
//!
//! ```no_run
//! use csvdb_load::load_dir;
//! use csvdb_sqlite::migrate;
//!
//! let tables = load_dir(".").unwrap();
//! let report = migrate("csvdb.db", &tables).unwrap();
//! println!("created {} tables", report.tables_created);
//! ```

use std::path::Path;

use csvdb_core::Table;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::convert::insert_rows;
use crate::error::{Result, SqliteError};
use crate::schema::create_table_sql;

/// Executes both phases against a database file and returns a report.
///
/// Tables are created and populated in the order given (discovery order).
/// The target file is created if absent; if it already holds a table with
/// a colliding name, phase one fails with a table-already-exists error —
/// the migration is deliberately not idempotent.
///
/// # Errors
///
/// Any [`SqliteError`] aborts the run. A failure in phase two can leave
/// the schema in place with some tables unpopulated.
pub fn migrate(db_path: impl AsRef<Path>, tables: &[Table]) -> Result<MigrationReport> {
    let db_path = db_path.as_ref();

    let mut migration = Migration::open(db_path)?;
    let tables_created = migration.create_tables(tables)?;
    drop(migration);

    let mut migration = Migration::open(db_path)?;
    let rows_inserted = migration.insert_all(tables)?;

    Ok(MigrationReport {
        tables_created,
        rows_inserted,
    })
}

/// One phase of the migration, owning its connection.
///
/// [`create_tables`](Self::create_tables) and
/// [`insert_all`](Self::insert_all) each run inside a single transaction;
/// dropping the `Migration` closes the connection.
pub struct Migration {
    conn: Connection,
}

impl Migration {
    /// Opens a connection to the database file, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::Database`] if the file cannot be opened.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Ok(Self::new(conn))
    }

    /// Wraps an existing connection (useful for in-memory databases in
    /// tests).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Creates every table inside one transaction and commits.
    ///
    /// Statements run in the order given; foreign keys may reference
    /// tables created later in the same batch, since SQLite does not
    /// resolve FK targets at DDL time.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::Database`] on any statement failure,
    /// including a name collision with a pre-existing table. The
    /// uncommitted transaction rolls back.
    pub fn create_tables(&mut self, tables: &[Table]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for table in tables {
            let sql = create_table_sql(table);
            debug!(table = %table.name, %sql, "creating table");
            tx.execute(&sql, [])?;
        }
        tx.commit()?;
        info!(count = tables.len(), "created tables");
        Ok(tables.len())
    }

    /// Inserts every table's rows inside one transaction and commits.
    ///
    /// Tables are populated in the order given, each with column order
    /// preserved. Returns per-table inserted row counts.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError`] on the first failing insert; the
    /// uncommitted transaction rolls back, but tables committed by an
    /// earlier phase stay in place.
    pub fn insert_all(&mut self, tables: &[Table]) -> Result<Vec<(String, usize)>> {
        let tx = self.conn.transaction()?;
        let mut counts = Vec::with_capacity(tables.len());
        for table in tables {
            let inserted = insert_rows(&tx, table)?;
            debug!(table = %table.name, rows = inserted, "inserted rows");
            counts.push((table.name.clone(), inserted));
        }
        tx.commit()?;
        info!(
            rows = counts.iter().map(|(_, n)| n).sum::<usize>(),
            "inserted rows"
        );
        Ok(counts)
    }

    /// Consumes the migration and returns the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

/// Outcome of a completed migration.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    /// Number of tables created in phase one.
    pub tables_created: usize,
    /// Per-table inserted row counts, in discovery order.
    pub rows_inserted: Vec<(String, usize)>,
}

impl MigrationReport {
    /// Total rows inserted across all tables.
    pub fn total_rows(&self) -> usize {
        self.rows_inserted.iter().map(|(_, n)| n).sum()
    }
}
