//! CSV file discovery and table loading.
//!
//! Discovery is a flat, non-recursive listing of one directory for files
//! with a `csv` extension (case-insensitive). Results are sorted by file
//! name so a run is deterministic regardless of directory enumeration
//! order.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use csvdb_core::Table;
use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::normalize::build_column;

/// Lists all CSV files in a directory, sorted by file name.
///
/// Matches the `csv` extension case-insensitively, skips anything that is
/// not a regular file, and does not recurse.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the directory cannot be read.
pub fn discover_csv_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    debug!(count = paths.len(), "discovered csv files");
    Ok(paths)
}

/// Loads one CSV file into a column-oriented [`Table`].
///
/// The table name is the file stem, verbatim. The first record is taken
/// as the header; every column is normalized and typed as described in
/// the crate docs. The whole file is read into memory.
///
/// # Errors
///
/// Returns [`LoadError::Csv`] on malformed content, including rows whose
/// cell count differs from the header, [`LoadError::InvalidTimestamp`] if
/// a `date`/`issued` value does not parse, and [`LoadError::TableName`]
/// if the path has no file stem.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoadError::TableName(path.to_path_buf()))?
        .to_string();

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records: Vec<StringRecord> = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let raw: Vec<&str> = records.iter().map(|r| &r[idx]).collect();
        columns.push(build_column(header, &raw)?);
    }

    let table = Table::new(name, columns);
    info!(
        table = %table.name,
        rows = table.row_count(),
        columns = table.columns.len(),
        "loaded table"
    );
    Ok(table)
}

/// Discovers and loads every CSV file in a directory.
///
/// Tables come back in discovery order (sorted by file name). The first
/// failing file aborts the whole load.
///
/// # Errors
///
/// Propagates any [`LoadError`] from discovery or per-file loading.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Table>> {
    let paths = discover_csv_files(dir)?;
    let mut tables = Vec::with_capacity(paths.len());
    for path in &paths {
        tables.push(load_table(path)?);
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_discovery_skips_non_csv_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "zebra.csv", "a\n1\n");
        write_file(dir.path(), "apple.CSV", "a\n1\n");
        write_file(dir.path(), "notes.txt", "hello");

        let paths = discover_csv_files(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["apple.CSV", "zebra.csv"]);
    }

    #[test]
    fn test_table_name_is_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "district.csv", "district_id,name\n1,Prague\n");

        let table = load_table(dir.path().join("district.csv")).unwrap();
        assert_eq!(table.name, "district");
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_column_order_matches_header() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "t.csv", "c,a,b\n1,2,3\n");

        let table = load_table(dir.path().join("t.csv")).unwrap();
        let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "bad.csv", "a,b\n1,2\n3\n");

        let err = load_table(dir.path().join("bad.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_load_dir_returns_tables_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "order.csv", "order_id\n1\n");
        write_file(dir.path(), "client.csv", "client_id\n1\n2\n");

        let tables = load_dir(dir.path()).unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["client", "order"]);
    }
}
