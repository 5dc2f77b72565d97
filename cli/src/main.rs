//! `csvdb` — batch-convert a directory of CSV files into one SQLite
//! database file.
//!
//! Running `csvdb` with no arguments converts every `*.csv` in the
//! current directory into `csvdb.db`. Any failure aborts the run with a
//! message on stderr and exit code 1; there is no partial-success
//! reporting and no cleanup of a partially-written database file.

use std::path::PathBuf;

use clap::Parser;
use csvdb_load::load_dir;
use csvdb_sqlite::migrate;
use tracing_subscriber::EnvFilter;

/// Default output database file, relative to the working directory.
const DEFAULT_DB_PATH: &str = "csvdb.db";

#[derive(Debug, Parser)]
#[command(name = "csvdb")]
#[command(about = "Convert a directory of CSV files into one SQLite database")]
struct Cli {
    /// Directory to scan for CSV files.
    #[arg(default_value = ".")]
    dir: PathBuf,
    /// Output SQLite database file. Must not already contain tables with
    /// colliding names; reruns fail.
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    // A directory with no CSV files yields an empty (but valid) database.
    let tables = load_dir(&cli.dir).map_err(|e| e.to_string())?;
    let report = migrate(&cli.db, &tables).map_err(|e| e.to_string())?;

    for (table, rows) in &report.rows_inserted {
        println!("{table}: {rows} row(s)");
    }
    println!(
        "Migrated {} table(s), {} row(s) into '{}'.",
        report.tables_created,
        report.total_rows(),
        cli.db.display()
    );
    Ok(())
}
