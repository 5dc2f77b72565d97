//! `CREATE TABLE` generation from table descriptors.
//!
//! One statement per table: quoted column definitions in header order,
//! then a `PRIMARY KEY` clause if the table has one, then one
//! `FOREIGN KEY` clause per identifier column, all joined by `", "`.
//! Identifiers are double-quoted verbatim; no further escaping is
//! performed, so a column name containing a double quote produces invalid
//! SQL and fails at DDL time.
//!
//! There is deliberately no `IF NOT EXISTS`: re-running a migration
//! against an existing database fails with a table-already-exists error.

use csvdb_core::Table;

/// Renders an identifier with simple double quoting.
fn quote(name: &str) -> String {
    format!("\"{name}\"")
}

/// Generates the `CREATE TABLE` statement for one table.
///
/// Creation order across tables does not need to be dependency-sorted:
/// SQLite does not resolve foreign-key targets at DDL time, so a table
/// may reference one that is created later in the same run.
pub fn create_table_sql(table: &Table) -> String {
    let mut clauses: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("{} {}", quote(&c.name), c.ty.sql_name()))
        .collect();

    if let Some(pk) = table.primary_key() {
        clauses.push(format!("PRIMARY KEY({})", quote(&pk.name)));
    }
    for fk in table.foreign_keys() {
        clauses.push(format!(
            "FOREIGN KEY({col}) REFERENCES {table}({col})",
            col = quote(&fk.column),
            table = quote(&fk.referenced_table),
        ));
    }

    format!("CREATE TABLE {} ({})", quote(&table.name), clauses.join(", "))
}
