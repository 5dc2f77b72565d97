//! Integration tests for the csvdb-load crate.

use std::io::Write;
use std::path::Path;

use csvdb_core::{ColumnType, Value};
use csvdb_load::{LoadError, load_dir};

fn write_csv(dir: &Path, name: &str, contents: &str) {
    let mut f = std::fs::File::create(dir.join(name)).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn test_multi_file_load_with_normalization() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        dir.path(),
        "card.csv",
        "card_id,disp_id,type,issued\n\
         1005,9285,junior,931107 00:00:00\n\
         104,588,classic,940119 00:00:00\n",
    );
    write_csv(
        dir.path(),
        "loan.csv",
        "loan_id,account_id,date,amount,duration\n\
         4959,2,940105,80952,24\n\
         4961,19,960429,30276.5,12\n",
    );

    let tables = load_dir(dir.path()).unwrap();
    assert_eq!(tables.len(), 2);

    let card = &tables[0];
    assert_eq!(card.name, "card");
    assert_eq!(card.row_count(), 2);
    assert_eq!(card.column("issued").unwrap().ty, ColumnType::DateTime);
    assert_eq!(card.column("card_id").unwrap().ty, ColumnType::Text);
    assert_eq!(card.column("type").unwrap().ty, ColumnType::Text);

    let loan = &tables[1];
    assert_eq!(loan.column("amount").unwrap().ty, ColumnType::Float);
    assert_eq!(loan.column("duration").unwrap().ty, ColumnType::BigInt);
    assert_eq!(
        loan.column("account_id").unwrap().values[0],
        Value::Text("2".into())
    );
    assert_eq!(
        loan.column("date").unwrap().values[1].timestamp_text().unwrap(),
        "1996-04-29 00:00:00"
    );
}

#[test]
fn test_key_inference_on_loaded_tables() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        dir.path(),
        "disp.csv",
        "disp_id,client_id,account_id,type\n1,1,1,OWNER\n",
    );

    let tables = load_dir(dir.path()).unwrap();
    let disp = &tables[0];
    assert_eq!(disp.primary_key().unwrap().name, "disp_id");

    let fk_tables: Vec<_> = disp
        .foreign_keys()
        .into_iter()
        .map(|fk| fk.referenced_table)
        .collect();
    assert_eq!(fk_tables, ["client", "account"]);
}

#[test]
fn test_bad_timestamp_aborts_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "a.csv", "a_id\n1\n");
    write_csv(dir.path(), "b.csv", "b_id,date\n1,never\n");

    let err = load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidTimestamp { .. }));
}

#[test]
fn test_empty_directory_yields_no_tables() {
    let dir = tempfile::tempdir().unwrap();
    let tables = load_dir(dir.path()).unwrap();
    assert!(tables.is_empty());
}
