//! Table, column, and value types for the in-memory dataset model.
//!
//! Tables are column-oriented: a [`Table`] owns an ordered list of
//! [`Column`]s in CSV header order, and each column carries every cell of
//! that column as a [`Value`]. Names are taken verbatim from file and
//! header names; no case folding, collision handling, or identifier
//! validation is applied here.

use chrono::NaiveDateTime;

/// SQL render format for [`Value::Timestamp`] cells.
pub(crate) const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQL column type assigned to a column during inference.
///
/// # Examples
///
/// ```
/// use csvdb_core::ColumnType;
///
/// assert_eq!(ColumnType::BigInt.sql_name(), "BIGINT");
/// assert_eq!(ColumnType::default(), ColumnType::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// Integer-valued column.
    BigInt,
    /// Floating-point column.
    Float,
    /// Timestamp column (`date`/`issued` by naming convention).
    DateTime,
    /// Fallback for everything else, including identifier columns.
    #[default]
    Text,
}

impl ColumnType {
    /// The SQL type keyword this column type renders to in DDL.
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::BigInt => "BIGINT",
            ColumnType::Float => "FLOAT",
            ColumnType::DateTime => "DATETIME",
            ColumnType::Text => "TEXT",
        }
    }
}

/// A single typed cell.
///
/// Empty CSV cells become [`Value::Null`]; everything else is parsed into
/// the variant matching its column's inferred [`ColumnType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Empty cell.
    Null,
    /// Cell in a `BIGINT` column.
    Integer(i64),
    /// Cell in a `FLOAT` column.
    Real(f64),
    /// Cell in a `DATETIME` column.
    Timestamp(NaiveDateTime),
    /// Cell in a `TEXT` column (including identifier columns).
    Text(String),
}

impl Value {
    /// Renders a timestamp cell to its SQL text form
    /// (`YYYY-MM-DD HH:MM:SS`). Returns `None` for other variants.
    pub fn timestamp_text(&self) -> Option<String> {
        match self {
            Value::Timestamp(ts) => Some(ts.format(SQL_DATETIME_FORMAT).to_string()),
            _ => None,
        }
    }
}

/// One named, typed column with all of its cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, verbatim from the CSV header.
    pub name: String,
    /// Inferred SQL type.
    pub ty: ColumnType,
    /// All cells of this column, in row order.
    pub values: Vec<Value>,
}

impl Column {
    /// Creates a column from a name, type, and cell values.
    pub fn new(name: impl Into<String>, ty: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            ty,
            values,
        }
    }
}

/// A foreign-key reference inferred from an identifier column name.
///
/// A column `district_id` in any table other than `district` yields
/// `ForeignKey { column: "district_id", referenced_table: "district" }`;
/// the referenced column always has the same full name as the local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Local column name (ends in `_id`).
    pub column: String,
    /// Referenced table name (column name with `_id` stripped).
    pub referenced_table: String,
}

/// One output table: a name plus its columns in header order.
///
/// The name is the source file's stem, verbatim. Every column holds the
/// same number of cells; [`Table::row_count`] reads the first column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name, derived from the source file's base name.
    pub name: String,
    /// Columns in CSV header order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Creates a table from a name and columns.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Number of rows (cells per column). Zero for a column-less table.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The primary-key column, if the table has one.
    ///
    /// By naming convention this is the column named exactly
    /// `"<table>_id"`. A table without such a column gets no declared
    /// primary key.
    pub fn primary_key(&self) -> Option<&Column> {
        let pk_name = format!("{}_id", self.name);
        self.column(&pk_name)
    }

    /// Foreign keys inferred from identifier columns, in header order.
    ///
    /// Every column ending in `_id` other than the table's own primary key
    /// references the table named after the column with the suffix
    /// stripped, at that table's column of the same full name. No check is
    /// made that the referenced table actually exists.
    pub fn foreign_keys(&self) -> Vec<ForeignKey> {
        let pk_name = format!("{}_id", self.name);
        self.columns
            .iter()
            .filter(|c| c.name != pk_name)
            .filter_map(|c| {
                c.name.strip_suffix("_id").map(|stem| ForeignKey {
                    column: c.name.clone(),
                    referenced_table: stem.to_string(),
                })
            })
            .collect()
    }
}
