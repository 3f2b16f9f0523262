//! In-memory tables.
//!
//! A [`Table`] is a homogeneous, row-major row-set with a fixed header. Tables
//! are built once (from the database or the synthetic generators) and only
//! read afterwards; the one in-place operation is date coercion, applied
//! before a table is shared.

pub mod cell;
pub mod error;

pub use cell::Cell;
pub use error::TableError;

use serde_json::{Map, Value};

/// A named row-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given header.
    #[must_use]
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from positional rows.
    ///
    /// # Errors
    ///
    /// Returns `TableError::RowArity` if a row is wider or narrower than the header.
    pub fn from_rows(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(TableError::RowArity {
                table: name,
                row,
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    /// Builds a table from JSON records keyed by column name.
    ///
    /// The header is taken as given; keys missing from a record become
    /// `Cell::Null` and keys outside the header are ignored.
    ///
    /// # Errors
    ///
    /// Returns `TableError::NotARecord` if an element is not a JSON object.
    pub fn from_records(
        name: impl Into<String>,
        columns: Vec<String>,
        records: Vec<Value>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        let mut rows = Vec::with_capacity(records.len());
        for (row, record) in records.into_iter().enumerate() {
            let Value::Object(mut fields) = record else {
                return Err(TableError::NotARecord { table: name, row });
            };
            rows.push(
                columns
                    .iter()
                    .map(|column| fields.remove(column).map_or(Cell::Null, Cell::from_json))
                    .collect(),
            );
        }
        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    /// Table name (the source table for ledgers).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in source order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header.
    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Position of a column, or an error naming the table.
    ///
    /// # Errors
    ///
    /// Returns `TableError::UnknownColumn` if the column is absent.
    pub fn require_column(&self, column: &str) -> Result<usize, TableError> {
        self.column_index(column)
            .ok_or_else(|| TableError::UnknownColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Iterates over one column's cells.
    ///
    /// # Errors
    ///
    /// Returns `TableError::UnknownColumn` if the column is absent.
    pub fn column(&self, column: &str) -> Result<impl Iterator<Item = &Cell>, TableError> {
        let idx = self.require_column(column)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Converts a textual date column to date cells in place.
    ///
    /// # Errors
    ///
    /// Returns `TableError::UnknownColumn` for a missing column and
    /// `TableError::UnparsableDate` for the first value that is not a date;
    /// the table is left untouched in both cases.
    pub fn coerce_dates(&mut self, column: &str) -> Result<(), TableError> {
        let idx = self.require_column(column)?;
        let mut coerced = Vec::with_capacity(self.rows.len());
        for (row, cells) in self.rows.iter().enumerate() {
            let cell = &cells[idx];
            let Some(date) = cell.to_date() else {
                return Err(TableError::UnparsableDate {
                    table: self.name.clone(),
                    column: column.to_string(),
                    row,
                    value: cell.to_string(),
                });
            };
            coerced.push(date);
        }
        for (cells, date) in self.rows.iter_mut().zip(coerced) {
            cells[idx] = date;
        }
        Ok(())
    }

    /// One row as a JSON object keyed by column name.
    #[must_use]
    pub fn record(&self, row: usize) -> Option<Map<String, Value>> {
        self.rows.get(row).map(|cells| {
            self.columns
                .iter()
                .zip(cells)
                .map(|(column, cell)| (column.clone(), cell.to_json()))
                .collect()
        })
    }

    /// Selected rows as JSON objects, in the given order.
    #[must_use]
    pub fn records(&self, rows: &[usize]) -> Vec<Map<String, Value>> {
        rows.iter().filter_map(|&row| self.record(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_from_records_follows_header_order() {
        let table = Table::from_records(
            "expenses_ledger",
            columns(&["expense_id", "expense_date", "amount"]),
            vec![
                json!({"amount": 12.5, "expense_id": 1, "expense_date": "2024-01-05"}),
                json!({"expense_id": 2, "expense_date": "2024-01-06"}),
            ],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], Cell::Integer(1));
        assert_eq!(table.rows()[1][2], Cell::Null);
    }

    #[test]
    fn test_from_records_rejects_non_objects() {
        let err = Table::from_records("t", columns(&["a"]), vec![json!([1, 2])]).unwrap_err();
        assert_eq!(
            err,
            TableError::NotARecord {
                table: "t".into(),
                row: 0
            }
        );
    }

    #[test]
    fn test_from_rows_checks_arity() {
        let err = Table::from_rows("t", columns(&["a", "b"]), vec![vec![Cell::Integer(1)]])
            .unwrap_err();
        assert!(matches!(err, TableError::RowArity { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_coerce_dates() {
        let mut table = Table::from_rows(
            "cashflow_ledger",
            columns(&["transaction_id", "transaction_date"]),
            vec![
                vec![Cell::Integer(1), Cell::from("2024-02-01")],
                vec![Cell::Integer(2), Cell::Null],
            ],
        )
        .unwrap();

        table.coerce_dates("transaction_date").unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(table.rows()[0][1], Cell::Date(expected));
        assert_eq!(table.rows()[1][1], Cell::Null);
    }

    #[test]
    fn test_coerce_dates_failure_leaves_table_untouched() {
        let mut table = Table::from_rows(
            "cashflow_ledger",
            columns(&["transaction_date"]),
            vec![vec![Cell::from("2024-02-01")], vec![Cell::from("soon")]],
        )
        .unwrap();
        let before = table.clone();

        let err = table.coerce_dates("transaction_date").unwrap_err();

        assert!(matches!(err, TableError::UnparsableDate { row: 1, .. }));
        assert_eq!(table, before);
    }

    #[test]
    fn test_unknown_column() {
        let table = Table::new("t", columns(&["a"]));
        assert!(table.column("b").is_err());
        assert_eq!(table.column_index("a"), Some(0));
    }

    #[test]
    fn test_records() {
        let table = Table::from_rows(
            "t",
            columns(&["id", "name"]),
            vec![
                vec![Cell::Integer(1), Cell::from("x")],
                vec![Cell::Integer(2), Cell::from("y")],
            ],
        )
        .unwrap();

        let records = table.records(&[1, 0, 7]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], json!("y"));
    }
}
