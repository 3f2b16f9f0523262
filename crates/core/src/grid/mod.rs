//! Receivables grid: server-side sort and filter.
//!
//! The grid never changes the underlying table; a query yields the row
//! indices to show, in display order.

pub mod error;
pub mod filter;

pub use error::GridError;
pub use filter::{Condition, Filter, FilterOp};

use std::cmp::Ordering;

use serde::Deserialize;

use crate::table::Table;

/// Sort and filter settings sent by the grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridQuery {
    /// Column to sort by.
    pub sort_by: Option<String>,
    /// Sort descending instead of ascending.
    #[serde(default)]
    pub descending: bool,
    /// Filter query, e.g. `{status} = Open && {amount_due} > 100`.
    pub filter: Option<String>,
}

impl GridQuery {
    /// Row indices matching the filter, in sort order.
    ///
    /// Sorting is stable and nulls always come last.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidFilter` for an unparsable filter and
    /// `GridError::UnknownColumn` for a column the table lacks.
    pub fn apply(&self, table: &Table) -> Result<Vec<usize>, GridError> {
        let filter: Filter = match self.filter.as_deref() {
            Some(query) => query.parse()?,
            None => Filter::default(),
        };

        let bound: Vec<(usize, &Condition)> = filter
            .conditions
            .iter()
            .map(|c| Ok((column_index(table, &c.column)?, c)))
            .collect::<Result<_, GridError>>()?;

        let mut rows: Vec<usize> = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, cells)| bound.iter().all(|(idx, c)| c.matches(&cells[*idx])))
            .map(|(row, _)| row)
            .collect();

        if let Some(column) = self.sort_by.as_deref() {
            let idx = column_index(table, column)?;
            let cells = table.rows();
            rows.sort_by(|&a, &b| {
                let (a, b) = (&cells[a][idx], &cells[b][idx]);
                match (a.is_null(), b.is_null()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) if self.descending => b.compare(a),
                    (false, false) => a.compare(b),
                }
            });
        }

        Ok(rows)
    }
}

fn column_index(table: &Table, column: &str) -> Result<usize, GridError> {
    table
        .column_index(column)
        .ok_or_else(|| GridError::UnknownColumn(column.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use crate::schema::Dataset;
    use proptest::prelude::*;

    fn query(sort_by: Option<&str>, descending: bool, filter: Option<&str>) -> GridQuery {
        GridQuery {
            sort_by: sort_by.map(ToString::to_string),
            descending,
            filter: filter.map(ToString::to_string),
        }
    }

    #[test]
    fn test_no_query_keeps_table_order() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        assert_eq!(GridQuery::default().apply(&table).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_ascending_puts_nulls_last() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        let rows = query(Some("amount_due"), false, None).apply(&table).unwrap();
        assert_eq!(rows, vec![1, 0, 2]);
    }

    #[test]
    fn test_sort_descending_puts_nulls_last() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        let rows = query(Some("amount_due"), true, None).apply(&table).unwrap();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_by_date() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        let rows = query(Some("due_date"), false, None).apply(&table).unwrap();
        assert_eq!(rows, vec![1, 0, 2]);
    }

    #[test]
    fn test_filter_then_sort() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        let rows = query(Some("due_date"), true, Some("{status} = Open"))
            .apply(&table)
            .unwrap();
        assert_eq!(rows, vec![2, 0]);
    }

    #[test]
    fn test_unknown_columns() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        assert_eq!(
            query(Some("balance"), false, None).apply(&table),
            Err(GridError::UnknownColumn("balance".into()))
        );
        assert_eq!(
            query(None, false, Some("{balance} > 1")).apply(&table),
            Err(GridError::UnknownColumn("balance".into()))
        );
    }

    proptest! {
        #[test]
        fn test_query_never_changes_the_table(
            column in prop::sample::select(vec![
                "invoice_id",
                "customer_name",
                "amount_due",
                "due_date",
                "status",
            ]),
            descending in any::<bool>(),
            threshold in 0i64..2000,
        ) {
            let table = sample::ledger(Dataset::Receivables).unwrap();
            let before = table.clone();
            let filter = format!("{{amount_due}} >= {threshold}");

            let rows = query(Some(column), descending, Some(&filter)).apply(&table).unwrap();

            prop_assert_eq!(&table, &before);
            prop_assert!(rows.len() <= table.len());
            let mut sorted = rows.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), rows.len());
        }
    }
}
