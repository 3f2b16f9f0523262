//! The application's read-only table set.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::schema::{Dataset, SchemaError};
use crate::synthetic::SyntheticTables;
use crate::table::{Table, TableError};

/// Errors raised while assembling the table set.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A dataset with no table.
    #[error("No table loaded for {0}")]
    Missing(Dataset),

    /// A table could not be built.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// All seventeen tables, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct LedgerSet {
    tables: HashMap<Dataset, Table>,
}

impl LedgerSet {
    /// Assembles the set from loaded ledgers and generated tables.
    ///
    /// Schema mismatches are logged, not fatal: the affected charts report
    /// the missing column when they are requested.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Missing` if any ledger was not supplied.
    pub fn new(
        ledgers: impl IntoIterator<Item = (Dataset, Table)>,
        synthetic: SyntheticTables,
    ) -> Result<Self, StoreError> {
        let tables: HashMap<Dataset, Table> = ledgers
            .into_iter()
            .chain(synthetic.into_datasets())
            .collect();

        for dataset in Dataset::LEDGERS.iter().chain(Dataset::SYNTHETIC.iter()) {
            let table = tables.get(dataset).ok_or(StoreError::Missing(*dataset))?;
            if let Err(e) = dataset.schema().check(table) {
                warn!(table = %dataset, error = %e, "Table does not match its declared schema");
            }
        }

        Ok(Self { tables })
    }

    /// The table behind a dataset.
    #[must_use]
    pub fn get(&self, dataset: Dataset) -> Option<&Table> {
        self.tables.get(&dataset)
    }

    /// Schema check results for every table.
    #[must_use]
    pub fn schema_report(&self) -> Vec<(Dataset, Result<(), SchemaError>)> {
        let mut report: Vec<_> = self
            .tables
            .iter()
            .map(|(dataset, table)| (*dataset, dataset.schema().check(table)))
            .collect();
        report.sort_by_key(|(dataset, _)| *dataset);
        report
    }

    /// Row counts per table, in dataset order.
    #[must_use]
    pub fn row_counts(&self) -> Vec<(Dataset, usize)> {
        let mut counts: Vec<_> = self
            .tables
            .iter()
            .map(|(dataset, table)| (*dataset, table.len()))
            .collect();
        counts.sort_by_key(|(dataset, _)| *dataset);
        counts
    }
}
