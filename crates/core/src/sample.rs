//! Sample ledger rows.
//!
//! Used by the seeder binary to populate a development database and by tests
//! that need a complete table set without one.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::schema::Dataset;
use crate::store::{LedgerSet, StoreError};
use crate::synthetic::SyntheticTables;
use crate::table::{Cell, Table, TableError};

fn date(y: i32, m: u32, d: u32) -> Cell {
    NaiveDate::from_ymd_opt(y, m, d).map_or(Cell::Null, Cell::Date)
}

fn money(units: i64, cents: u32) -> Cell {
    Cell::Decimal(Decimal::new(units * 100 + i64::from(cents), 2))
}

fn int(i: i64) -> Cell {
    Cell::Integer(i)
}

fn text(s: &str) -> Cell {
    Cell::from(s)
}

fn table(dataset: Dataset, rows: Vec<Vec<Cell>>) -> Result<Table, TableError> {
    let columns = dataset
        .schema()
        .columns
        .iter()
        .map(ToString::to_string)
        .collect();
    Table::from_rows(dataset.table_name(), columns, rows)
}

/// Sample rows for one ledger, shaped like its declared schema.
///
/// # Errors
///
/// Returns `TableError::RowArity` if a sample row does not fit the schema.
pub fn ledger(dataset: Dataset) -> Result<Table, TableError> {
    let rows = match dataset {
        Dataset::BusinessUnits => vec![
            vec![int(1), text("North America")],
            vec![int(2), text("EMEA")],
        ],
        Dataset::Receivables => vec![
            vec![
                int(101),
                int(1),
                text("Acme Corp"),
                money(1200, 50),
                date(2024, 3, 1),
                text("Open"),
            ],
            vec![
                int(102),
                int(2),
                text("Globex"),
                money(300, 0),
                date(2024, 2, 15),
                text("Overdue"),
            ],
            vec![
                int(103),
                int(1),
                text("Initech, Inc."),
                Cell::Null,
                date(2024, 4, 10),
                text("Open"),
            ],
        ],
        Dataset::Payments => vec![
            vec![int(1), int(101), date(2024, 3, 5), money(600, 0), text("Wire")],
            vec![int(2), int(102), date(2024, 3, 9), money(300, 0), text("Card")],
        ],
        Dataset::Invoices => vec![
            vec![int(101), text("Acme Corp"), date(2024, 2, 1), money(1200, 50), text("Open")],
            vec![int(102), text("Globex"), date(2024, 1, 15), money(300, 0), text("Paid")],
        ],
        Dataset::Expenses => vec![
            vec![int(1), date(2024, 1, 10), text("Travel"), money(420, 0)],
            vec![int(2), date(2024, 1, 12), text("Software"), money(99, 99)],
        ],
        Dataset::Budget => vec![
            vec![int(1), text("Travel"), money(1000, 0), money(800, 0)],
            vec![int(2), text("Payroll"), money(9000, 0), money(9100, 0)],
        ],
        Dataset::Payables => vec![
            vec![int(1), text("Initech"), date(2024, 3, 30), money(750, 0), text("Scheduled")],
            vec![int(2), text("Umbrella"), date(2024, 4, 15), money(120, 25), text("Open")],
        ],
        Dataset::Assets => vec![
            vec![int(1), text("Cash"), money(5000, 0), date(2020, 1, 1)],
            vec![int(2), text("Equipment"), money(2500, 0), date(2021, 6, 1)],
        ],
        Dataset::Liabilities => vec![
            vec![int(1), text("Loan"), money(4000, 0), date(2026, 1, 1)],
            vec![int(2), text("Credit Line"), money(800, 0), date(2024, 12, 31)],
        ],
        Dataset::Revenue => vec![
            vec![int(1), date(2024, 1, 31), text("Subscriptions"), money(15000, 0)],
            vec![int(2), date(2024, 2, 29), text("Services"), money(4200, 0)],
        ],
        Dataset::Equity => vec![
            vec![int(1), text("Common Stock"), money(10000, 0), date(2019, 5, 1)],
            vec![int(2), text("Retained Earnings"), money(3500, 0), date(2023, 12, 31)],
        ],
        Dataset::CashFlow => vec![
            vec![int(1), date(2024, 1, 1), text("inflow"), money(500, 0)],
            vec![int(2), date(2024, 1, 2), text("outflow"), money(200, 0)],
            vec![int(3), date(2024, 1, 3), text("inflow"), money(50, 0)],
        ],
        Dataset::NetWorth => vec![
            vec![int(1), date(2024, 1, 31), money(12500, 0)],
            vec![int(2), date(2024, 2, 29), money(13100, 0)],
        ],
        Dataset::PendingPayables => vec![
            vec![int(1), text("Initech"), money(750, 0), date(2024, 3, 30)],
        ],
        Dataset::Cases | Dataset::CrmInteractions | Dataset::Reports => Vec::new(),
    };
    table(dataset, rows)
}

/// Sample rows for every ledger.
///
/// # Errors
///
/// Fails on the first sample that does not fit its schema.
pub fn ledgers() -> Result<Vec<(Dataset, Table)>, TableError> {
    Dataset::LEDGERS
        .iter()
        .map(|dataset| Ok((*dataset, ledger(*dataset)?)))
        .collect()
}

/// A complete table set built from the samples and seeded synthetic tables.
///
/// # Errors
///
/// Returns `StoreError::Table` if a sample or generated row is malformed.
pub fn ledger_set(seed: u64) -> Result<LedgerSet, StoreError> {
    LedgerSet::new(ledgers()?, SyntheticTables::generate(Some(seed))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_conforms() {
        for (dataset, table) in ledgers().unwrap() {
            assert!(!table.is_empty(), "{dataset} has no sample rows");
            assert_eq!(dataset.schema().check(&table), Ok(()), "{dataset}");
        }
    }
}
