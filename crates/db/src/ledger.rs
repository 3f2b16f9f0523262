//! Ledger repository: reads and writes the dashboard's tables as-is.
//!
//! Column order comes from the catalog, rows come back as JSON objects so
//! any column type round-trips without a per-table entity.

use palm_core::schema::Dataset;
use palm_core::table::{Table, TableError};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement,
};
use serde_json::Value;
use tracing::{debug, info};

/// Errors while loading or seeding ledgers.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The table does not exist or has no columns.
    #[error("Table not found: {0}")]
    MissingTable(&'static str),

    /// Rows could not be turned into a table, or a date column did not parse.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, FromQueryResult)]
struct ColumnRow {
    column_name: String,
}

#[derive(Debug, FromQueryResult)]
struct JsonRow {
    row: Value,
}

const COLUMNS_SQL: &str = r"
SELECT column_name::text AS column_name
FROM information_schema.columns
WHERE table_schema = current_schema() AND table_name = $1
ORDER BY ordinal_position
";

/// Ledger repository.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Column names of a table in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn columns(&self, table: &str) -> Result<Vec<String>, DbErr> {
        let rows = ColumnRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            COLUMNS_SQL,
            [table.into()],
        ))
        .all(&self.db)
        .await?;
        Ok(rows.into_iter().map(|r| r.column_name).collect())
    }

    /// Loads every row of one dataset's table and applies its date coercion.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingTable` if the table does not exist, or an
    /// error if the query fails or a date column does not parse.
    pub async fn load(&self, dataset: Dataset) -> Result<Table, LoadError> {
        let name = dataset.table_name();
        let columns = self.columns(name).await?;
        if columns.is_empty() {
            return Err(LoadError::MissingTable(name));
        }

        let rows = JsonRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            format!("SELECT row_to_json(t) AS row FROM \"{name}\" t"),
        ))
        .all(&self.db)
        .await?;

        let records = rows.into_iter().map(|r| r.row).collect();
        let mut table = Table::from_records(name, columns, records)?;
        dataset.schema().conform(&mut table)?;
        debug!(table = name, rows = table.len(), "Ledger loaded");
        Ok(table)
    }

    /// Loads all fourteen ledgers.
    ///
    /// # Errors
    ///
    /// Fails on the first ledger that cannot be loaded.
    pub async fn load_ledgers(&self) -> Result<Vec<(Dataset, Table)>, LoadError> {
        let mut tables = Vec::with_capacity(Dataset::LEDGERS.len());
        for dataset in Dataset::LEDGERS {
            tables.push((dataset, self.load(dataset).await?));
        }
        info!(tables = tables.len(), "Ledgers loaded");
        Ok(tables)
    }

    /// Number of rows currently in a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self, dataset: Dataset) -> Result<i64, DbErr> {
        #[derive(FromQueryResult)]
        struct CountRow {
            count: i64,
        }

        let row = CountRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            format!("SELECT count(*) AS count FROM \"{}\"", dataset.table_name()),
        ))
        .one(&self.db)
        .await?;
        Ok(row.map_or(0, |r| r.count))
    }

    /// Inserts every row of a table into the dataset's table.
    ///
    /// Each record is cast to the target row type by the database, so text
    /// dates and JSON numbers land in their declared column types.
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails.
    pub async fn insert(&self, dataset: Dataset, table: &Table) -> Result<u64, DbErr> {
        let name = dataset.table_name();
        let sql = format!(
            "INSERT INTO \"{name}\" SELECT * FROM jsonb_populate_record(NULL::\"{name}\", $1)"
        );

        let mut inserted = 0;
        for row in 0..table.len() {
            let Some(record) = table.record(row) else {
                continue;
            };
            let result = self
                .db
                .execute(Statement::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    &sql,
                    [Value::Object(record).into()],
                ))
                .await?;
            inserted += result.rows_affected();
        }
        debug!(table = name, rows = inserted, "Ledger seeded");
        Ok(inserted)
    }
}
