//! Declared shapes of the dashboard's datasets.
//!
//! Fourteen ledgers are read verbatim from the database; three more are
//! synthesized at startup. Each dataset has a fixed table name, the columns
//! the dashboard relies on, and the columns coerced to dates after load.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::table::{Cell, Table, TableError};

/// Every table the dashboard holds in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// `businessunits`
    BusinessUnits,
    /// `accountsreceivable`
    Receivables,
    /// `payments_ledger`
    Payments,
    /// `invoices_ledger`
    Invoices,
    /// `expenses_ledger`
    Expenses,
    /// `budget_ledger`
    Budget,
    /// `payables_ledger`
    Payables,
    /// `assets_ledger`
    Assets,
    /// `liabilities_ledger`
    Liabilities,
    /// `revenue_ledger`
    Revenue,
    /// `equity_ledger`
    Equity,
    /// `cashflow_ledger`
    CashFlow,
    /// `networth_ledger`
    NetWorth,
    /// `pending_payables_ledger`
    PendingPayables,
    /// Synthetic case management table.
    Cases,
    /// Synthetic CRM interaction table.
    CrmInteractions,
    /// Synthetic KPI report table.
    Reports,
}

/// Column layout a dataset is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name.
    pub table: &'static str,
    /// Columns the dashboard reads, in source order.
    pub columns: &'static [&'static str],
    /// Columns converted to dates after load.
    pub date_columns: &'static [&'static str],
}

impl Dataset {
    /// Ledgers loaded from the database, in load order.
    pub const LEDGERS: [Self; 14] = [
        Self::BusinessUnits,
        Self::Receivables,
        Self::Payments,
        Self::Invoices,
        Self::Expenses,
        Self::Budget,
        Self::Payables,
        Self::Assets,
        Self::Liabilities,
        Self::Revenue,
        Self::Equity,
        Self::CashFlow,
        Self::NetWorth,
        Self::PendingPayables,
    ];

    /// Tables generated at startup.
    pub const SYNTHETIC: [Self; 3] = [Self::Cases, Self::CrmInteractions, Self::Reports];

    /// Source table name.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        self.schema().table
    }

    /// Returns true for generated tables.
    #[must_use]
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Self::Cases | Self::CrmInteractions | Self::Reports)
    }

    /// Declared schema.
    #[must_use]
    pub const fn schema(self) -> &'static TableSchema {
        match self {
            Self::BusinessUnits => &BUSINESS_UNITS,
            Self::Receivables => &RECEIVABLES,
            Self::Payments => &PAYMENTS,
            Self::Invoices => &INVOICES,
            Self::Expenses => &EXPENSES,
            Self::Budget => &BUDGET,
            Self::Payables => &PAYABLES,
            Self::Assets => &ASSETS,
            Self::Liabilities => &LIABILITIES,
            Self::Revenue => &REVENUE,
            Self::Equity => &EQUITY,
            Self::CashFlow => &CASH_FLOW,
            Self::NetWorth => &NET_WORTH,
            Self::PendingPayables => &PENDING_PAYABLES,
            Self::Cases => &CASES,
            Self::CrmInteractions => &CRM_INTERACTIONS,
            Self::Reports => &REPORTS,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

const BUSINESS_UNITS: TableSchema = TableSchema {
    table: "businessunits",
    columns: &["business_unit_id", "business_unit_name"],
    date_columns: &[],
};

const RECEIVABLES: TableSchema = TableSchema {
    table: "accountsreceivable",
    columns: &[
        "invoice_id",
        "business_unit_id",
        "customer_name",
        "amount_due",
        "due_date",
        "status",
    ],
    date_columns: &[],
};

const PAYMENTS: TableSchema = TableSchema {
    table: "payments_ledger",
    columns: &[
        "payment_id",
        "invoice_id",
        "payment_date",
        "amount_paid",
        "payment_method",
    ],
    date_columns: &[],
};

const INVOICES: TableSchema = TableSchema {
    table: "invoices_ledger",
    columns: &["invoice_id", "customer_name", "invoice_date", "amount", "status"],
    date_columns: &[],
};

const EXPENSES: TableSchema = TableSchema {
    table: "expenses_ledger",
    columns: &["expense_id", "expense_date", "category", "amount"],
    date_columns: &["expense_date"],
};

const BUDGET: TableSchema = TableSchema {
    table: "budget_ledger",
    columns: &["budget_id", "category", "budgeted_amount", "actual_amount"],
    date_columns: &[],
};

const PAYABLES: TableSchema = TableSchema {
    table: "payables_ledger",
    columns: &["payable_id", "vendor_name", "due_date", "amount_due", "status"],
    date_columns: &[],
};

const ASSETS: TableSchema = TableSchema {
    table: "assets_ledger",
    columns: &["asset_id", "asset_type", "value", "acquisition_date"],
    date_columns: &[],
};

const LIABILITIES: TableSchema = TableSchema {
    table: "liabilities_ledger",
    columns: &["liability_id", "liability_type", "amount", "due_date"],
    date_columns: &[],
};

const REVENUE: TableSchema = TableSchema {
    table: "revenue_ledger",
    columns: &["revenue_id", "revenue_date", "source", "amount"],
    date_columns: &[],
};

const EQUITY: TableSchema = TableSchema {
    table: "equity_ledger",
    columns: &["equity_id", "equity_type", "amount", "recorded_date"],
    date_columns: &[],
};

const CASH_FLOW: TableSchema = TableSchema {
    table: "cashflow_ledger",
    columns: &["transaction_id", "transaction_date", "flow_type", "amount"],
    date_columns: &["transaction_date"],
};

const NET_WORTH: TableSchema = TableSchema {
    table: "networth_ledger",
    columns: &["record_id", "record_date", "net_worth"],
    date_columns: &[],
};

const PENDING_PAYABLES: TableSchema = TableSchema {
    table: "pending_payables_ledger",
    columns: &["payable_id", "vendor_name", "amount_due", "due_date"],
    date_columns: &[],
};

const CASES: TableSchema = TableSchema {
    table: "cases",
    columns: &[
        "case_id",
        "case_name",
        "status",
        "assigned_user",
        "date_opened",
        "date_closed",
    ],
    date_columns: &["date_opened", "date_closed"],
};

const CRM_INTERACTIONS: TableSchema = TableSchema {
    table: "crm_interactions",
    columns: &[
        "customer_id",
        "customer_name",
        "interaction_type",
        "interaction_date",
        "engagement_score",
    ],
    date_columns: &["interaction_date"],
};

const REPORTS: TableSchema = TableSchema {
    table: "reports",
    columns: &["report_id", "metric", "value", "date"],
    date_columns: &["date"],
};

/// A table that does not have its declared shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Declared columns absent from the loaded table.
    #[error("{table} is missing columns: {}", columns.join(", "))]
    MissingColumns {
        /// Table name.
        table: &'static str,
        /// Missing column names.
        columns: Vec<String>,
    },

    /// A declared date column holding something other than a date.
    #[error("{table}.{column} row {row} is not a date")]
    NotADate {
        /// Table name.
        table: &'static str,
        /// Column name.
        column: &'static str,
        /// Zero-based row index.
        row: usize,
    },
}

impl TableSchema {
    /// Applies the post-load transformation: date coercion of `date_columns`.
    ///
    /// Columns the table does not have are skipped; [`TableSchema::check`]
    /// reports them.
    ///
    /// # Errors
    ///
    /// Returns `TableError::UnparsableDate` if a value cannot be read as a date.
    pub fn conform(&self, table: &mut Table) -> Result<(), TableError> {
        for column in self.date_columns {
            if table.column_index(column).is_some() {
                table.coerce_dates(column)?;
            }
        }
        Ok(())
    }

    /// Verifies that every declared column exists and date columns hold dates.
    ///
    /// Extra columns are allowed: ledgers are loaded with `SELECT *`.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch found.
    pub fn check(&self, table: &Table) -> Result<(), SchemaError> {
        let missing: Vec<String> = self
            .columns
            .iter()
            .filter(|c| table.column_index(c).is_none())
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns {
                table: self.table,
                columns: missing,
            });
        }

        for column in self.date_columns {
            let Some(idx) = table.column_index(column) else {
                continue;
            };
            if let Some(row) = table
                .rows()
                .iter()
                .position(|cells| {
                    !matches!(cells[idx], Cell::Null | Cell::Date(_) | Cell::DateTime(_))
                })
            {
                return Err(SchemaError::NotADate {
                    table: self.table,
                    column: *column,
                    row,
                });
            }
        }
        Ok(())
    }
}
