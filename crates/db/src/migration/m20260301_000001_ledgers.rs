//! Ledger tables read by the dashboard.
//!
//! The application only reads these; the migration exists so a development
//! database can be stood up and seeded.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(LEDGERS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const LEDGERS_SQL: &str = r"
CREATE TABLE businessunits (
    business_unit_id INTEGER PRIMARY KEY,
    business_unit_name VARCHAR(255) NOT NULL
);

CREATE TABLE accountsreceivable (
    invoice_id INTEGER PRIMARY KEY,
    business_unit_id INTEGER REFERENCES businessunits(business_unit_id),
    customer_name VARCHAR(255) NOT NULL,
    amount_due NUMERIC(19, 4),
    due_date DATE,
    status VARCHAR(50)
);

CREATE INDEX idx_accountsreceivable_status ON accountsreceivable(status);

CREATE TABLE payments_ledger (
    payment_id INTEGER PRIMARY KEY,
    invoice_id INTEGER,
    payment_date DATE,
    amount_paid NUMERIC(19, 4),
    payment_method VARCHAR(50)
);

CREATE TABLE invoices_ledger (
    invoice_id INTEGER PRIMARY KEY,
    customer_name VARCHAR(255),
    invoice_date DATE,
    amount NUMERIC(19, 4),
    status VARCHAR(50)
);

CREATE TABLE expenses_ledger (
    expense_id INTEGER PRIMARY KEY,
    expense_date DATE,
    category VARCHAR(100),
    amount NUMERIC(19, 4)
);

CREATE TABLE budget_ledger (
    budget_id INTEGER PRIMARY KEY,
    category VARCHAR(100),
    budgeted_amount NUMERIC(19, 4),
    actual_amount NUMERIC(19, 4)
);

CREATE TABLE payables_ledger (
    payable_id INTEGER PRIMARY KEY,
    vendor_name VARCHAR(255),
    due_date DATE,
    amount_due NUMERIC(19, 4),
    status VARCHAR(50)
);

CREATE TABLE assets_ledger (
    asset_id INTEGER PRIMARY KEY,
    asset_type VARCHAR(100),
    value NUMERIC(19, 4),
    acquisition_date DATE
);

CREATE TABLE liabilities_ledger (
    liability_id INTEGER PRIMARY KEY,
    liability_type VARCHAR(100),
    amount NUMERIC(19, 4),
    due_date DATE
);

CREATE TABLE revenue_ledger (
    revenue_id INTEGER PRIMARY KEY,
    revenue_date DATE,
    source VARCHAR(100),
    amount NUMERIC(19, 4)
);

CREATE TABLE equity_ledger (
    equity_id INTEGER PRIMARY KEY,
    equity_type VARCHAR(100),
    amount NUMERIC(19, 4),
    recorded_date DATE
);

CREATE TABLE cashflow_ledger (
    transaction_id INTEGER PRIMARY KEY,
    transaction_date DATE,
    flow_type VARCHAR(20),
    amount NUMERIC(19, 4)
);

CREATE TABLE networth_ledger (
    record_id INTEGER PRIMARY KEY,
    record_date DATE,
    net_worth NUMERIC(19, 4)
);

CREATE TABLE pending_payables_ledger (
    payable_id INTEGER PRIMARY KEY,
    vendor_name VARCHAR(255),
    amount_due NUMERIC(19, 4),
    due_date DATE
);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS pending_payables_ledger CASCADE;
DROP TABLE IF EXISTS networth_ledger CASCADE;
DROP TABLE IF EXISTS cashflow_ledger CASCADE;
DROP TABLE IF EXISTS equity_ledger CASCADE;
DROP TABLE IF EXISTS revenue_ledger CASCADE;
DROP TABLE IF EXISTS liabilities_ledger CASCADE;
DROP TABLE IF EXISTS assets_ledger CASCADE;
DROP TABLE IF EXISTS payables_ledger CASCADE;
DROP TABLE IF EXISTS budget_ledger CASCADE;
DROP TABLE IF EXISTS expenses_ledger CASCADE;
DROP TABLE IF EXISTS invoices_ledger CASCADE;
DROP TABLE IF EXISTS payments_ledger CASCADE;
DROP TABLE IF EXISTS accountsreceivable CASCADE;
DROP TABLE IF EXISTS businessunits CASCADE;
";
