//! The dashboard's canned charts.

use serde::Serialize;

use crate::schema::Dataset;

/// Plot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bars.
    Bar,
    /// Connected line.
    Line,
    /// Unconnected markers.
    Scatter,
    /// Pie slices.
    Pie,
    /// Counts per x value.
    Histogram,
}

/// A chart drawn from exactly one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    /// Graph element id on the page.
    pub id: &'static str,
    /// Figure title.
    pub title: &'static str,
    /// Source table.
    pub dataset: Dataset,
    /// Plot type.
    pub kind: ChartKind,
    /// X column (pie: label column).
    pub x: &'static str,
    /// Y columns (pie: the single value column; histogram: none).
    pub y: &'static [&'static str],
    /// Column splitting rows into one trace per distinct value.
    pub color: Option<&'static str>,
}

impl ChartSpec {
    /// Looks a chart up by graph id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Self> {
        CHARTS.iter().find(|c| c.id == id)
    }

    /// Every column the chart reads.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.x)
            .chain(self.y.iter().copied())
            .chain(self.color)
    }
}

/// Accounts receivable totals per business unit (dashboard overview).
pub const AR_BY_UNIT: ChartSpec = ChartSpec {
    id: "ar-by-unit-chart",
    title: "Accounts Receivable by Business Unit",
    dataset: Dataset::Receivables,
    kind: ChartKind::Bar,
    x: "business_unit_id",
    y: &["amount_due"],
    color: None,
};

/// Receivables per customer, coloured by status.
pub const RECEIVABLES: ChartSpec = ChartSpec {
    id: "receivables-chart",
    title: "Receivables by Customer",
    dataset: Dataset::Receivables,
    kind: ChartKind::Bar,
    x: "customer_name",
    y: &["amount_due"],
    color: Some("status"),
};

/// Payments over time.
pub const PAYMENTS: ChartSpec = ChartSpec {
    id: "payments-chart",
    title: "Payments Received",
    dataset: Dataset::Payments,
    kind: ChartKind::Line,
    x: "payment_date",
    y: &["amount_paid"],
    color: None,
};

/// Invoices over time, coloured by status.
pub const INVOICES: ChartSpec = ChartSpec {
    id: "invoices-chart",
    title: "Invoices Issued",
    dataset: Dataset::Invoices,
    kind: ChartKind::Bar,
    x: "invoice_date",
    y: &["amount"],
    color: Some("status"),
};

/// Pending payables per vendor.
pub const PENDING_PAYABLES: ChartSpec = ChartSpec {
    id: "pending-payables-chart",
    title: "Pending Payables by Vendor",
    dataset: Dataset::PendingPayables,
    kind: ChartKind::Bar,
    x: "vendor_name",
    y: &["amount_due"],
    color: None,
};

/// Case count per status.
pub const CASE_MANAGEMENT: ChartSpec = ChartSpec {
    id: "case-management-chart",
    title: "Cases by Status",
    dataset: Dataset::Cases,
    kind: ChartKind::Histogram,
    x: "status",
    y: &[],
    color: None,
};

/// Engagement score per interaction.
pub const CRM_MANAGEMENT: ChartSpec = ChartSpec {
    id: "crm-management-chart",
    title: "Customer Engagement",
    dataset: Dataset::CrmInteractions,
    kind: ChartKind::Scatter,
    x: "interaction_date",
    y: &["engagement_score"],
    color: Some("interaction_type"),
};

/// Weekly KPI values.
pub const REPORTS: ChartSpec = ChartSpec {
    id: "reports-chart",
    title: "Key Metrics",
    dataset: Dataset::Reports,
    kind: ChartKind::Bar,
    x: "date",
    y: &["value"],
    color: Some("metric"),
};

/// Expenses over time per category.
pub const EXPENSES: ChartSpec = ChartSpec {
    id: "expenses-chart",
    title: "Expenses Over Time",
    dataset: Dataset::Expenses,
    kind: ChartKind::Line,
    x: "expense_date",
    y: &["amount"],
    color: Some("category"),
};

/// Budgeted against actual spend.
pub const BUDGET: ChartSpec = ChartSpec {
    id: "budget-chart",
    title: "Budget vs Actual",
    dataset: Dataset::Budget,
    kind: ChartKind::Bar,
    x: "category",
    y: &["budgeted_amount", "actual_amount"],
    color: None,
};

/// Payables per vendor, coloured by status.
pub const PAYABLES: ChartSpec = ChartSpec {
    id: "payables-chart",
    title: "Payables by Vendor",
    dataset: Dataset::Payables,
    kind: ChartKind::Bar,
    x: "vendor_name",
    y: &["amount_due"],
    color: Some("status"),
};

/// Asset mix.
pub const ASSETS: ChartSpec = ChartSpec {
    id: "assets-chart",
    title: "Assets by Type",
    dataset: Dataset::Assets,
    kind: ChartKind::Pie,
    x: "asset_type",
    y: &["value"],
    color: None,
};

/// Liability mix.
pub const LIABILITIES: ChartSpec = ChartSpec {
    id: "liabilities-chart",
    title: "Liabilities by Type",
    dataset: Dataset::Liabilities,
    kind: ChartKind::Pie,
    x: "liability_type",
    y: &["amount"],
    color: None,
};

/// Revenue over time per source.
pub const REVENUE: ChartSpec = ChartSpec {
    id: "revenue-chart",
    title: "Revenue Over Time",
    dataset: Dataset::Revenue,
    kind: ChartKind::Line,
    x: "revenue_date",
    y: &["amount"],
    color: Some("source"),
};

/// Equity components.
pub const EQUITY: ChartSpec = ChartSpec {
    id: "equity-chart",
    title: "Equity Components",
    dataset: Dataset::Equity,
    kind: ChartKind::Bar,
    x: "equity_type",
    y: &["amount"],
    color: None,
};

/// Inflows and outflows over time.
pub const CASH_FLOW: ChartSpec = ChartSpec {
    id: "cashflow-chart",
    title: "Cash Flow",
    dataset: Dataset::CashFlow,
    kind: ChartKind::Line,
    x: "transaction_date",
    y: &["amount"],
    color: Some("flow_type"),
};

/// Net worth over time.
pub const NET_WORTH: ChartSpec = ChartSpec {
    id: "networth-chart",
    title: "Net Worth",
    dataset: Dataset::NetWorth,
    kind: ChartKind::Line,
    x: "record_date",
    y: &["net_worth"],
    color: None,
};

/// All charts.
pub static CHARTS: [ChartSpec; 17] = [
    AR_BY_UNIT,
    RECEIVABLES,
    PAYMENTS,
    INVOICES,
    PENDING_PAYABLES,
    CASE_MANAGEMENT,
    CRM_MANAGEMENT,
    REPORTS,
    EXPENSES,
    BUDGET,
    PAYABLES,
    ASSETS,
    LIABILITIES,
    REVENUE,
    EQUITY,
    CASH_FLOW,
    NET_WORTH,
];
