//! Tab identifiers and tab content dispatch.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::LayoutError;
use crate::chart::ChartSpec;
use crate::chart::catalogue;

/// Top-level tabs, identified on the page by fixed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Overview.
    #[default]
    Dashboard,
    /// Accounts receivable, with its own sub-tabs.
    AccountsReceivable,
    /// Case management.
    Cases,
    /// CRM management.
    Crm,
    /// KPI reports.
    Reports,
    /// Credentials form.
    Settings,
    /// Expenses.
    Expenses,
    /// Budget.
    Budget,
    /// Payables.
    Payables,
    /// Assets.
    Assets,
    /// Liabilities.
    Liabilities,
    /// Revenue.
    Revenue,
    /// Equity.
    Equity,
    /// Cash flow.
    CashFlow,
    /// Net worth.
    NetWorth,
}

impl Tab {
    /// Tabs in page order.
    pub const ALL: [Self; 15] = [
        Self::Dashboard,
        Self::AccountsReceivable,
        Self::Cases,
        Self::Crm,
        Self::Reports,
        Self::Settings,
        Self::Expenses,
        Self::Budget,
        Self::Payables,
        Self::Assets,
        Self::Liabilities,
        Self::Revenue,
        Self::Equity,
        Self::CashFlow,
        Self::NetWorth,
    ];

    /// Element id / callback value.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "tab-dashboard",
            Self::AccountsReceivable => "tab-ar",
            Self::Cases => "tab-case",
            Self::Crm => "tab-crm",
            Self::Reports => "tab-reports",
            Self::Settings => "tab-settings",
            Self::Expenses => "tab-expenses",
            Self::Budget => "tab-budget",
            Self::Payables => "tab-payables",
            Self::Assets => "tab-assets",
            Self::Liabilities => "tab-liabilities",
            Self::Revenue => "tab-revenue",
            Self::Equity => "tab-equity",
            Self::CashFlow => "tab-cashflow",
            Self::NetWorth => "tab-networth",
        }
    }

    /// Label shown on the tab strip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AccountsReceivable => "Accounts Receivable Management",
            Self::Cases => "Case Management",
            Self::Crm => "CRM Management",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::Expenses => "Expenses",
            Self::Budget => "Budget",
            Self::Payables => "Payables",
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::Revenue => "Revenue",
            Self::Equity => "Equity",
            Self::CashFlow => "Cash Flow",
            Self::NetWorth => "Net Worth",
        }
    }
}

impl FromStr for Tab {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| LayoutError::UnknownTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sub-tabs of the accounts receivable tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubTab {
    /// Receivables management.
    #[default]
    Receivables,
    /// Payments.
    Payments,
    /// Invoices.
    Invoices,
    /// Pending payables.
    PendingPayables,
}

impl SubTab {
    /// Sub-tabs in page order.
    pub const ALL: [Self; 4] = [
        Self::Receivables,
        Self::Payments,
        Self::Invoices,
        Self::PendingPayables,
    ];

    /// Element id / callback value.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Receivables => "sub-tab-receivables",
            Self::Payments => "sub-tab-payments",
            Self::Invoices => "sub-tab-invoices",
            Self::PendingPayables => "sub-tab-pending-payables",
        }
    }

    /// Label shown on the sub-tab strip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Receivables => "Receivables Management",
            Self::Payments => "Payments",
            Self::Invoices => "Invoices",
            Self::PendingPayables => "Pending Payables",
        }
    }
}

impl FromStr for SubTab {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sub| sub.id() == s)
            .ok_or_else(|| LayoutError::UnknownSubTab(s.to_string()))
    }
}

impl fmt::Display for SubTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A labelled input of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Label text.
    pub label: &'static str,
    /// HTML input type.
    pub input_type: &'static str,
    /// Placeholder text.
    pub placeholder: &'static str,
}

/// Settings form. Submitting it has no handler.
pub const SETTINGS_FIELDS: [FormField; 2] = [
    FormField {
        label: "Username:",
        input_type: "text",
        placeholder: "Enter Username",
    },
    FormField {
        label: "Password:",
        input_type: "password",
        placeholder: "Enter Password",
    },
];

/// Id of the settings submit button.
pub const SETTINGS_SUBMIT_ID: &str = "submit-settings";

/// What the content area shows for a tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent {
    /// A heading over one graph.
    Graph {
        /// Section heading.
        heading: &'static str,
        /// Chart drawn in the graph.
        chart: &'static ChartSpec,
    },
    /// The settings form.
    Settings {
        /// Section heading.
        heading: &'static str,
        /// Form inputs.
        fields: &'static [FormField],
        /// Submit button id.
        submit_id: &'static str,
    },
}

impl TabContent {
    /// Section heading.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match *self {
            Self::Graph { heading, .. } | Self::Settings { heading, .. } => heading,
        }
    }

    /// The chart, for graph content.
    #[must_use]
    pub const fn chart(&self) -> Option<&'static ChartSpec> {
        match *self {
            Self::Graph { chart, .. } => Some(chart),
            Self::Settings { .. } => None,
        }
    }
}

const fn graph(heading: &'static str, chart: &'static ChartSpec) -> TabContent {
    TabContent::Graph { heading, chart }
}

/// Content for a tab selection. The sub-tab only matters for `tab-ar`.
#[must_use]
pub const fn render_content(tab: Tab, sub_tab: SubTab) -> TabContent {
    match tab {
        Tab::Dashboard => graph("Dashboard Overview", &catalogue::AR_BY_UNIT),
        Tab::AccountsReceivable => match sub_tab {
            SubTab::Receivables => graph("Receivables Management", &catalogue::RECEIVABLES),
            SubTab::Payments => graph("Payments", &catalogue::PAYMENTS),
            SubTab::Invoices => graph("Invoices", &catalogue::INVOICES),
            SubTab::PendingPayables => graph("Pending Payables", &catalogue::PENDING_PAYABLES),
        },
        Tab::Cases => graph("Case Management", &catalogue::CASE_MANAGEMENT),
        Tab::Crm => graph("CRM Management", &catalogue::CRM_MANAGEMENT),
        Tab::Reports => graph("Reports", &catalogue::REPORTS),
        Tab::Settings => TabContent::Settings {
            heading: "Settings",
            fields: &SETTINGS_FIELDS,
            submit_id: SETTINGS_SUBMIT_ID,
        },
        Tab::Expenses => graph("Expenses", &catalogue::EXPENSES),
        Tab::Budget => graph("Budget", &catalogue::BUDGET),
        Tab::Payables => graph("Payables", &catalogue::PAYABLES),
        Tab::Assets => graph("Assets", &catalogue::ASSETS),
        Tab::Liabilities => graph("Liabilities", &catalogue::LIABILITIES),
        Tab::Revenue => graph("Revenue", &catalogue::REVENUE),
        Tab::Equity => graph("Equity", &catalogue::EQUITY),
        Tab::CashFlow => graph("Cash Flow", &catalogue::CASH_FLOW),
        Tab::NetWorth => graph("Net Worth", &catalogue::NET_WORTH),
    }
}

/// Parses raw callback values, falling back to the page defaults when absent.
///
/// # Errors
///
/// Returns `LayoutError` for ids the page does not define.
pub fn resolve(tab: Option<&str>, sub_tab: Option<&str>) -> Result<TabContent, LayoutError> {
    let tab = tab.map_or(Ok(Tab::default()), str::parse)?;
    let sub_tab = sub_tab.map_or(Ok(SubTab::default()), str::parse)?;
    Ok(render_content(tab, sub_tab))
}
