//! The static UI tree, as served to the page.

use serde::Serialize;

use super::tabs::{SubTab, Tab};

/// Page title.
pub const PAGE_TITLE: &str = "Accounts Receivable Dashboard";
/// Receivables grid element id.
pub const GRID_ID: &str = "data-table";
/// Download button id.
pub const DOWNLOAD_BUTTON_ID: &str = "download-button";
/// Fetch button id.
pub const FETCH_BUTTON_ID: &str = "fetch-button";
/// Prediction input id.
pub const PREDICTION_INPUT_ID: &str = "input-parameters";
/// Search input id.
pub const SEARCH_INPUT_ID: &str = "nlp-search";

/// Whole page description.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    /// `<h1>` text.
    pub title: &'static str,
    /// Tab strip; `tab-ar` carries the sub-tabs.
    pub tabs: Vec<TabNode>,
    /// Receivables grid.
    pub grid: GridNode,
    /// Multi-select filter dropdown.
    pub multi_filter: DropdownNode,
    /// Free-text inputs with their output areas.
    pub inputs: Vec<InputNode>,
    /// Buttons.
    pub buttons: Vec<ButtonNode>,
}

/// One tab and its children.
#[derive(Debug, Clone, Serialize)]
pub struct TabNode {
    /// Tab id.
    pub id: &'static str,
    /// Tab label.
    pub label: &'static str,
    /// Nested tabs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TabNode>,
}

/// Data grid description.
#[derive(Debug, Clone, Serialize)]
pub struct GridNode {
    /// Element id.
    pub id: &'static str,
    /// Column headers.
    pub columns: Vec<String>,
    /// Sorting happens on the server.
    pub sortable: bool,
    /// Filtering happens on the server.
    pub filterable: bool,
    /// Cells are editable in the browser only.
    pub editable: bool,
}

/// Dropdown option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionNode {
    /// Option label.
    pub label: &'static str,
    /// Option value.
    pub value: &'static str,
}

/// Multi-select dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct DropdownNode {
    /// Element id.
    pub id: &'static str,
    /// Options.
    pub options: Vec<OptionNode>,
    /// Multiple selection allowed.
    pub multi: bool,
}

/// Text input wired to an output area.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InputNode {
    /// Element id.
    pub id: &'static str,
    /// Placeholder text.
    pub placeholder: &'static str,
    /// Output area id.
    pub output_id: &'static str,
}

/// Button wired to an output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ButtonNode {
    /// Element id.
    pub id: &'static str,
    /// Button text.
    pub label: &'static str,
    /// Output id.
    pub output_id: &'static str,
}

/// Multi-filter dropdown options.
pub const FILTER_OPTIONS: [OptionNode; 2] = [
    OptionNode {
        label: "Invoice Status",
        value: "status",
    },
    OptionNode {
        label: "Date Range",
        value: "date_range",
    },
];

impl PageLayout {
    /// Describes the page; `grid_columns` are the receivables headers.
    #[must_use]
    pub fn describe(grid_columns: &[String]) -> Self {
        let tabs = Tab::ALL
            .into_iter()
            .map(|tab| TabNode {
                id: tab.id(),
                label: tab.label(),
                children: if tab == Tab::AccountsReceivable {
                    SubTab::ALL
                        .into_iter()
                        .map(|sub| TabNode {
                            id: sub.id(),
                            label: sub.label(),
                            children: Vec::new(),
                        })
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        Self {
            title: PAGE_TITLE,
            tabs,
            grid: GridNode {
                id: GRID_ID,
                columns: grid_columns.to_vec(),
                sortable: true,
                filterable: true,
                editable: true,
            },
            multi_filter: DropdownNode {
                id: "multi-filter",
                options: FILTER_OPTIONS.to_vec(),
                multi: true,
            },
            inputs: vec![
                InputNode {
                    id: PREDICTION_INPUT_ID,
                    placeholder: "Enter parameters for prediction",
                    output_id: "prediction-output",
                },
                InputNode {
                    id: SEARCH_INPUT_ID,
                    placeholder: "Search with Natural Language",
                    output_id: "search-results",
                },
            ],
            buttons: vec![
                ButtonNode {
                    id: DOWNLOAD_BUTTON_ID,
                    label: "Download Data",
                    output_id: "download-data",
                },
                ButtonNode {
                    id: FETCH_BUTTON_ID,
                    label: "Fetch External Data",
                    output_id: "api-data",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let layout = PageLayout::describe(&["invoice_id".to_string()]);

        assert_eq!(layout.title, "Accounts Receivable Dashboard");
        assert_eq!(layout.tabs.len(), 15);
        assert_eq!(layout.tabs[0].id, "tab-dashboard");

        let ar = layout.tabs.iter().find(|t| t.id == "tab-ar").unwrap();
        let sub_ids: Vec<_> = ar.children.iter().map(|c| c.id).collect();
        assert_eq!(
            sub_ids,
            vec![
                "sub-tab-receivables",
                "sub-tab-payments",
                "sub-tab-invoices",
                "sub-tab-pending-payables"
            ]
        );
        assert!(layout.tabs.iter().filter(|t| t.id != "tab-ar").all(|t| t.children.is_empty()));
        assert_eq!(layout.grid.columns, vec!["invoice_id"]);
        assert_eq!(layout.multi_filter.options[1].value, "date_range");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(PageLayout::describe(&[])).unwrap();
        assert_eq!(value["grid"]["id"], "data-table");
        assert_eq!(value["inputs"][0]["id"], "input-parameters");
        assert!(value["tabs"][0].get("children").is_none());
        assert_eq!(value["tabs"][1]["children"][3]["label"], "Pending Payables");
    }
}
