//! Tab content callback.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use palm_core::chart::Figure;
use palm_core::layout::{self, FormField, TabContent};

use super::charts::figure_for;
use crate::AppState;
use crate::error::ApiResult;

/// Selected tab and sub-tab ids; absent values use the page defaults.
#[derive(Debug, Deserialize)]
pub struct TabQuery {
    /// Tab id, e.g. `tab-ar`.
    pub tab: Option<String>,
    /// Sub-tab id, only read for `tab-ar`.
    pub sub_tab: Option<String>,
}

/// Content area fragment.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabContentResponse {
    /// A heading over one graph.
    Graph {
        /// Section heading.
        heading: &'static str,
        /// Graph element id.
        graph_id: &'static str,
        /// Plotly figure.
        figure: Figure,
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

async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<TabQuery>,
) -> ApiResult<Json<TabContentResponse>> {
    let content = layout::resolve(query.tab.as_deref(), query.sub_tab.as_deref())?;
    let response = match content {
        TabContent::Graph { heading, chart } => TabContentResponse::Graph {
            heading,
            graph_id: chart.id,
            figure: figure_for(&state, chart)?,
        },
        TabContent::Settings {
            heading,
            fields,
            submit_id,
        } => TabContentResponse::Settings {
            heading,
            fields,
            submit_id,
        },
    };
    Ok(Json(response))
}

/// Creates the tab content route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tabs/content", get(get_content))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rstest::rstest;

    use crate::routes::test_support::{app, body_json, get};

    #[tokio::test]
    async fn test_defaults_to_dashboard() {
        let response = get(app(), "/api/v1/tabs/content").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["type"], "graph");
        assert_eq!(body["heading"], "Dashboard Overview");
        assert_eq!(body["graph_id"], "ar-by-unit-chart");
    }

    #[rstest]
    #[case("sub-tab-receivables", "receivables-chart")]
    #[case("sub-tab-payments", "payments-chart")]
    #[case("sub-tab-invoices", "invoices-chart")]
    #[case("sub-tab-pending-payables", "pending-payables-chart")]
    #[tokio::test]
    async fn test_receivables_sub_tabs(#[case] sub_tab: &str, #[case] graph_id: &str) {
        let uri = format!("/api/v1/tabs/content?tab=tab-ar&sub_tab={sub_tab}");
        let body = body_json(get(app(), &uri).await).await;
        assert_eq!(body["graph_id"], graph_id);
        assert!(body["figure"]["data"].is_array());
    }

    #[tokio::test]
    async fn test_settings_form() {
        let body = body_json(get(app(), "/api/v1/tabs/content?tab=tab-settings").await).await;
        assert_eq!(body["type"], "settings");
        assert_eq!(body["fields"].as_array().unwrap().len(), 2);
        assert_eq!(body["submit_id"], "submit-settings");
    }

    #[rstest]
    #[case("/api/v1/tabs/content?tab=tab-payroll")]
    #[case("/api/v1/tabs/content?tab=tab-ar&sub_tab=sub-tab-refunds")]
    #[tokio::test]
    async fn test_unknown_ids_are_rejected(#[case] uri: &str) {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
