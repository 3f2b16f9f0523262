//! Receivables data grid and its CSV download.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use palm_core::export::{AR_EXPORT_FILENAME, write_csv};
use palm_core::grid::GridQuery;
use palm_core::schema::Dataset;
use palm_core::table::Table;
use palm_shared::AppError;
use palm_shared::types::{PageMeta, PageRequest};

use crate::AppState;
use crate::error::ApiResult;

/// Query parameters for the grid.
#[derive(Debug, Deserialize)]
pub struct GridParams {
    /// Column to sort by.
    pub sort_by: Option<String>,
    /// Sort descending.
    #[serde(default)]
    pub descending: bool,
    /// Filter query, e.g. `{status} = Open`.
    pub filter: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Rows per page.
    pub per_page: Option<u32>,
}

/// One page of grid rows.
#[derive(Debug, Serialize)]
pub struct GridResponse {
    /// Column headers in table order.
    pub columns: Vec<String>,
    /// Row records keyed by column name.
    pub data: Vec<Map<String, Value>>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

fn receivables(state: &AppState) -> ApiResult<&Table> {
    state
        .tables
        .get(Dataset::Receivables)
        .ok_or_else(|| AppError::Internal("receivables table not loaded".to_string()).into())
}

async fn get_grid(
    State(state): State<AppState>,
    Query(params): Query<GridParams>,
) -> ApiResult<Json<GridResponse>> {
    let table = receivables(&state)?;
    let query = GridQuery {
        sort_by: params.sort_by,
        descending: params.descending,
        filter: params.filter,
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        page: params.page.unwrap_or(defaults.page),
        per_page: params.per_page.unwrap_or(defaults.per_page),
    };

    let rows = page.paginate(query.apply(table)?);

    Ok(Json(GridResponse {
        columns: table.columns().to_vec(),
        data: table.records(&rows.data),
        meta: rows.meta,
    }))
}

async fn download(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let csv = write_csv(receivables(&state)?)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{AR_EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}

/// Creates the grid routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/grid", get(get_grid))
        .route("/grid/download", get(download))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{app, body_json, body_text, get, state};
    use crate::create_router;

    #[tokio::test]
    async fn test_grid_in_table_order() {
        let body = body_json(get(app(), "/api/v1/grid").await).await;

        assert_eq!(body["columns"][0], "invoice_id");
        let ids: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["invoice_id"].clone())
            .collect();
        assert_eq!(ids, vec![101, 102, 103]);
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["meta"]["per_page"], 25);
    }

    #[tokio::test]
    async fn test_grid_sort_and_filter() {
        let uri = "/api/v1/grid?sort_by=due_date&descending=true&filter=%7Bstatus%7D%20%3D%20Open";
        let body = body_json(get(app(), uri).await).await;

        let ids: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["invoice_id"].clone())
            .collect();
        assert_eq!(ids, vec![103, 101]);
        assert_eq!(body["meta"]["total"], 2);
    }

    #[tokio::test]
    async fn test_grid_pagination() {
        let body = body_json(get(app(), "/api/v1/grid?page=2&per_page=2").await).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["invoice_id"], 103);
        assert_eq!(body["meta"]["total_pages"], 2);
    }

    #[tokio::test]
    async fn test_grid_rejects_bad_filter() {
        let response = get(app(), "/api/v1/grid?filter=status%3DOpen").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(app(), "/api/v1/grid?sort_by=balance").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_grid_queries_leave_data_alone() {
        let state = state();
        let before = state.tables.get(palm_core::schema::Dataset::Receivables).cloned();

        let _ = get(create_router(state.clone()), "/api/v1/grid?sort_by=amount_due").await;
        let body = body_json(get(create_router(state.clone()), "/api/v1/grid").await).await;

        assert_eq!(state.tables.get(palm_core::schema::Dataset::Receivables).cloned(), before);
        assert_eq!(body["data"][0]["invoice_id"], 101);
    }

    #[tokio::test]
    async fn test_download_csv() {
        let response = get(app(), "/api/v1/grid/download").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-disposition"],
            "attachment; filename=\"ar_data.csv\""
        );

        let body = body_text(response).await;
        let mut lines = body.lines();
        assert_eq!(
            lines.next(),
            Some(",invoice_id,business_unit_id,customer_name,amount_due,due_date,status")
        );
        assert_eq!(lines.count(), 3);
    }
}
