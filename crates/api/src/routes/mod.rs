//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod charts;
pub mod external;
pub mod grid;
pub mod health;
pub mod layout;
pub mod page;
pub mod predict;
pub mod search;
pub mod tabs;

/// Creates the API router with all callback routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(layout::routes())
        .merge(tabs::routes())
        .merge(charts::routes())
        .merge(grid::routes())
        .merge(predict::routes())
        .merge(search::routes())
        .merge(external::routes())
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Request, Response},
    };
    use http_body_util::BodyExt;
    use palm_core::chart::FigureCache;
    use palm_core::prediction::LinearModel;
    use palm_core::sample;
    use tower::ServiceExt;

    use crate::{AppState, create_router};

    /// State over the sample ledgers with `10 + 2a + 0.5b` as the model.
    pub fn state_with_external(url: &str) -> AppState {
        let model =
            LinearModel::from_json(br#"{"intercept": "10", "coefficients": ["2", "0.5"]}"#)
                .unwrap();
        AppState::new(
            sample::ledger_set(7).unwrap(),
            FigureCache::new(),
            model,
            url,
        )
    }

    pub fn state() -> AppState {
        state_with_external("http://127.0.0.1:9/data")
    }

    pub fn app() -> Router {
        create_router(state())
    }

    pub async fn get(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
