//! Chart figures by graph id.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::debug;

use palm_core::chart::{ChartError, ChartSpec, Figure};

use crate::AppState;
use crate::error::ApiResult;

/// Builds (or fetches from cache) the figure for a chart.
pub(crate) fn figure_for(state: &AppState, spec: &'static ChartSpec) -> ApiResult<Figure> {
    let lookup = state.figures.get_or_build(spec, &state.tables)?;
    debug!(
        chart = spec.id,
        cached = lookup.cached,
        traces = lookup.figure.data.len(),
        "Figure ready"
    );
    Ok(Figure::clone(&lookup.figure))
}

async fn get_chart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Figure>> {
    let spec = ChartSpec::by_id(&id).ok_or(ChartError::UnknownChart(id))?;
    Ok(Json(figure_for(&state, spec)?))
}

/// Creates the chart routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/charts/{id}", get(get_chart))
}
