use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{routes::api::internal_error, AppState, TemperatureSummary};

// Dates are matched as strings; anything that is not zero-padded YYYY-MM-DD
// simply selects the wrong rows (or none) rather than being rejected.

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
         ("start" = String, Path, description = "First date to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "[min, avg, max] temperature on or after start, nulls when nothing matches", content_type = "application/json", body = [f64]),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the dataset")
    ))]
pub async fn temperature_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, (StatusCode, String)> {
    state
        .climate
        .temperature_summary(&start)
        .await
        .map(Json)
        .map_err(internal_error)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
         ("start" = String, Path, description = "First date to include, YYYY-MM-DD"),
         ("end" = String, Path, description = "Last date to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "[min, avg, max] temperature between start and end inclusive, nulls when nothing matches", content_type = "application/json", body = [f64]),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the dataset")
    ))]
pub async fn temperature_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, (StatusCode, String)> {
    state
        .climate
        .temperature_summary_range(&start, &end)
        .await
        .map(Json)
        .map_err(internal_error)
}
