use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{routes::api::internal_error, AppState, PrecipitationEntry, TemperatureEntry};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation readings on or after the cutoff date, one per station and day", content_type = "application/json", body = Vec<PrecipitationEntry>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the dataset")
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationEntry>>, (StatusCode, String)> {
    state
        .climate
        .list_precipitation()
        .await
        .map(Json)
        .map_err(internal_error)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station on or after the cutoff date", content_type = "application/json", body = Vec<TemperatureEntry>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the dataset")
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureEntry>>, (StatusCode, String)> {
    state
        .climate
        .list_recent_temperatures()
        .await
        .map(Json)
        .map_err(internal_error)
}
