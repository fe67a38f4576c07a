use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{routes::api::internal_error, AppState, Station};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "All weather stations", content_type = "application/json", body = Vec<Station>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the dataset")
    ))]
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Station>>, (StatusCode, String)> {
    state
        .climate
        .list_stations()
        .await
        .map(Json)
        .map_err(internal_error)
}
