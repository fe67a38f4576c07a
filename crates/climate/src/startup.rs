use crate::{
    db::{self, ClimateAccess, ClimateData},
    index_handler, precipitation, routes, stations, temperature_between, temperature_from, tobs,
    ClimateService,
};
use anyhow::{anyhow, bail, Context};
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use climate_core::is_file;
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub climate: Arc<ClimateService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::measurements::precipitation,
        routes::api::measurements::tobs,
        routes::api::stations::stations,
        routes::api::summary::temperature_from,
        routes::api::summary::temperature_between,
    ),
    components(
        schemas(
                db::Station,
                db::PrecipitationEntry,
                db::TemperatureEntry,
            )
    ),
    tags(
        (name = "climate api", description = "a read-only RESTful api over Hawaii weather station precipitation and temperature observations")
    )
)]
struct ApiDoc;

/// Opens the dataset and derives the startup reference points.
///
/// Fails when the file cannot be opened or holds no measurements.
pub async fn build_app_state(database_path: &str) -> Result<AppState, anyhow::Error> {
    if !is_file(database_path) {
        bail!("climate dataset not found at {}", database_path);
    }

    let access = ClimateAccess::new(database_path)
        .await
        .with_context(|| format!("error opening climate dataset {}", database_path))?;
    access
        .health_check()
        .await
        .map_err(|e| anyhow!("climate dataset is not readable: {}", e))?;

    let db: Arc<dyn ClimateData> = Arc::new(access);
    app_state_from(db).await
}

pub async fn app_state_from(db: Arc<dyn ClimateData>) -> Result<AppState, anyhow::Error> {
    let climate = ClimateService::new(db)
        .await
        .map_err(|e| anyhow!("error computing reference points: {}", e))?;

    Ok(AppState {
        climate: Arc::new(climate),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temperature_from))
        .route("/api/v1.0/{start}/{end}", get(temperature_between))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
