pub mod measurements;
pub mod stations;
pub mod summary;

pub use measurements::*;
pub use stations::*;
pub use summary::*;

use axum::http::StatusCode;
use log::error;

use crate::db;

pub(crate) fn internal_error(err: db::Error) -> (StatusCode, String) {
    error!("error querying climate data: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        String::from("Failed to query climate data"),
    )
}
