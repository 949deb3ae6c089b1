//! Health check and record count handlers.

use axum::{Extension, http::StatusCode, response::Json};

use crate::{errors::AppError, models::Stats, store::SharedStore};

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "stats",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Record counts per entity.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Record counts", body = Stats)
    )
)]
pub async fn get_stats(Extension(store): Extension<SharedStore>) -> Result<Json<Stats>, AppError> {
    let stats = store.stats().await?;
    Ok(Json(stats))
}
