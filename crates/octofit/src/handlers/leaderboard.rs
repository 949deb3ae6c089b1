//! Leaderboard handlers.

use axum::{Extension, extract::Path, response::Json};
use uuid::Uuid;

use crate::{
    errors::AppError, leaderboard::ranked_for_display, models::LeaderboardEntry,
    store::SharedStore,
};

/// Get the leaderboard ordered by rank.
///
/// Unranked entries are ranked by total calories for the response only.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "leaderboard",
    responses(
        (status = 200, description = "Leaderboard ordered by rank ascending", body = Vec<LeaderboardEntry>)
    )
)]
pub async fn list_leaderboard(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = store.list_leaderboard().await?;
    Ok(Json(ranked_for_display(entries)))
}

/// Get a single leaderboard entry.
#[utoipa::path(
    get,
    path = "/leaderboard/{id}",
    tag = "leaderboard",
    params(
        ("id" = Uuid, Path, description = "Leaderboard entry ID")
    ),
    responses(
        (status = 200, description = "Leaderboard entry", body = LeaderboardEntry),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn get_leaderboard_entry(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<LeaderboardEntry>, AppError> {
    let entry = store
        .get_leaderboard_entry(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(entry))
}
