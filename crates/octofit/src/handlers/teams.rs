//! Team handlers.

use axum::{Extension, extract::Path, response::Json};
use uuid::Uuid;

use crate::{errors::AppError, models::Team, store::SharedStore};

/// List all teams.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "List of all teams", body = Vec<Team>)
    )
)]
pub async fn list_teams(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Team>>, AppError> {
    let teams = store.list_teams().await?;
    Ok(Json(teams))
}

/// Get a single team.
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team", body = Team),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Team>, AppError> {
    let team = store.get_team(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(team))
}
