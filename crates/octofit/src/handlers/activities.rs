//! Activity handlers.

use axum::{Extension, extract::Path, response::Json};
use uuid::Uuid;

use crate::{errors::AppError, models::Activity, store::SharedStore};

/// List all activities.
#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    responses(
        (status = 200, description = "List of all activities", body = Vec<Activity>)
    )
)]
pub async fn list_activities(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let activities = store.list_activities().await?;
    Ok(Json(activities))
}

/// Get a single activity.
#[utoipa::path(
    get,
    path = "/activities/{id}",
    tag = "activities",
    params(
        ("id" = Uuid, Path, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Activity", body = Activity),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn get_activity(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Activity>, AppError> {
    let activity = store.get_activity(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(activity))
}
