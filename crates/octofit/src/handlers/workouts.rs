//! Workout catalog handlers.

use axum::{Extension, extract::Path, response::Json};
use uuid::Uuid;

use crate::{errors::AppError, models::Workout, store::SharedStore};

/// List the workout catalog.
#[utoipa::path(
    get,
    path = "/workouts",
    tag = "workouts",
    responses(
        (status = 200, description = "List of all workouts", body = Vec<Workout>)
    )
)]
pub async fn list_workouts(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Workout>>, AppError> {
    let workouts = store.list_workouts().await?;
    Ok(Json(workouts))
}

/// Get a single workout.
#[utoipa::path(
    get,
    path = "/workouts/{id}",
    tag = "workouts",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout", body = Workout),
        (status = 404, description = "Workout not found")
    )
)]
pub async fn get_workout(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Workout>, AppError> {
    let workout = store.get_workout(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(workout))
}
