//! User handlers.

use axum::{Extension, extract::Path, response::Json};
use uuid::Uuid;

use crate::{errors::AppError, models::User, store::SharedStore};

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = store.list_users().await?;
    Ok(Json(users))
}

/// Get a single user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = store.get_user(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(user))
}
