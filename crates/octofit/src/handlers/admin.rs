//! Admin console handlers.

use std::collections::HashMap;

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};

use crate::{
    admin::{AdminListResponse, AdminQuery, ModelAdmin, REGISTRY, model_admin},
    errors::AppError,
    models::Entity,
    store::SharedStore,
};

/// List registered admin models and their configuration.
pub async fn list_models() -> Json<&'static [ModelAdmin]> {
    Json(REGISTRY.as_slice())
}

/// List one model's rows with search, filters and ordering applied.
pub async fn list_model(
    Extension(store): Extension<SharedStore>,
    Path(model): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<AdminListResponse>, AppError> {
    let entity = Entity::from_name(&model).ok_or(AppError::NotFound)?;
    let admin = model_admin(entity);
    let query = AdminQuery::from_params(params);

    let response = match entity {
        Entity::Users => admin.list(store.list_users().await?, &query)?,
        Entity::Teams => admin.list(store.list_teams().await?, &query)?,
        Entity::Activities => admin.list(store.list_activities().await?, &query)?,
        Entity::Leaderboard => admin.list(store.list_leaderboard().await?, &query)?,
        Entity::Workouts => admin.list(store.list_workouts().await?, &query)?,
    };

    Ok(Json(response))
}
