pub mod admin;
pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod memory_store;
pub mod models;
pub mod request_id;
pub mod store;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    response::Json,
    routing::get,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;

use crate::{
    handlers::{
        get_activity, get_leaderboard_entry, get_stats, get_team, get_user, get_workout,
        health_check, list_activities, list_leaderboard, list_model, list_models, list_teams,
        list_users, list_workouts,
    },
    models::{Activity, Entity, LeaderboardEntry, Stats, Team, User, Workout},
    request_id::request_id_middleware,
    store::SharedStore,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "OctoFit Tracker API"),
    paths(
        handlers::health_check,
        handlers::get_stats,
        handlers::list_users,
        handlers::get_user,
        handlers::list_teams,
        handlers::get_team,
        handlers::list_activities,
        handlers::get_activity,
        handlers::list_leaderboard,
        handlers::get_leaderboard_entry,
        handlers::list_workouts,
        handlers::get_workout,
    ),
    components(schemas(User, Team, Activity, LeaderboardEntry, Workout, Stats, Entity))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Model routes
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/teams", get(list_teams))
        .route("/teams/{id}", get(get_team))
        .route("/activities", get(list_activities))
        .route("/activities/{id}", get(get_activity))
        .route("/leaderboard", get(list_leaderboard))
        .route("/leaderboard/{id}", get(get_leaderboard_entry))
        .route("/workouts", get(list_workouts))
        .route("/workouts/{id}", get(get_workout))
        // Admin console
        .route("/admin", get(list_models))
        .route("/admin/{model}", get(list_model))
        .layer(Extension(store))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_id_middleware))
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(store: SharedStore, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
