//! HTTP request handlers for the OctoFit API.
//!
//! This module re-exports handlers from focused submodules organized by model.

pub mod activities;
pub mod admin;
pub mod leaderboard;
pub mod stats;
pub mod teams;
pub mod users;
pub mod workouts;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use activities::{__path_get_activity, __path_list_activities, get_activity, list_activities};
pub use admin::{list_model, list_models};
pub use leaderboard::{
    __path_get_leaderboard_entry, __path_list_leaderboard, get_leaderboard_entry, list_leaderboard,
};
pub use stats::{__path_get_stats, __path_health_check, get_stats, health_check};
pub use teams::{__path_get_team, __path_list_teams, get_team, list_teams};
pub use users::{__path_get_user, __path_list_users, get_user, list_users};
pub use workouts::{__path_get_workout, __path_list_workouts, get_workout, list_workouts};
