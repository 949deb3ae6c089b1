//! Persistence seam shared by the API, the admin views and the seeder.
//!
//! Two backends implement [`Store`]: [`Database`] over PostgreSQL and
//! [`MemoryStore`] for isolated tests and database-less runs.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    config::Config,
    database::Database,
    errors::AppError,
    memory_store::MemoryStore,
    models::{
        Activity, Entity, LeaderboardEntry, NewActivity, NewLeaderboardEntry, NewTeam, NewUser,
        NewWorkout, Stats, Team, User, Workout,
    },
};

/// Handle passed to the router and the seeder.
pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError>;
    /// Users in creation order.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn create_team(&self, team: NewTeam) -> Result<Team, AppError>;
    async fn get_team(&self, id: Uuid) -> Result<Option<Team>, AppError>;
    async fn list_teams(&self) -> Result<Vec<Team>, AppError>;

    async fn create_activity(&self, activity: NewActivity) -> Result<Activity, AppError>;
    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError>;
    async fn list_activities(&self) -> Result<Vec<Activity>, AppError>;
    /// Activities whose `user_id` equals the given opaque id, in creation order.
    async fn activities_for_user(&self, user_id: &str) -> Result<Vec<Activity>, AppError>;

    async fn create_leaderboard_entry(
        &self,
        entry: NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError>;
    async fn get_leaderboard_entry(&self, id: Uuid) -> Result<Option<LeaderboardEntry>, AppError>;
    /// Entries in creation order; ranking is the caller's concern.
    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError>;
    /// Sets the rank of one entry and touches `updated_at`.
    async fn set_leaderboard_rank(&self, id: Uuid, rank: i32) -> Result<(), AppError>;

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, AppError>;
    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError>;
    async fn list_workouts(&self) -> Result<Vec<Workout>, AppError>;

    /// Deletes every record of the entity, returning the number removed.
    async fn clear(&self, entity: Entity) -> Result<u64, AppError>;
    async fn count(&self, entity: Entity) -> Result<i64, AppError>;

    async fn stats(&self) -> Result<Stats, AppError> {
        Ok(Stats {
            teams: self.count(Entity::Teams).await?,
            users: self.count(Entity::Users).await?,
            activities: self.count(Entity::Activities).await?,
            leaderboard: self.count(Entity::Leaderboard).await?,
            workouts: self.count(Entity::Workouts).await?,
        })
    }
}

/// Opens the store described by `config`.
///
/// With a database URL this connects to PostgreSQL and applies the embedded
/// migrations; otherwise an empty in-memory store is returned.
pub async fn connect(config: &Config) -> Result<SharedStore, AppError> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(url)
                .await?;
            info!("Connected to database");

            let db = Database::new(pool);
            db.migrate().await?;
            Ok(Arc::new(db))
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
