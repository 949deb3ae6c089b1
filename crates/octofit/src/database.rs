use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Activity, Entity, LeaderboardEntry, NewActivity, NewLeaderboardEntry, NewTeam, NewUser,
    NewWorkout, Team, User, Workout,
};
use crate::store::Store;

/// PostgreSQL-backed [`Store`].
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for Database {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let user = user.into_user();
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, team, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.team)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, name, email, team, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as(
            r#"
            SELECT id, name, email, team, created_at
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create_team(&self, team: NewTeam) -> Result<Team, AppError> {
        let team = team.into_team();
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(team.id)
        .bind(&team.name)
        .bind(&team.description)
        .bind(team.created_at)
        .execute(&self.pool)
        .await?;

        Ok(team)
    }

    async fn get_team(&self, id: Uuid) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let teams = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM teams
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn create_activity(&self, activity: NewActivity) -> Result<Activity, AppError> {
        let activity = activity.into_activity();
        sqlx::query(
            r#"
            INSERT INTO activities (id, user_id, user_name, activity_type,
                                    duration, calories, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(activity.id)
        .bind(&activity.user_id)
        .bind(&activity.user_name)
        .bind(&activity.activity_type)
        .bind(activity.duration)
        .bind(activity.calories)
        .bind(activity.date)
        .bind(activity.created_at)
        .execute(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError> {
        let activity = sqlx::query_as(
            r#"
            SELECT id, user_id, user_name, activity_type,
                   duration, calories, date, created_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as(
            r#"
            SELECT id, user_id, user_name, activity_type,
                   duration, calories, date, created_at
            FROM activities
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    async fn activities_for_user(&self, user_id: &str) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as(
            r#"
            SELECT id, user_id, user_name, activity_type,
                   duration, calories, date, created_at
            FROM activities
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    async fn create_leaderboard_entry(
        &self,
        entry: NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError> {
        let entry = entry.into_entry();
        sqlx::query(
            r#"
            INSERT INTO leaderboard (id, user_id, user_name, team, total_calories,
                                     total_activities, rank, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(&entry.user_name)
        .bind(&entry.team)
        .bind(entry.total_calories)
        .bind(entry.total_activities)
        .bind(entry.rank)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn get_leaderboard_entry(&self, id: Uuid) -> Result<Option<LeaderboardEntry>, AppError> {
        let entry = sqlx::query_as(
            r#"
            SELECT id, user_id, user_name, team, total_calories,
                   total_activities, rank, updated_at
            FROM leaderboard
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let entries = sqlx::query_as(
            r#"
            SELECT id, user_id, user_name, team, total_calories,
                   total_activities, rank, updated_at
            FROM leaderboard
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn set_leaderboard_rank(&self, id: Uuid, rank: i32) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE leaderboard
            SET rank = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(rank)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, AppError> {
        let workout = workout.into_workout();
        sqlx::query(
            r#"
            INSERT INTO workouts (id, name, description, difficulty,
                                  duration, calories_estimate, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(workout.id)
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(&workout.difficulty)
        .bind(workout.duration)
        .bind(workout.calories_estimate)
        .bind(&workout.category)
        .execute(&self.pool)
        .await?;

        Ok(workout)
    }

    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        let workout = sqlx::query_as(
            r#"
            SELECT id, name, description, difficulty,
                   duration, calories_estimate, category
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(workout)
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        let workouts = sqlx::query_as(
            r#"
            SELECT id, name, description, difficulty,
                   duration, calories_estimate, category
            FROM workouts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    async fn clear(&self, entity: Entity) -> Result<u64, AppError> {
        // Table names come from a closed enum, never from user input.
        let result = sqlx::query(&format!("DELETE FROM {}", entity.as_str()))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self, entity: Entity) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", entity.as_str()))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
