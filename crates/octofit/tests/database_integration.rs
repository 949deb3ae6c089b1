//! Integration tests for the PostgreSQL store.
//!
//! These tests require a running PostgreSQL database and the
//! DATABASE_URL environment variable set.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p octofit database`
//!
//! Tests only create rows with fresh ids and never clear tables, so they can
//! run against a development database.

use sqlx::postgres::PgPoolOptions;
use std::env;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use octofit::database::Database;
use octofit::leaderboard::totals;
use octofit::models::{NewActivity, NewLeaderboardEntry, NewUser, NewWorkout};
use octofit::store::Store;

/// Connect and migrate, skipping tests if DATABASE_URL is not set.
async fn get_test_db() -> Option<Database> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: failed to connect to database: {e}");
            return None;
        }
    };

    let db = Database::new(pool);
    db.migrate().await.expect("migrations should apply");
    Some(db)
}

#[tokio::test]
async fn test_user_round_trip() {
    let Some(db) = get_test_db().await else {
        return;
    };

    let email = format!("{}@test.com", Uuid::new_v4());
    let created = db
        .create_user(NewUser::new("DB Test Hero", email.clone(), "DB Team"))
        .await
        .unwrap();

    let fetched = db.get_user(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "DB Test Hero");
    assert_eq!(fetched.email, email);
    assert_eq!(fetched.team, "DB Team");
    assert!(db.get_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_activities_for_user_and_totals() {
    let Some(db) = get_test_db().await else {
        return;
    };

    let user_id = Uuid::new_v4().to_string();
    let today = OffsetDateTime::now_utc().date();
    for (days_ago, calories) in [(1, 400), (3, 600)] {
        db.create_activity(NewActivity {
            user_id: user_id.clone(),
            user_name: "DB Test Hero".to_string(),
            activity_type: "Cycling".to_string(),
            duration: 50,
            calories,
            date: today - Duration::days(days_ago),
        })
        .await
        .unwrap();
    }

    let activities = db.activities_for_user(&user_id).await.unwrap();
    assert_eq!(activities.len(), 2);
    let fetched = db.get_activity(activities[0].id).await.unwrap().unwrap();
    assert_eq!(fetched, activities[0]);

    let summary = totals(&activities);
    assert_eq!(summary.total_calories, 1000);
    assert_eq!(summary.total_activities, 2);
}

#[tokio::test]
async fn test_set_leaderboard_rank() {
    let Some(db) = get_test_db().await else {
        return;
    };

    let entry = db
        .create_leaderboard_entry(NewLeaderboardEntry {
            user_id: Uuid::new_v4().to_string(),
            user_name: "DB Test Hero".to_string(),
            team: "DB Team".to_string(),
            total_calories: 1000,
            total_activities: 5,
            rank: 0,
        })
        .await
        .unwrap();
    assert_eq!(entry.rank, 0);
    assert_eq!(db.get_leaderboard_entry(entry.id).await.unwrap().unwrap(), entry);

    db.set_leaderboard_rank(entry.id, 3).await.unwrap();
    let ranked = db.get_leaderboard_entry(entry.id).await.unwrap().unwrap();
    assert_eq!(ranked.rank, 3);

    assert!(db.set_leaderboard_rank(Uuid::new_v4(), 1).await.is_err());
}

#[tokio::test]
async fn test_workout_round_trip() {
    let Some(db) = get_test_db().await else {
        return;
    };

    let name = format!("DB Workout {}", Uuid::new_v4());
    let workout = db
        .create_workout(NewWorkout {
            name: name.clone(),
            description: "DB test workout".to_string(),
            difficulty: "Easy".to_string(),
            duration: 20,
            calories_estimate: 150,
            category: "Core".to_string(),
        })
        .await
        .unwrap();

    let fetched = db.get_workout(workout.id).await.unwrap().unwrap();
    assert_eq!(fetched, workout);
    assert_eq!(fetched.name, name);
    assert_eq!(fetched.calories_estimate, 150);
}
