//! Database seeding utilities.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use tracing::info;

use octofit::errors::AppError;
use octofit::leaderboard::{assign_ranks, totals};
use octofit::models::{Entity, LeaderboardEntry, NewLeaderboardEntry, Team, User, Workout};
use octofit::store::SharedStore;

use crate::fixtures;
use crate::generators::ActivityGenerator;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] AppError),
}

/// Record counts after a seed run, read back from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub teams: i64,
    pub users: i64,
    pub activities: i64,
    pub leaderboard: i64,
    pub workouts: i64,
}

/// Writes the demo dataset through a store handle.
pub struct Seeder {
    store: SharedStore,
    activities: ActivityGenerator,
}

impl Seeder {
    /// Creates a new seeder over the given store.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            activities: ActivityGenerator::new(),
        }
    }

    /// Replaces the activity generator.
    pub fn with_generator(mut self, activities: ActivityGenerator) -> Self {
        self.activities = activities;
        self
    }

    /// Clears the store and repopulates it with the full demo dataset.
    pub async fn populate(&self, rng: &mut impl Rng) -> Result<SeedSummary, SeedError> {
        let today = OffsetDateTime::now_utc().date();

        self.clear_all().await?;
        self.seed_teams().await?;
        let users = self.seed_users().await?;
        self.seed_activities(&users, today, rng).await?;
        self.seed_leaderboard(&users).await?;
        self.rank_leaderboard().await?;
        self.seed_workouts().await?;

        let stats = self.store.stats().await?;
        info!("Database populated successfully");

        Ok(SeedSummary {
            teams: stats.teams,
            users: stats.users,
            activities: stats.activities,
            leaderboard: stats.leaderboard,
            workouts: stats.workouts,
        })
    }

    /// Deletes every record of every entity type.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing existing data...");
        for entity in Entity::ALL {
            let deleted = self.store.clear(entity).await?;
            info!(entity = %entity, deleted, "Cleared table");
        }
        Ok(())
    }

    pub async fn seed_teams(&self) -> Result<Vec<Team>, SeedError> {
        info!("Creating teams...");
        let mut teams = Vec::with_capacity(fixtures::TEAMS.len());
        for team in fixtures::teams() {
            teams.push(self.store.create_team(team).await?);
        }
        info!("Created {} teams", teams.len());
        Ok(teams)
    }

    pub async fn seed_users(&self) -> Result<Vec<User>, SeedError> {
        info!("Creating users...");
        let mut users = Vec::with_capacity(fixtures::HEROES.len());
        for user in fixtures::heroes() {
            users.push(self.store.create_user(user).await?);
        }
        info!("Created {} users", users.len());
        Ok(users)
    }

    /// Creates a random activity history for each user.
    pub async fn seed_activities(
        &self,
        users: &[User],
        today: Date,
        rng: &mut impl Rng,
    ) -> Result<usize, SeedError> {
        info!("Creating activities...");
        let mut created = 0;
        for user in users {
            for activity in self.activities.generate_for_user(user, today, rng) {
                self.store.create_activity(activity).await?;
                created += 1;
            }
        }
        info!("Created {created} activities");
        Ok(created)
    }

    /// Creates one unranked leaderboard entry per user from the activities
    /// stored for that user.
    pub async fn seed_leaderboard(&self, users: &[User]) -> Result<(), SeedError> {
        info!("Creating leaderboard...");
        for user in users {
            let activities = self.store.activities_for_user(&user.id.to_string()).await?;
            let summary = totals(&activities);

            self.store
                .create_leaderboard_entry(NewLeaderboardEntry {
                    user_id: user.id.to_string(),
                    user_name: user.name.clone(),
                    team: user.team.clone(),
                    total_calories: summary.total_calories,
                    total_activities: summary.total_activities,
                    rank: 0,
                })
                .await?;
        }
        Ok(())
    }

    /// Ranks every leaderboard entry by total calories and persists the ranks.
    pub async fn rank_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, SeedError> {
        let mut entries = self.store.list_leaderboard().await?;
        assign_ranks(&mut entries);

        for entry in &entries {
            self.store.set_leaderboard_rank(entry.id, entry.rank).await?;
        }
        info!("Ranked {} leaderboard entries", entries.len());
        Ok(entries)
    }

    pub async fn seed_workouts(&self) -> Result<Vec<Workout>, SeedError> {
        info!("Creating workouts...");
        let mut workouts = Vec::new();
        for workout in fixtures::workouts() {
            workouts.push(self.store.create_workout(workout).await?);
        }
        info!("Created {} workouts", workouts.len());
        Ok(workouts)
    }
}
