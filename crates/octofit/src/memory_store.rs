//! In-process [`Store`] used by tests and by runs without `DATABASE_URL`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Activity, Entity, LeaderboardEntry, NewActivity, NewLeaderboardEntry, NewTeam, NewUser,
    NewWorkout, Team, User, Workout, now_utc,
};
use crate::store::Store;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    teams: Vec<Team>,
    activities: Vec<Activity>,
    leaderboard: Vec<LeaderboardEntry>,
    workouts: Vec<Workout>,
}

/// Vectors kept in insertion order, which doubles as creation order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn drain<T>(rows: &mut Vec<T>) -> u64 {
    let removed = rows.len() as u64;
    rows.clear();
    removed
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let user = user.into_user();
        self.tables.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn create_team(&self, team: NewTeam) -> Result<Team, AppError> {
        let team = team.into_team();
        self.tables.write().await.teams.push(team.clone());
        Ok(team)
    }

    async fn get_team(&self, id: Uuid) -> Result<Option<Team>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.teams.iter().find(|t| t.id == id).cloned())
    }

    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        Ok(self.tables.read().await.teams.clone())
    }

    async fn create_activity(&self, activity: NewActivity) -> Result<Activity, AppError> {
        let activity = activity.into_activity();
        self.tables.write().await.activities.push(activity.clone());
        Ok(activity)
    }

    async fn get_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.activities.iter().find(|a| a.id == id).cloned())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        Ok(self.tables.read().await.activities.clone())
    }

    async fn activities_for_user(&self, user_id: &str) -> Result<Vec<Activity>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_leaderboard_entry(
        &self,
        entry: NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError> {
        let entry = entry.into_entry();
        self.tables.write().await.leaderboard.push(entry.clone());
        Ok(entry)
    }

    async fn get_leaderboard_entry(&self, id: Uuid) -> Result<Option<LeaderboardEntry>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.leaderboard.iter().find(|e| e.id == id).cloned())
    }

    async fn list_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        Ok(self.tables.read().await.leaderboard.clone())
    }

    async fn set_leaderboard_rank(&self, id: Uuid, rank: i32) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let entry = tables
            .leaderboard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound)?;
        entry.rank = rank;
        entry.updated_at = now_utc();
        Ok(())
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, AppError> {
        let workout = workout.into_workout();
        self.tables.write().await.workouts.push(workout.clone());
        Ok(workout)
    }

    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.workouts.iter().find(|w| w.id == id).cloned())
    }

    async fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        Ok(self.tables.read().await.workouts.clone())
    }

    async fn clear(&self, entity: Entity) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;
        let removed = match entity {
            Entity::Users => drain(&mut tables.users),
            Entity::Teams => drain(&mut tables.teams),
            Entity::Activities => drain(&mut tables.activities),
            Entity::Leaderboard => drain(&mut tables.leaderboard),
            Entity::Workouts => drain(&mut tables.workouts),
        };
        Ok(removed)
    }

    async fn count(&self, entity: Entity) -> Result<i64, AppError> {
        let tables = self.tables.read().await;
        let count = match entity {
            Entity::Users => tables.users.len(),
            Entity::Teams => tables.teams.len(),
            Entity::Activities => tables.activities.len(),
            Entity::Leaderboard => tables.leaderboard.len(),
            Entity::Workouts => tables.workouts.len(),
        };
        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn activity_for(user_id: &str, calories: i32) -> NewActivity {
        NewActivity {
            user_id: user_id.to_string(),
            user_name: "Test Hero".to_string(),
            activity_type: "Running".to_string(),
            duration: 60,
            calories,
            date: date!(2025 - 06 - 01),
        }
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let store = MemoryStore::new();
        let created = store
            .create_user(NewUser::new("Test Hero", "test@hero.com", "Test Team"))
            .await
            .unwrap();

        let fetched = store.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Test Hero");
        assert_eq!(fetched.email, "test@hero.com");
        assert_eq!(fetched.team, "Test Team");
        assert_eq!(fetched.to_string(), "Test Hero");
    }

    #[tokio::test]
    async fn test_activities_filtered_by_user() {
        let store = MemoryStore::new();
        store.create_activity(activity_for("a", 500)).await.unwrap();
        store.create_activity(activity_for("b", 300)).await.unwrap();
        store.create_activity(activity_for("a", 200)).await.unwrap();

        let for_a = store.activities_for_user("a").await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[0].calories, 500);
        assert_eq!(for_a[1].calories, 200);
        assert!(store.activities_for_user("c").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_and_count() {
        let store = MemoryStore::new();
        store
            .create_team(NewTeam::new("Team Marvel", "Heroes"))
            .await
            .unwrap();
        store
            .create_team(NewTeam::new("Team DC", "League"))
            .await
            .unwrap();

        assert_eq!(store.count(Entity::Teams).await.unwrap(), 2);
        assert_eq!(store.clear(Entity::Teams).await.unwrap(), 2);
        assert_eq!(store.count(Entity::Teams).await.unwrap(), 0);
        assert_eq!(store.clear(Entity::Users).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_set_rank_on_missing_entry_is_not_found() {
        let store = MemoryStore::new();
        let err = store.set_leaderboard_rank(Uuid::new_v4(), 1).await;
        assert!(matches!(err, Err(AppError::NotFound)));
    }
}
