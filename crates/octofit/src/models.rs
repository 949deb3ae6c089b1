use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, Duration, OffsetDateTime};
use utoipa::ToSchema;
use uuid::Uuid;

/// Current UTC time truncated to the microsecond precision of `TIMESTAMPTZ`,
/// so records returned from `create_*` equal what is read back.
pub fn now_utc() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}

/// The five record kinds held by a [`crate::store::Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Entity {
    pub const ALL: [Entity; 5] = [
        Entity::Users,
        Entity::Teams,
        Entity::Activities,
        Entity::Leaderboard,
        Entity::Workouts,
    ];

    /// Table name, also used as the path segment of the admin views.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Teams => "teams",
            Entity::Activities => "activities",
            Entity::Leaderboard => "leaderboard",
            Entity::Workouts => "workouts",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Team name, copied at write time.
    pub team: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub team: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            team: team.into(),
        }
    }

    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            team: self.team,
            created_at: now_utc(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTeam {
    pub name: String,
    pub description: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn into_team(self) -> Team {
        Team {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            created_at: now_utc(),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single logged workout session.
///
/// `user_id` is the owning user's id rendered as a string and `user_name` is a
/// copy of the user's name at the time the activity was recorded. Neither is
/// kept in sync with later changes to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub activity_type: String,
    /// Minutes.
    pub duration: i32,
    pub calories: i32,
    pub date: Date,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewActivity {
    pub user_id: String,
    pub user_name: String,
    pub activity_type: String,
    pub duration: i32,
    pub calories: i32,
    pub date: Date,
}

impl NewActivity {
    pub fn into_activity(self) -> Activity {
        Activity {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            user_name: self.user_name,
            activity_type: self.activity_type,
            duration: self.duration,
            calories: self.calories,
            date: self.date,
            created_at: now_utc(),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.user_name, self.activity_type)
    }
}

/// Per-user totals with a 1-based rank. A rank of 0 means the entry has not
/// been ranked yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub team: String,
    pub total_calories: i32,
    pub total_activities: i32,
    pub rank: i32,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewLeaderboardEntry {
    pub user_id: String,
    pub user_name: String,
    pub team: String,
    pub total_calories: i32,
    pub total_activities: i32,
    #[serde(default)]
    pub rank: i32,
}

impl NewLeaderboardEntry {
    pub fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            user_name: self.user_name,
            team: self.team,
            total_calories: self.total_calories,
            total_activities: self.total_activities,
            rank: self.rank,
            updated_at: now_utc(),
        }
    }
}

impl LeaderboardEntry {
    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Rank {}", self.user_name, self.rank)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    /// Minutes.
    pub duration: i32,
    pub calories_estimate: i32,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration: i32,
    pub calories_estimate: i32,
    pub category: String,
}

impl NewWorkout {
    pub fn into_workout(self) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            difficulty: self.difficulty,
            duration: self.duration,
            calories_estimate: self.calories_estimate,
            category: self.category,
        }
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Record counts per entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Stats {
    pub teams: i64,
    pub users: i64,
    pub activities: i64,
    pub leaderboard: i64,
    pub workouts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_name() {
        let user = NewUser::new("Test Hero", "test@hero.com", "Test Team").into_user();
        assert_eq!(user.to_string(), "Test Hero");

        let team = NewTeam::new("Test Team", "A test team").into_team();
        assert_eq!(team.to_string(), "Test Team");
    }

    #[test]
    fn test_leaderboard_entry_display_and_rank() {
        let entry = NewLeaderboardEntry {
            user_id: "123".into(),
            user_name: "Test Hero".into(),
            team: "Test Team".into(),
            total_calories: 1000,
            total_activities: 5,
            rank: 0,
        }
        .into_entry();
        assert!(!entry.is_ranked());
        assert_eq!(entry.to_string(), "Test Hero - Rank 0");
    }

    #[test]
    fn test_timestamps_have_microsecond_precision() {
        let user = NewUser::new("Test Hero", "test@hero.com", "Test Team").into_user();
        assert_eq!(user.created_at.nanosecond() % 1_000, 0);

        let entry = NewLeaderboardEntry {
            user_id: "123".into(),
            user_name: "Test Hero".into(),
            team: "Test Team".into(),
            total_calories: 1000,
            total_activities: 5,
            rank: 0,
        }
        .into_entry();
        assert_eq!(entry.updated_at.nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_entity_names_round_trip() {
        for entity in Entity::ALL {
            assert_eq!(Entity::from_name(entity.as_str()), Some(entity));
        }
        assert_eq!(Entity::from_name("segments"), None);
    }
}
