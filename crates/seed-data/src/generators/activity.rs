//! Random activity generation for seeded users.

use rand::Rng;
use time::{Date, Duration};

use octofit::models::{NewActivity, User};

use crate::config::SeedConfig;
use crate::fixtures::ACTIVITY_TYPES;

/// Generates a user's activity history.
pub struct ActivityGenerator {
    config: SeedConfig,
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityGenerator {
    /// Creates a generator with the default ranges.
    pub fn new() -> Self {
        Self::with_config(SeedConfig::default())
    }

    pub fn with_config(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Generates between `activities_per_user` activities for `user`, dated
    /// relative to `today`.
    pub fn generate_for_user(&self, user: &User, today: Date, rng: &mut impl Rng) -> Vec<NewActivity> {
        let count = rng.gen_range(self.config.activities_per_user.clone());
        (0..count)
            .map(|_| self.generate_one(user, today, rng))
            .collect()
    }

    fn generate_one(&self, user: &User, today: Date, rng: &mut impl Rng) -> NewActivity {
        let activity_type = ACTIVITY_TYPES[rng.gen_range(0..ACTIVITY_TYPES.len())];
        let duration = rng.gen_range(self.config.duration_minutes.clone());
        let calories = duration * rng.gen_range(self.config.calories_per_minute.clone());
        let days_ago = rng.gen_range(0..=self.config.max_days_ago);

        NewActivity {
            user_id: user.id.to_string(),
            user_name: user.name.clone(),
            activity_type: activity_type.to_string(),
            duration,
            calories,
            date: today - Duration::days(days_ago),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofit::models::NewUser;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    fn hero() -> User {
        NewUser::new("Thor", "thor.odinson@marvel.com", "Team Marvel").into_user()
    }

    #[test]
    fn test_generated_activities_within_ranges() {
        let mut rng = StdRng::seed_from_u64(12345);
        let today = date!(2025 - 06 - 15);
        let user = hero();

        for _ in 0..20 {
            let activities = ActivityGenerator::new().generate_for_user(&user, today, &mut rng);
            assert!((5..=10).contains(&activities.len()));

            for activity in &activities {
                assert_eq!(activity.user_id, user.id.to_string());
                assert_eq!(activity.user_name, "Thor");
                assert!(ACTIVITY_TYPES.contains(&activity.activity_type.as_str()));
                assert!((30..=120).contains(&activity.duration));
                assert_eq!(activity.calories % activity.duration, 0);
                assert!((8..=12).contains(&(activity.calories / activity.duration)));
                assert!(activity.date <= today);
                assert!(activity.date >= date!(2025 - 05 - 16));
            }
        }
    }

    #[test]
    fn test_same_seed_same_activities() {
        let today = date!(2025 - 06 - 15);
        let user = hero();
        let generator = ActivityGenerator::new();

        let first = generator.generate_for_user(&user, today, &mut StdRng::seed_from_u64(7));
        let second = generator.generate_for_user(&user, today, &mut StdRng::seed_from_u64(7));

        let key = |a: &NewActivity| (a.activity_type.clone(), a.duration, a.calories, a.date);
        assert_eq!(
            first.iter().map(key).collect::<Vec<_>>(),
            second.iter().map(key).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_custom_config() {
        let config = SeedConfig::default()
            .with_activities_per_user(1..=1)
            .with_max_days_ago(0);
        let today = date!(2025 - 06 - 15);
        let activities = ActivityGenerator::with_config(config).generate_for_user(
            &hero(),
            today,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].date, today);
    }
}
