//! Leaderboard aggregation and ranking.
//!
//! Ranks are 1-based positions after a stable sort by total calories,
//! highest first. Entries with equal totals keep their incoming order.

use crate::models::{Activity, LeaderboardEntry};

pub trait ActivityMetric {
    type Score;
    fn next_activity(&mut self, activity: &Activity);
    fn finish(&mut self) -> Self::Score;
}

/// Calorie sum and activity count for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_calories: i32,
    pub total_activities: i32,
}

#[derive(Debug, Clone, Default)]
struct CalorieMetric {
    total: i32,
}

impl ActivityMetric for CalorieMetric {
    type Score = i32;
    fn next_activity(&mut self, activity: &Activity) {
        self.total += activity.calories;
    }

    fn finish(&mut self) -> i32 {
        self.total
    }
}

#[derive(Debug, Clone, Default)]
struct CountMetric {
    count: i32,
}

impl ActivityMetric for CountMetric {
    type Score = i32;
    fn next_activity(&mut self, _activity: &Activity) {
        self.count += 1;
    }

    fn finish(&mut self) -> i32 {
        self.count
    }
}

#[derive(Debug, Clone, Default)]
struct TotalsMetric {
    calories: CalorieMetric,
    count: CountMetric,
}

impl ActivityMetric for TotalsMetric {
    type Score = Totals;
    fn next_activity(&mut self, activity: &Activity) {
        self.calories.next_activity(activity);
        self.count.next_activity(activity);
    }

    fn finish(&mut self) -> Totals {
        Totals {
            total_calories: self.calories.finish(),
            total_activities: self.count.finish(),
        }
    }
}

/// Sums calories and counts the given activities.
pub fn totals<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> Totals {
    let mut acc = TotalsMetric::default();
    for activity in activities {
        acc.next_activity(activity);
    }
    acc.finish()
}

/// Sorts `entries` by total calories descending and sets `rank` to 1..=N.
pub fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    // sort_by is stable, so ties keep their incoming order
    entries.sort_by(|a, b| b.total_calories.cmp(&a.total_calories));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position as i32 + 1;
    }
}

/// Orders entries for display by rank ascending.
///
/// When any entry is still unranked the whole set is ranked on the fly with
/// [`assign_ranks`]; nothing is written back.
pub fn ranked_for_display(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    if entries.iter().any(|e| !e.is_ranked()) {
        assign_ranks(&mut entries);
    } else {
        entries.sort_by_key(|e| e.rank);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewActivity, NewLeaderboardEntry};
    use time::macros::date;

    fn entry(name: &str, calories: i32, rank: i32) -> LeaderboardEntry {
        NewLeaderboardEntry {
            user_id: name.to_lowercase(),
            user_name: name.to_string(),
            team: "Test Team".to_string(),
            total_calories: calories,
            total_activities: 1,
            rank,
        }
        .into_entry()
    }

    fn activity(calories: i32) -> Activity {
        NewActivity {
            user_id: "123".to_string(),
            user_name: "Test Hero".to_string(),
            activity_type: "Yoga".to_string(),
            duration: 40,
            calories,
            date: date!(2025 - 01 - 15),
        }
        .into_activity()
    }

    #[test]
    fn test_totals_sums_calories_and_counts() {
        let activities = vec![activity(400), activity(350), activity(900)];
        let t = totals(&activities);
        assert_eq!(t.total_calories, 1650);
        assert_eq!(t.total_activities, 3);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(totals(&Vec::<Activity>::new()), Totals::default());
    }

    #[test]
    fn test_assign_ranks_descending_calories() {
        let mut entries = vec![
            entry("Thor", 800, 0),
            entry("Hulk", 1200, 0),
            entry("Flash", 1000, 0),
        ];
        assign_ranks(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.user_name.as_str()).collect();
        assert_eq!(names, ["Hulk", "Flash", "Thor"]);
        let ranks: Vec<i32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn test_assign_ranks_ties_keep_incoming_order() {
        let mut entries = vec![
            entry("Batman", 500, 0),
            entry("Superman", 700, 0),
            entry("Aquaman", 500, 0),
        ];
        assign_ranks(&mut entries);

        assert_eq!(entries[0].user_name, "Superman");
        assert_eq!(entries[1].user_name, "Batman");
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[2].user_name, "Aquaman");
        assert_eq!(entries[2].rank, 3);
    }

    #[test]
    fn test_ranked_for_display_keeps_stored_ranks() {
        // Stored ranks win over calories once every entry is ranked.
        let entries = vec![entry("Thor", 2000, 2), entry("Hulk", 1000, 1)];
        let shown = ranked_for_display(entries);
        assert_eq!(shown[0].user_name, "Hulk");
        assert_eq!(shown[0].rank, 1);
        assert_eq!(shown[1].rank, 2);
    }

    #[test]
    fn test_ranked_for_display_ranks_unranked_entries() {
        let entries = vec![entry("Another Hero", 800, 0), entry("Test Hero", 1000, 0)];
        let shown = ranked_for_display(entries);
        assert_eq!(shown[0].user_name, "Test Hero");
        assert_eq!(shown[0].rank, 1);
        assert_eq!(shown[1].rank, 2);
    }
}
