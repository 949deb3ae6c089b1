//! Fixed demo records: the two superhero teams, their twelve members,
//! the activity types and the workout catalog.

use octofit::models::{NewTeam, NewUser, NewWorkout};

pub const TEAM_MARVEL: &str = "Team Marvel";
pub const TEAM_DC: &str = "Team DC";

/// `(name, description)`
pub const TEAMS: [(&str, &str); 2] = [
    (TEAM_MARVEL, "Earth's Mightiest Heroes fighting for fitness!"),
    (TEAM_DC, "The Justice League of fitness champions!"),
];

/// `(name, email, team)`
pub const HEROES: [(&str, &str, &str); 12] = [
    ("Iron Man", "tony.stark@marvel.com", TEAM_MARVEL),
    ("Captain America", "steve.rogers@marvel.com", TEAM_MARVEL),
    ("Thor", "thor.odinson@marvel.com", TEAM_MARVEL),
    ("Black Widow", "natasha.romanoff@marvel.com", TEAM_MARVEL),
    ("Hulk", "bruce.banner@marvel.com", TEAM_MARVEL),
    ("Spider-Man", "peter.parker@marvel.com", TEAM_MARVEL),
    ("Superman", "clark.kent@dc.com", TEAM_DC),
    ("Batman", "bruce.wayne@dc.com", TEAM_DC),
    ("Wonder Woman", "diana.prince@dc.com", TEAM_DC),
    ("Flash", "barry.allen@dc.com", TEAM_DC),
    ("Aquaman", "arthur.curry@dc.com", TEAM_DC),
    ("Green Lantern", "hal.jordan@dc.com", TEAM_DC),
];

pub const ACTIVITY_TYPES: [&str; 7] = [
    "Running",
    "Cycling",
    "Swimming",
    "Weightlifting",
    "Yoga",
    "Boxing",
    "HIIT",
];

struct WorkoutFixture {
    name: &'static str,
    description: &'static str,
    difficulty: &'static str,
    duration: i32,
    calories_estimate: i32,
    category: &'static str,
}

const WORKOUTS: [WorkoutFixture; 10] = [
    WorkoutFixture {
        name: "Super Soldier Training",
        description: "Captain America's intense full-body workout",
        difficulty: "Hard",
        duration: 60,
        calories_estimate: 600,
        category: "Strength",
    },
    WorkoutFixture {
        name: "Asgardian Thunder Circuit",
        description: "Thor's hammer-swinging power routine",
        difficulty: "Hard",
        duration: 45,
        calories_estimate: 550,
        category: "Strength",
    },
    WorkoutFixture {
        name: "Web-Slinger Cardio",
        description: "Spider-Man's agility and endurance workout",
        difficulty: "Medium",
        duration: 30,
        calories_estimate: 400,
        category: "Cardio",
    },
    WorkoutFixture {
        name: "Bat-Cave HIIT",
        description: "Batman's high-intensity interval training",
        difficulty: "Hard",
        duration: 40,
        calories_estimate: 500,
        category: "HIIT",
    },
    WorkoutFixture {
        name: "Amazon Warrior Training",
        description: "Wonder Woman's combat-ready workout",
        difficulty: "Medium",
        duration: 50,
        calories_estimate: 550,
        category: "Combat",
    },
    WorkoutFixture {
        name: "Speed Force Sprint",
        description: "Flash's super-speed running program",
        difficulty: "Easy",
        duration: 25,
        calories_estimate: 350,
        category: "Cardio",
    },
    WorkoutFixture {
        name: "Stark Tech Core",
        description: "Iron Man's core strengthening routine",
        difficulty: "Medium",
        duration: 35,
        calories_estimate: 400,
        category: "Core",
    },
    WorkoutFixture {
        name: "Atlantean Swimming",
        description: "Aquaman's underwater endurance training",
        difficulty: "Medium",
        duration: 45,
        calories_estimate: 450,
        category: "Swimming",
    },
    WorkoutFixture {
        name: "Green Lantern's Will Power Yoga",
        description: "Focus and flexibility training",
        difficulty: "Easy",
        duration: 40,
        calories_estimate: 250,
        category: "Yoga",
    },
    WorkoutFixture {
        name: "Hulk Smash Strength Training",
        description: "Maximum power weightlifting routine",
        difficulty: "Hard",
        duration: 55,
        calories_estimate: 650,
        category: "Strength",
    },
];

pub fn teams() -> Vec<NewTeam> {
    TEAMS
        .iter()
        .map(|(name, description)| NewTeam::new(*name, *description))
        .collect()
}

pub fn heroes() -> Vec<NewUser> {
    HEROES
        .iter()
        .map(|(name, email, team)| NewUser::new(*name, *email, *team))
        .collect()
}

pub fn workouts() -> Vec<NewWorkout> {
    WORKOUTS
        .iter()
        .map(|w| NewWorkout {
            name: w.name.to_string(),
            description: w.description.to_string(),
            difficulty: w.difficulty.to_string(),
            duration: w.duration,
            calories_estimate: w.calories_estimate,
            category: w.category.to_string(),
        })
        .collect()
}

pub fn workout_names() -> impl Iterator<Item = &'static str> {
    WORKOUTS.iter().map(|w| w.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_heroes_per_team() {
        for (team, _) in TEAMS {
            let members = HEROES.iter().filter(|(_, _, t)| *t == team).count();
            assert_eq!(members, 6, "{team}");
        }
    }

    #[test]
    fn test_hero_emails_unique() {
        let mut emails: Vec<_> = HEROES.iter().map(|(_, email, _)| *email).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), HEROES.len());
    }

    #[test]
    fn test_workout_catalog() {
        let workouts = workouts();
        assert_eq!(workouts.len(), 10);
        let hulk = workouts
            .iter()
            .find(|w| w.name == "Hulk Smash Strength Training")
            .unwrap();
        assert_eq!(hulk.calories_estimate, 650);
        assert_eq!(hulk.difficulty, "Hard");
    }
}
