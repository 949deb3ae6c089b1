//! Store integration for seeding demo data.
//!
//! The [`Seeder`] clears every table and writes the fixed teams, heroes and
//! workouts along with randomly generated activities and a ranked
//! leaderboard.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
