//! Demo data generation for OctoFit.
//!
//! Populates a store with two superhero teams, their twelve members, a random
//! activity history per member, a ranked leaderboard and a fixed workout
//! catalog.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use seed_data::prelude::*;
//!
//! let store: SharedStore = Arc::new(MemoryStore::new());
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let summary = Seeder::new(store).populate(&mut rng).await?;
//! assert_eq!(summary.users, 12);
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod generators;

// Re-export core types from octofit crate
pub use octofit::memory_store::MemoryStore;
pub use octofit::store::{SharedStore, Store};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::generators::ActivityGenerator;
    pub use crate::{MemoryStore, SharedStore, Store};
}
