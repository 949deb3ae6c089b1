//! Entity generators for demo data.
//!
//! - [`ActivityGenerator`]: random activity histories for seeded users

pub mod activity;

pub use activity::ActivityGenerator;
