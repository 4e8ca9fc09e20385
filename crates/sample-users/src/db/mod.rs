//! Seeding against the backend.
//!
//! The [`Seeder`] walks the sample records, creating each Auth account and
//! then its profile row, and collects the generated ids.

mod seeder;

pub use seeder::{FailureStage, SeedError, SeedFailure, SeedOutcome, Seeder};
