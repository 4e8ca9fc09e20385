//! Sample account seeding for the recipe-sharing backend.
//!
//! Creates each sample account through the Auth admin API, inserts its
//! profile row, and prints the generated ids for the SQL import that follows.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sample_users::prelude::*;
//!
//! let outcome = seed_sample_users(
//!     |name| std::env::var(name).ok(),
//!     SupabaseClient::new,
//!     SAMPLE_USERS,
//!     &mut ConsoleReport::stdout(),
//! )
//! .await?;
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod fixtures;
pub mod models;
pub mod report;

use std::io::Write;
use std::process::ExitCode;

use tracing::info;

use crate::api::{ApiError, BackendClient};
use crate::config::SeedConfig;
use crate::db::{SeedError, SeedOutcome, Seeder};
use crate::models::UserRecord;
use crate::report::ConsoleReport;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::api::{ApiError, BackendClient, NewAuthUser, SupabaseClient};
    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{FailureStage, SeedError, SeedFailure, SeedOutcome, Seeder};
    pub use crate::fixtures::{SAMPLE_PASSWORD, SAMPLE_USERS};
    pub use crate::models::{CreatedUser, ProfileRow, SkillLevel, UserRecord};
    pub use crate::report::ConsoleReport;
    pub use crate::{exit_code, seed_sample_users};
}

/// Prints the banner, resolves configuration, connects, and seeds `records`.
///
/// Configuration is checked before `connect` runs, so a missing variable
/// never reaches the network.
pub async fn seed_sample_users<L, F, C, W>(
    lookup: L,
    connect: F,
    records: &[UserRecord],
    report: &mut ConsoleReport<W>,
) -> Result<SeedOutcome, SeedError>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(&SeedConfig) -> Result<C, ApiError>,
    C: BackendClient,
    W: Write,
{
    report.banner()?;

    let config = SeedConfig::from_lookup(lookup)?;
    let client = connect(&config).map_err(SeedError::ClientInit)?;
    info!(url = %config.url, "Connected to backend");

    let outcome = Seeder::new(client).run(records, report).await?;
    report.summary(&outcome)?;
    report.next_steps()?;

    Ok(outcome)
}

/// Process exit status for a finished run.
///
/// Only fatal errors fail the process; records that failed individually were
/// already reported and still exit with success.
pub fn exit_code(result: &Result<SeedOutcome, SeedError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
