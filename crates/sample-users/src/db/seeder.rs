//! Account seeding loop.

use std::collections::BTreeMap;
use std::io::Write;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::{ApiError, BackendClient, NewAuthUser};
use crate::config::ConfigError;
use crate::models::{CreatedUser, PROFILE_TABLE, ProfileRow, UserRecord};
use crate::report::ConsoleReport;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Client initialization failed: {0}")]
    ClientInit(ApiError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which remote call a record failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Auth,
    Profile,
}

impl FailureStage {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureStage::Auth => "auth",
            FailureStage::Profile => "profile",
        }
    }
}

/// A per-record failure that was reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFailure {
    pub email: String,
    pub stage: FailureStage,
    pub message: String,
}

/// Result of a seeding run.
#[derive(Debug, Default)]
pub struct SeedOutcome {
    /// Accounts the Auth service accepted, in creation order.
    pub created: Vec<CreatedUser>,
    /// Records that failed at either stage.
    pub failures: Vec<SeedFailure>,
}

impl SeedOutcome {
    /// Number of accounts created.
    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    /// Looks up the generated id for `email`.
    pub fn get(&self, email: &str) -> Option<Uuid> {
        self.created
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.id)
    }

    /// Email to generated id for every created account.
    pub fn user_ids(&self) -> BTreeMap<String, Uuid> {
        self.created
            .iter()
            .map(|user| (user.email.clone(), user.id))
            .collect()
    }
}

/// Creates accounts and their profiles one record at a time.
pub struct Seeder<C> {
    client: C,
}

impl<C: BackendClient> Seeder<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Seeds every record in order.
    ///
    /// Remote failures are reported and skipped; only a failed console write
    /// stops the run.
    pub async fn run<W: Write>(
        &self,
        records: &[UserRecord],
        report: &mut ConsoleReport<W>,
    ) -> Result<SeedOutcome, SeedError> {
        info!("Seeding {} users...", records.len());
        report.creating_users()?;

        let mut outcome = SeedOutcome::default();

        for record in records {
            let id = match self.create_account(record).await {
                Ok(id) => id,
                Err(e) => {
                    warn!(
                        email = record.email,
                        stage = FailureStage::Auth.as_str(),
                        error = %e,
                        "Failed to create auth user"
                    );
                    report.user_failed(record.email, &e)?;
                    outcome.failures.push(SeedFailure {
                        email: record.email.to_string(),
                        stage: FailureStage::Auth,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            outcome.created.push(CreatedUser {
                email: record.email.to_string(),
                id,
            });
            report.user_created(record.email, id)?;

            // No compensating delete: the Auth account stays if this fails.
            match self.insert_profile(id, record).await {
                Ok(()) => report.profile_created(record.username)?,
                Err(e) => {
                    warn!(
                        email = record.email,
                        user_id = %id,
                        stage = FailureStage::Profile.as_str(),
                        error = %e,
                        "Failed to insert profile"
                    );
                    report.profile_failed(record.username, record.email, &e)?;
                    outcome.failures.push(SeedFailure {
                        email: record.email.to_string(),
                        stage: FailureStage::Profile,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            created = outcome.len(),
            failed = outcome.failures.len(),
            "Seeded {} of {} users",
            outcome.len(),
            records.len()
        );
        Ok(outcome)
    }

    async fn create_account(&self, record: &UserRecord) -> Result<Uuid, ApiError> {
        self.client
            .create_user(&NewAuthUser {
                email: record.email,
                password: record.password,
                email_confirm: true,
            })
            .await
    }

    async fn insert_profile(&self, id: Uuid, record: &UserRecord) -> Result<(), ApiError> {
        let row = ProfileRow::new(id, record).and_then(serde_json::to_value)?;
        self.client.insert_row(PROFILE_TABLE, row).await
    }
}
