//! Creates the sample accounts in the hosted backend.
//!
//! Run with:
//! ```
//! SUPABASE_URL=https://your-project.supabase.co \
//! SUPABASE_SERVICE_KEY=your-service-role-key \
//! cargo run -p sample-users --bin seed-users
//! ```
//!
//! A `.env` file in the working directory is read first if present.

use std::process::ExitCode;

use sample_users::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Before the subscriber, so RUST_LOG from .env applies. Missing .env is fine.
    let dotenv_path = dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let result = seed_sample_users(
        |name| std::env::var(name).ok(),
        SupabaseClient::new,
        SAMPLE_USERS,
        &mut ConsoleReport::stdout(),
    )
    .await;
    let code = exit_code(&result);

    match result {
        Ok(outcome) => {
            tracing::info!(
                created = outcome.len(),
                failed = outcome.failures.len(),
                "Seed completed"
            );
            Ok(code)
        }
        Err(SeedError::Config(e)) => {
            eprintln!("{}", e.remediation());
            Ok(code)
        }
        Err(SeedError::ClientInit(e)) => {
            eprintln!("{}", e.remediation());
            Ok(code)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Seeding aborted")),
    }
}
