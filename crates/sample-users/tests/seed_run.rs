//! End-to-end runs of `seed_sample_users` against an in-memory backend.
//!
//! The recording backend counts every remote call so the tests can check
//! what reached the "network" and in which order.

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use sample_users::prelude::*;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    CreateUser(String),
    InsertRow(String, Value),
}

/// Backend double shared between the test and the seeder.
#[derive(Clone, Default)]
struct RecordingBackend {
    calls: Arc<Mutex<Vec<Call>>>,
    duplicate_emails: Vec<String>,
}

impl RecordingBackend {
    fn rejecting(email: &str) -> Self {
        Self {
            duplicate_emails: vec![email.to_string()],
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendClient for RecordingBackend {
    async fn create_user(&self, user: &NewAuthUser<'_>) -> Result<Uuid, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreateUser(user.email.to_string()));

        if self.duplicate_emails.iter().any(|e| e == user.email) {
            return Err(ApiError::Remote {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "A user with this email address has already been registered".to_string(),
            });
        }
        Ok(Uuid::new_v4())
    }

    async fn insert_row(&self, table: &str, row: Value) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::InsertRow(table.to_string(), row));
        Ok(())
    }
}

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

fn full_env() -> impl Fn(&str) -> Option<String> {
    env(&[
        ("SUPABASE_URL", "https://demo.supabase.co"),
        ("SUPABASE_SERVICE_KEY", "service-key"),
    ])
}

async fn seed(
    lookup: impl Fn(&str) -> Option<String>,
    backend: &RecordingBackend,
) -> (Result<SeedOutcome, SeedError>, String) {
    let mut report = ConsoleReport::new(Vec::new());
    let connect_backend = backend.clone();
    let result = seed_sample_users(
        lookup,
        move |_config: &SeedConfig| Ok(connect_backend),
        SAMPLE_USERS,
        &mut report,
    )
    .await;
    let output = String::from_utf8(report.into_inner()).unwrap();
    (result, output)
}

#[tokio::test]
async fn test_all_sample_users_created() {
    let backend = RecordingBackend::default();
    let (result, output) = seed(full_env(), &backend).await;
    let outcome = result.unwrap();

    assert_eq!(SAMPLE_USERS.len(), 10);
    assert_eq!(outcome.len(), 10);
    assert!(output.contains("Successfully created 10 users"));

    let ids = outcome.user_ids();
    assert_eq!(ids.len(), 10);

    // Each create is immediately followed by the insert for the same id.
    let calls = backend.calls();
    assert_eq!(calls.len(), 20);
    for (pair, record) in calls.chunks(2).zip(SAMPLE_USERS) {
        assert_eq!(pair[0], Call::CreateUser(record.email.to_string()));
        match &pair[1] {
            Call::InsertRow(table, row) => {
                assert_eq!(table, "users");
                assert_eq!(row["username"], record.username);
                assert_eq!(row["id"], ids[record.email].to_string());
                assert_eq!(row["chef_score"], 0.0);
            }
            other => panic!("expected insert, got {other:?}"),
        }
        assert!(output.contains(&format!("  {}: {}", record.email, ids[record.email])));
    }
}

#[tokio::test]
async fn test_duplicate_account_is_skipped() {
    let backend = RecordingBackend::rejecting("david.kim@example.com");
    let (result, output) = seed(full_env(), &backend).await;
    let outcome = result.unwrap();

    assert_eq!(outcome.len(), SAMPLE_USERS.len() - 1);
    assert!(!outcome.user_ids().contains_key("david.kim@example.com"));
    assert!(output.contains("✗ Error creating david.kim@example.com: A user with this email"));
    assert!(output.contains("Successfully created 9 users"));

    let inserts_for_david = backend
        .calls()
        .iter()
        .filter(|call| {
            matches!(call, Call::InsertRow(_, row) if row["email"] == "david.kim@example.com")
        })
        .count();
    assert_eq!(inserts_for_david, 0);

    // The records after the failure still run.
    assert!(outcome.get("maria.garcia@example.com").is_some());
}

#[tokio::test]
async fn test_missing_url_makes_no_calls() {
    let backend = RecordingBackend::default();
    let (result, output) = seed(env(&[("SUPABASE_SERVICE_KEY", "service-key")]), &backend).await;

    assert!(matches!(
        result,
        Err(SeedError::Config(ConfigError::Missing(ref vars))) if vars == &["SUPABASE_URL"]
    ));
    assert!(backend.calls().is_empty());

    // Only the banner made it out before the configuration check.
    assert!(output.starts_with("Sample User Creation Script for Cookpad App\n"));
    assert!(!output.contains("Creating users"));
    assert!(!output.contains("Successfully created"));
}

#[tokio::test]
async fn test_missing_service_key_makes_no_calls() {
    let backend = RecordingBackend::default();
    let (result, _) = seed(env(&[("SUPABASE_URL", "https://demo.supabase.co")]), &backend).await;

    assert!(matches!(result, Err(SeedError::Config(_))));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_connect_not_attempted_without_config() {
    let mut report = ConsoleReport::new(Vec::new());
    let connected = Arc::new(Mutex::new(false));
    let flag = connected.clone();

    let result = seed_sample_users(
        env(&[]),
        move |_config: &SeedConfig| {
            *flag.lock().unwrap() = true;
            Ok(RecordingBackend::default())
        },
        SAMPLE_USERS,
        &mut report,
    )
    .await;

    assert!(result.is_err());
    assert!(!*connected.lock().unwrap());
}

#[tokio::test]
async fn test_client_init_failure_is_fatal() {
    let mut report = ConsoleReport::new(Vec::new());
    let result = seed_sample_users(
        full_env(),
        |_config: &SeedConfig| -> Result<RecordingBackend, ApiError> {
            Err(ApiError::ClientInit("no TLS backend".to_string()))
        },
        SAMPLE_USERS,
        &mut report,
    )
    .await;

    match result {
        Err(SeedError::ClientInit(e)) => assert!(e.remediation().contains("no TLS backend")),
        other => panic!("expected client init error, got {other:?}"),
    }
    let output = String::from_utf8(report.into_inner()).unwrap();
    assert!(output.starts_with("Sample User Creation Script for Cookpad App\n"));
    assert!(!output.contains("Creating users"));
}

#[tokio::test]
async fn test_supabase_client_connects_from_config() {
    let config = SeedConfig::from_lookup(full_env()).unwrap();
    let client = SupabaseClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://demo.supabase.co");
}

#[tokio::test]
async fn test_missing_config_exits_with_failure() {
    let backend = RecordingBackend::default();
    let (result, _) = seed(env(&[]), &backend).await;

    assert!(matches!(result, Err(SeedError::Config(_))));
    assert_eq!(exit_code(&result), ExitCode::FAILURE);
}

#[test]
fn test_client_init_error_exits_with_failure() {
    let err = SeedError::ClientInit(ApiError::ClientInit("no TLS backend".to_string()));
    let result: Result<SeedOutcome, SeedError> = Err(err);
    assert_eq!(exit_code(&result), ExitCode::FAILURE);
}

#[tokio::test]
async fn test_partial_success_exits_with_success() {
    let backend = RecordingBackend::rejecting("sophie.martin@example.com");
    let (result, _) = seed(full_env(), &backend).await;

    let outcome = result.as_ref().unwrap();
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].email, "sophie.martin@example.com");
    assert_eq!(outcome.failures[0].stage, FailureStage::Auth);
    assert_eq!(exit_code(&result), ExitCode::SUCCESS);
}
