//! Backend access for seeding.
//!
//! [`BackendClient`] is the narrow seam the seeder talks to: one call to create
//! an Auth account and one to insert a table row. [`SupabaseClient`] implements
//! it over the Auth admin and REST endpoints of a hosted project.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::SeedConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{message} (status {status})")]
    Remote { status: StatusCode, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("HTTP client could not be initialized: {0}")]
    ClientInit(String),
}

impl ApiError {
    /// Operator-facing instructions for a client that failed to start.
    pub fn remediation(&self) -> String {
        format!(
            "ERROR: {self}\n\
             The HTTP client could not start. Check that the system TLS certificates \
             are installed and that {} contains only printable characters.",
            crate::config::SERVICE_KEY_VAR
        )
    }
}

/// Payload of the Auth admin "create user" call.
#[derive(Debug, Clone, Serialize)]
pub struct NewAuthUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// Marks the email as already verified so no confirmation mail goes out.
    pub email_confirm: bool,
}

/// Remote operations the seeder needs from the backend.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Creates an Auth account and returns its generated id.
    async fn create_user(&self, user: &NewAuthUser<'_>) -> Result<Uuid, ApiError>;

    /// Inserts a single row into `table`.
    async fn insert_row(&self, table: &str, row: Value) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
}

/// The admin endpoint returns the user object directly; some versions wrap it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CreateUserResponse {
    Wrapped { user: AuthUser },
    Bare(AuthUser),
}

impl CreateUserResponse {
    fn into_id(self) -> Uuid {
        match self {
            CreateUserResponse::Wrapped { user } | CreateUserResponse::Bare(user) => user.id,
        }
    }
}

/// HTTP client for a hosted Supabase project, authenticated with the service key.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
}

impl SupabaseClient {
    /// Creates a client for the configured project.
    pub fn new(config: &SeedConfig) -> Result<Self, ApiError> {
        let key = HeaderValue::from_str(&config.service_key)
            .map_err(|e| ApiError::ClientInit(format!("invalid service key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_key))
            .map_err(|e| ApiError::ClientInit(format!("invalid service key: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the project base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BackendClient for SupabaseClient {
    async fn create_user(&self, user: &NewAuthUser<'_>) -> Result<Uuid, ApiError> {
        let url = format!("{}/auth/v1/admin/users", self.base_url);
        debug!(email = user.email, "Creating auth user");

        let resp = self.client.post(&url).json(user).send().await?;
        let resp = ensure_success(resp).await?;

        let body = resp.text().await?;
        let created: CreateUserResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("create user response: {e}")))?;
        Ok(created.into_id())
    }

    async fn insert_row(&self, table: &str, row: Value) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        debug!(table, "Inserting row");

        let resp = self
            .client
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into [`ApiError::Remote`].
async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Remote {
        status,
        message: error_message(&body, status),
    })
}

/// Picks the human-readable part of an error body.
///
/// Auth errors use `msg`, REST errors use `message`, OAuth-style errors use
/// `error_description` or `error`.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(Value::String(text)) = fields.get(key) {
                return text.clone();
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
