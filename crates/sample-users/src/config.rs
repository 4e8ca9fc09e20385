//! Configuration for the seeding run.

use thiserror::Error;

/// Environment variable holding the backend project URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the service role key.
pub const SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

impl ConfigError {
    /// Operator-facing instructions for fixing the configuration.
    pub fn remediation(&self) -> String {
        format!(
            "ERROR: {URL_VAR} and {SERVICE_KEY_VAR} environment variables must be set\n\
             \n\
             To set them:\n  \
             export {URL_VAR}='https://your-project.supabase.co'\n  \
             export {SERVICE_KEY_VAR}='your-service-role-key'\n\
             \n\
             Or create a .env file with:\n  \
             {URL_VAR}=https://your-project.supabase.co\n  \
             {SERVICE_KEY_VAR}=your-service-role-key"
        )
    }
}

/// Connection settings for the backend.
#[derive(Clone)]
pub struct SeedConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    /// Privileged service role key.
    pub service_key: String,
}

impl SeedConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the configuration through `lookup`.
    ///
    /// Empty values count as missing; any other value, whitespace included, is kept.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let url = read(URL_VAR);
        let service_key = read(SERVICE_KEY_VAR);

        match (url, service_key) {
            (Some(url), Some(service_key)) => Ok(Self {
                url: url.trim_end_matches('/').to_string(),
                service_key,
            }),
            (url, service_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_VAR);
                }
                if service_key.is_none() {
                    missing.push(SERVICE_KEY_VAR);
                }
                Err(ConfigError::Missing(missing))
            }
        }
    }
}

// The service key must never end up in logs.
impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .finish()
    }
}
