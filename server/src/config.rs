//! Server configuration parsed from environment variables.
//!
//! Each upstream is optional: a missing credential disables that upstream
//! (its routes answer 503) instead of aborting startup.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENTFUL_ENVIRONMENT: &str = "master";
pub const DEFAULT_STORY_CONTENT_TYPE: &str = "stories";
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    /// Read `UPSTREAM_REQUEST_TIMEOUT_SECS` / `UPSTREAM_CONNECT_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse_u64("UPSTREAM_REQUEST_TIMEOUT_SECS", DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Default for UpstreamTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailchimpConfig {
    pub api_key: String,
    /// Data-center prefix, e.g. `us21`.
    pub server_prefix: String,
}

impl MailchimpConfig {
    /// Required: `MAILCHIMP_API_KEY`.
    ///
    /// Optional: `MAILCHIMP_SERVER_PREFIX`, derived from the key's `-usNN`
    /// suffix when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or no prefix can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_required("MAILCHIMP_API_KEY")?;
        let server_prefix = match env_optional("MAILCHIMP_SERVER_PREFIX") {
            Some(prefix) => prefix,
            None => prefix_from_key(&api_key).ok_or_else(|| ConfigError::Invalid {
                var: "MAILCHIMP_API_KEY",
                reason: "no data-center suffix and MAILCHIMP_SERVER_PREFIX not set".into(),
            })?,
        };
        Ok(Self { api_key, server_prefix })
    }

    /// Base URL of the Marketing API for this account.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}.api.mailchimp.com/3.0", self.server_prefix)
    }
}

/// `abc123-us21` -> `us21`.
fn prefix_from_key(api_key: &str) -> Option<String> {
    let (_, suffix) = api_key.rsplit_once('-')?;
    let valid = !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| suffix.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub story_content_type: String,
}

impl ContentfulConfig {
    /// Required: `CONTENTFUL_SPACE_ID`, `CONTENTFUL_ACCESS_TOKEN`.
    ///
    /// Optional: `CONTENTFUL_ENVIRONMENT` (default `master`),
    /// `CONTENTFUL_STORY_CONTENT_TYPE` (default `stories`).
    ///
    /// # Errors
    ///
    /// Returns an error if either required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            space_id: env_required("CONTENTFUL_SPACE_ID")?,
            access_token: env_required("CONTENTFUL_ACCESS_TOKEN")?,
            environment: env_optional("CONTENTFUL_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_CONTENTFUL_ENVIRONMENT.to_owned()),
            story_content_type: env_optional("CONTENTFUL_STORY_CONTENT_TYPE")
                .unwrap_or_else(|| DEFAULT_STORY_CONTENT_TYPE.to_owned()),
        })
    }

    /// Entries endpoint of the Content Delivery API for this space.
    #[must_use]
    pub fn entries_url(&self) -> String {
        format!(
            "https://cdn.contentful.com/spaces/{}/environments/{}/entries",
            self.space_id, self.environment
        )
    }
}

/// Listen port from `PORT`.
///
/// # Errors
///
/// Returns an error if `PORT` is set but not a valid port number.
pub fn port_from_env() -> Result<u16, ConfigError> {
    match env_optional("PORT") {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() }),
    }
}

fn env_required(key: &'static str) -> Result<String, ConfigError> {
    env_optional(key).ok_or(ConfigError::Missing { var: key })
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
