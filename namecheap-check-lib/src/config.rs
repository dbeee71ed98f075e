//! Credential handling and endpoint selection.
//!
//! Credentials are an explicit value passed into the client, never ambient
//! state: the library reads environment variables only through
//! [`load_env_config`], and the caller decides how to merge them with
//! whatever it collected elsewhere (CLI flags, config files, ...).

use crate::error::CheckError;
use std::env;

/// Production API endpoint.
pub const PRODUCTION_API_URL: &str = "https://api.namecheap.com/xml.response";

/// Sandbox (test/staging) API endpoint.
pub const SANDBOX_API_URL: &str = "https://api.sandbox.namecheap.com/xml.response";

/// API credentials for an availability run.
///
/// `username` falls back to `api_user` when absent; `client_ip` is optional
/// here because the caller may detect it separately (see
/// [`crate::get_public_ip`]).
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API user registered with the registrar
    pub api_user: String,

    /// API key for that user
    pub api_key: String,

    /// Account username; defaults to the API user
    pub username: Option<String>,

    /// Client IP to register with the API, if already known
    pub client_ip: Option<String>,
}

impl Credentials {
    /// Create credentials from an API user and key.
    pub fn new<U: Into<String>, K: Into<String>>(api_user: U, api_key: K) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: api_key.into(),
            username: None,
            client_ip: None,
        }
    }

    /// Set an explicit account username.
    pub fn with_username<N: Into<String>>(mut self, username: N) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set a known client IP, skipping auto-detection.
    pub fn with_client_ip<I: Into<String>>(mut self, client_ip: I) -> Self {
        self.client_ip = Some(client_ip.into());
        self
    }

    /// The effective account username: explicit value or the API user.
    pub fn username(&self) -> &str {
        match &self.username {
            Some(name) if !name.is_empty() => name,
            _ => &self.api_user,
        }
    }

    /// Verify that the required fields are present.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.api_user.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(CheckError::credentials(
                "missing API user or API key; set --api-user and --api-key \
                 or NAMECHEAP_API_USER/NAMECHEAP_API_KEY",
            ));
        }
        Ok(())
    }
}

/// Credential values read from the environment.
///
/// Every field is optional; the caller merges these with higher-precedence
/// sources (CLI flags win over environment variables).
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub api_user: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub client_ip: Option<String>,
}

/// Load credential settings from `NAMECHEAP_*` environment variables.
///
/// Empty values are treated as unset.
pub fn load_env_config() -> EnvConfig {
    EnvConfig {
        api_user: non_empty_env("NAMECHEAP_API_USER"),
        api_key: non_empty_env("NAMECHEAP_API_KEY"),
        username: non_empty_env("NAMECHEAP_USERNAME"),
        client_ip: non_empty_env("NAMECHEAP_CLIENT_IP"),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
