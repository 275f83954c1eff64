use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use tracing::{debug, warn};

const DEFAULT_EMAIL: &str = "user@example.com";
const DEFAULT_PASSWORD: &str = "password123";
const REDACTED: &str = "***";

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// Login credentials for the Tourist Hub API
///
/// `Debug` and `Display` never print the password.
pub struct Credentials {
    /// E-mail address used to log in
    pub email_address: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    fn redacted(&self) -> Value {
        json!({
            "email_address": self.email_address,
            "password": REDACTED
        })
    }
}

/// Pretty JSON for `{:?}`, compact JSON for `{}`, like the derived displays
fn write_redacted(f: &mut fmt::Formatter<'_>, value: &Value, pretty: bool) -> fmt::Result {
    if pretty {
        let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_redacted(f, &self.redacted(), true)
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_redacted(f, &self.redacted(), false)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Tourist Hub API
    pub base_url: String,
    /// Timeout in seconds for REST API requests (0 disables it)
    pub timeout: u64,
}

impl RestApiConfig {
    /// REST settings for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Tourist Hub client
pub struct Config {
    /// Login credentials used by the demos
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    fn redacted(&self) -> Value {
        json!({
            "credentials": self.credentials.redacted(),
            "rest_api": self.rest_api
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_redacted(f, &self.redacted(), true)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_redacted(f, &self.redacted(), false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env` when present)
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TOURIST_HUB_BASE_URL` | `http://localhost:3000` |
    /// | `TOURIST_HUB_TIMEOUT` | `30` |
    /// | `TOURIST_HUB_EMAIL` | `user@example.com` |
    /// | `TOURIST_HUB_PASSWORD` | `password123` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email_address = get_env_or_default("TOURIST_HUB_EMAIL", String::from(DEFAULT_EMAIL));
        let password = get_env_or_default("TOURIST_HUB_PASSWORD", String::from(DEFAULT_PASSWORD));

        if email_address == DEFAULT_EMAIL {
            warn!("TOURIST_HUB_EMAIL not found in environment variables or .env file");
        }
        if password == DEFAULT_PASSWORD {
            warn!("TOURIST_HUB_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                email_address,
                password,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "TOURIST_HUB_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("TOURIST_HUB_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Configuration pointing at `base_url`, without reading the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                email_address: String::from(DEFAULT_EMAIL),
                password: String::from(DEFAULT_PASSWORD),
            },
            rest_api: RestApiConfig::new(base_url),
        }
    }

    /// Replaces the credentials
    #[must_use]
    pub fn with_credentials(mut self, email_address: &str, password: &str) -> Self {
        self.credentials = Credentials {
            email_address: email_address.to_string(),
            password: password.to_string(),
        };
        self
    }
}
