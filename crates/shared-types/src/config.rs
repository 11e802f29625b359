use serde::{Deserialize, Serialize};

/// Base URL used when `config.toml` does not name one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

/// Where the remote API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Token persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// Top-level structure of `config.toml`.
///
/// Every field has a default, so an empty or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

impl DashboardConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Replace the base URL, ignoring blank overrides.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Base URL without trailing slashes, ready for `format!("{base}{path}")`.
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
