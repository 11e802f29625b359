use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use shared_types::{AppError, DashboardConfig};

/// Thin wrapper around `reqwest::Client` bound to the API base URL.
///
/// Every request carries the caller's token as a bearer credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` a JSON resource.
    ///
    /// Transport failures map to `Network`, non-2xx statuses go through
    /// [`AppError::from_status`], and bodies that fail to deserialize map to
    /// `Decode`.
    #[tracing::instrument(skip(self, token), fields(base_url = %self.base_url))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }
}
