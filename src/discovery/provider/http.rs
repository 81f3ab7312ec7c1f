use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::discovery::{DiscoveryError, Result};

/// HTTP client wrapper shared by the provider adapters.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client against a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("cinetrack/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Build full URL from endpoint
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Execute GET request with query parameters and parse JSON response
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        let mut request = self.client.get(&url).query(params).header("Accept", "application/json");
        if let Some(ref token) = self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(DiscoveryError::Network)?;
        Self::handle_response(response).await
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();

            return Err(DiscoveryError::Api {
                status: status_code,
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DiscoveryError::Parse(format!("JSON parse error: {e}")))
    }
}
