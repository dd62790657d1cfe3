use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{fetch_context, parse_context, ApiError};

const TOKEN_HEADER: &str = "X-Riot-Token";

/// HTTP client for JSON lookups with an optional API token
#[derive(Clone)]
pub struct JsonClient {
    client: Client,
    api_key: Option<String>,
    timeout: Duration,
}

impl JsonClient {
    pub fn new(user_agent: &str, timeout: Duration, api_key: Option<String>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout)?;

        Ok(Self {
            client,
            api_key,
            timeout,
        })
    }

    /// GET `url` and decode the body as `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            debug!("{}: {}", parse_context(std::any::type_name::<T>()), e);
            ApiError::Malformed(e.to_string())
        })
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        let response = self.send_get_request(url).await?;

        if let Some(err) = classify_status(response.status()) {
            debug!("{}: {}", fetch_context(url), response.status());
            return Err(err);
        }

        response.text().await.map_err(|e| self.map_transport_error(e))
    }

    fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(TOKEN_HEADER, key);
        }

        request.send().await.map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

/// Map a non-success status to the matching lookup error
pub fn classify_status(status: StatusCode) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        other => ApiError::Status(other.as_u16()),
    })
}
