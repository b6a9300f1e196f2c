use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::analysis::validate_username;
use crate::error::{Error, Result};
use crate::models::{ComparisonData, ProfileData, Repository, RepositoryList};

/// Client for the `/api` endpoints served by [`crate::api::server`].
///
/// Usernames are validated before they are put into a URL. Any non-2xx
/// response is reported as a single opaque message; nothing is retried.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// `base_url` is the API root, e.g. `http://localhost:5328/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn profile(&self, username: &str) -> Result<ProfileData> {
        validate_username(username)?;
        let url = format!("{}/profile/{}", self.base_url, username);
        self.get_json(&url, "Failed to fetch profile").await
    }

    pub async fn compare(&self, user1: &str, user2: &str) -> Result<ComparisonData> {
        validate_username(user1)?;
        validate_username(user2)?;
        let url = format!("{}/compare/{}/{}", self.base_url, user1, user2);
        self.get_json(&url, "Failed to fetch comparison data").await
    }

    pub async fn repositories(&self, username: &str) -> Result<Vec<Repository>> {
        validate_username(username)?;
        let url = format!("{}/repositories/{}", self.base_url, username);
        let list: RepositoryList = self.get_json(&url, "Failed to fetch repositories").await?;
        Ok(list.repositories)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, failure: &str) -> Result<T> {
        tracing::debug!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Backend returned {} for {}", status, url);
            return Err(Error::Backend {
                status: status.as_u16(),
                message: failure.to_string(),
            });
        }

        // Decode through serde_json so shape mismatches surface as
        // serialization errors rather than transport errors.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
