use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::rate_limiter::{header_number, seconds_until_reset, RateLimiter};
use crate::github::source::ProfileSource;
use crate::models::{ApiRepository, GitHubProfile, GitHubUser, Repository};

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    max_repositories: u32,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        if config.max_repositories == 0 {
            return Err(Error::Config("max_repositories must be greater than 0".to_string()));
        }

        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("gitinsights/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.rate_limit_max_wait, config.requests_per_minute),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            max_repositories: config.max_repositories,
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        self.rate_limiter.wait().await?;
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        self.rate_limiter.update_from_headers(response.headers()).await;
        let response = check_status(response, username).await?;

        Ok(response.json().await?)
    }

    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<ApiRepository>> {
        let url = format!(
            "{}/users/{}/repos?type=owner&sort=updated&direction=desc",
            self.base_url, username
        );
        let paginator = Paginator::new(&self.client, &self.rate_limiter);
        tracing::info!("Fetching repositories for: {}", username);
        paginator
            .fetch_limited(&url, username, 100, self.max_repositories)
            .await
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile> {
        Ok(self.get_user(username).await?.into())
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let repos = self.get_user_repos(username).await?;
        Ok(repos.into_iter().map(Repository::from).collect())
    }

    fn name(&self) -> &str {
        "github"
    }
}

/// Maps a non-success GitHub response onto the error taxonomy.
pub(crate) async fn check_status(response: Response, username: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(Error::UserNotFound(username.to_string()));
    }

    let headers = response.headers();
    let quota_exhausted = header_number::<u32>(headers, "x-ratelimit-remaining")
        .map_or(true, |remaining| remaining == 0);
    if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && quota_exhausted)
    {
        let retry_after = header_number::<u64>(headers, "retry-after")
            .or_else(|| seconds_until_reset(headers))
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Err(Error::RateLimited(retry_after));
    }

    if status.is_server_error() {
        return Err(Error::Server(status.as_u16()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::GitHubApi(format!(
        "Request for {} failed: {} - {}",
        username, status, body
    )))
}
