use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github: GitHubConfig,
    pub host: String,
    pub port: u16,
    pub backend_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub token: Option<String>,
    pub api_base: String,
    pub max_repositories: u32,
    pub rate_limit_max_wait: Duration,
    pub requests_per_minute: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_GITHUB_API_BASE.to_string(),
            max_repositories: 100,
            rate_limit_max_wait: Duration::from_secs(10),
            requests_per_minute: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GitHubConfig::default();

        let token = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());

        let api_base = lookup("GITHUB_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let max_repositories = match lookup("MAX_REPOSITORIES") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| Error::Config(format!("MAX_REPOSITORIES must be a positive integer, got {:?}", v)))?,
            None => defaults.max_repositories,
        };

        let rate_limit_max_wait = lookup("RATE_LIMIT_MAX_WAIT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.rate_limit_max_wait);

        let requests_per_minute = lookup("REQUESTS_PER_MINUTE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.requests_per_minute);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT must be a valid port number, got {:?}", v)))?,
            None => 5328,
        };

        let backend_url = lookup("BACKEND_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string());

        Ok(Self {
            github: GitHubConfig {
                token,
                api_base,
                max_repositories,
                rate_limit_max_wait,
                requests_per_minute,
            },
            host,
            port,
            backend_url,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.github.token, None);
        assert_eq!(config.github.api_base, DEFAULT_GITHUB_API_BASE);
        assert_eq!(config.github.max_repositories, 100);
        assert_eq!(config.bind_addr(), "0.0.0.0:5328");
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_abc"),
            ("GITHUB_API_BASE", "http://localhost:9000/"),
            ("MAX_REPOSITORIES", "250"),
            ("PORT", "8080"),
            ("BACKEND_URL", "http://localhost:5328/api/"),
        ]))
        .unwrap();
        assert_eq!(config.github.token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.github.api_base, "http://localhost:9000");
        assert_eq!(config.github.max_repositories, 250);
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:5328/api"));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  ")])).unwrap();
        assert!(config.github.token.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
