use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid GitHub username: {0:?}")]
    InvalidUsername(String),

    #[error("GitHub server error (HTTP {0})")]
    Server(u16),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a failed fetch, as surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NotFound,
    RateLimited,
    Network,
    Server,
    Invalid,
    Other,
}

impl Error {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Error::UserNotFound(_) => FetchErrorKind::NotFound,
            Error::RateLimited(_) => FetchErrorKind::RateLimited,
            Error::Network(_) => FetchErrorKind::Network,
            Error::Server(_) | Error::GitHubApi(_) => FetchErrorKind::Server,
            Error::Backend { status, .. } => match *status {
                404 => FetchErrorKind::NotFound,
                429 => FetchErrorKind::RateLimited,
                s if s >= 500 => FetchErrorKind::Server,
                _ => FetchErrorKind::Other,
            },
            Error::InvalidUsername(_) | Error::Serialization(_) => FetchErrorKind::Invalid,
            Error::Config(_) | Error::Io(_) | Error::InvalidHeader(_) => FetchErrorKind::Other,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited(_) | Error::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::UserNotFound("x".into()).kind(), FetchErrorKind::NotFound);
        assert_eq!(Error::RateLimited(30).kind(), FetchErrorKind::RateLimited);
        assert_eq!(Error::Server(503).kind(), FetchErrorKind::Server);
        assert_eq!(
            Error::Backend { status: 404, message: "Failed to fetch profile".into() }.kind(),
            FetchErrorKind::NotFound
        );
        assert_eq!(
            Error::Backend { status: 400, message: "nope".into() }.kind(),
            FetchErrorKind::Other
        );
    }

    #[test]
    fn test_backend_error_shows_only_message() {
        let err = Error::Backend {
            status: 500,
            message: "Failed to fetch comparison data".into(),
        };
        assert_eq!(err.to_string(), "Failed to fetch comparison data");
        assert!(!err.is_retryable());
    }
}
