use std::sync::Arc;

use crate::analysis::aggregator::{build_comparison, build_profile_data};
use crate::error::{Error, Result};
use crate::github::ProfileSource;
use crate::models::{ComparisonData, ProfileData, Repository};

const MAX_USERNAME_LEN: usize = 39;

/// Fetch-then-aggregate orchestration over a [`ProfileSource`].
#[derive(Clone)]
pub struct AnalysisPipeline {
    source: Arc<dyn ProfileSource>,
}

impl AnalysisPipeline {
    pub fn new(source: impl ProfileSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub async fn analyze_profile(&self, username: &str) -> Result<ProfileData> {
        validate_username(username)?;
        tracing::info!("Analyzing profile {} via {}", username, self.source.name());

        let (profile, repositories) = futures::try_join!(
            self.source.fetch_profile(username),
            self.source.fetch_repositories(username),
        )?;

        tracing::info!("Found {} repositories for {}", repositories.len(), username);
        Ok(build_profile_data(profile, repositories))
    }

    /// Both sides are fetched concurrently. If either fails the comparison
    /// fails as a whole.
    pub async fn compare(&self, user1: &str, user2: &str) -> Result<ComparisonData> {
        let (first, second) =
            futures::try_join!(self.analyze_profile(user1), self.analyze_profile(user2))?;
        Ok(build_comparison(first, second))
    }

    pub async fn repositories(&self, username: &str) -> Result<Vec<Repository>> {
        validate_username(username)?;
        self.source.fetch_repositories(username).await
    }
}

/// GitHub logins are 1-39 ASCII alphanumerics or single hyphens, never at
/// either end and never doubled.
pub fn validate_username(username: &str) -> Result<()> {
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && !username.starts_with('-')
        && !username.ends_with('-')
        && !username.contains("--")
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidUsername(username.to_string()))
    }
}
