use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GitHubProfile, Repository};

/// Where profile documents come from. The aggregator only ever sees what a
/// source returned successfully.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile>;
    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>>;
    fn name(&self) -> &str;
}
