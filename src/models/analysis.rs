use serde::{Deserialize, Serialize};

use super::metrics::{LanguageStats, Metrics};
use super::repository::Repository;
use super::user::GitHubProfile;

/// Everything the profile view needs for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub profile: GitHubProfile,
    pub repositories: Vec<Repository>,
    pub language_stats: Vec<LanguageStats>,
    #[serde(default)]
    pub contribution_stats: ContributionStats,
    pub metrics: Metrics,
}

/// Contribution activity. The REST API does not expose the contribution
/// calendar, so these stay zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionStats {
    pub total_contributions: u64,
    pub contributions_this_year: u64,
    pub longest_streak: u64,
    pub current_streak: u64,
    pub contributions_by_month: Vec<MonthlyContributions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyContributions {
    pub month: String,
    pub contributions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryList {
    pub repositories: Vec<Repository>,
}
