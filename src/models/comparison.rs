use serde::{Deserialize, Serialize};

use super::user::GitHubProfile;
use crate::analysis::aggregator::pick_winner;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPair<T> {
    pub user1: T,
    pub user2: T,
}

impl<T: Copy + PartialOrd> MetricPair<T> {
    pub fn new(user1: T, user2: T) -> Self {
        Self { user1, user2 }
    }

    pub fn winner(&self) -> Winner {
        pick_winner(self.user1, self.user2)
    }
}

/// Which side holds the strictly greater value for a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    First,
    Second,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub followers: MetricPair<u64>,
    pub following: MetricPair<u64>,
    pub public_repos: MetricPair<u64>,
    pub total_stars: MetricPair<u64>,
    pub total_forks: MetricPair<u64>,
    pub avg_stars_per_repo: MetricPair<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparedMetric {
    Followers,
    Following,
    PublicRepos,
    TotalStars,
    TotalForks,
    AvgStarsPerRepo,
}

impl ComparedMetric {
    pub fn title(&self) -> &'static str {
        match self {
            ComparedMetric::Followers => "Followers",
            ComparedMetric::Following => "Following",
            ComparedMetric::PublicRepos => "Public Repositories",
            ComparedMetric::TotalStars => "Total Stars",
            ComparedMetric::TotalForks => "Total Forks",
            ComparedMetric::AvgStarsPerRepo => "Avg Stars/Repo",
        }
    }
}

/// The compared values, kept in their native type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutcomeValues {
    Count(MetricPair<u64>),
    Average(MetricPair<f64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricOutcome {
    pub metric: ComparedMetric,
    pub values: OutcomeValues,
    pub winner: Winner,
}

impl ComparisonMetrics {
    /// One row per metric, each decided independently of the others.
    pub fn outcomes(&self) -> Vec<MetricOutcome> {
        let counts = [
            (ComparedMetric::Followers, self.followers),
            (ComparedMetric::Following, self.following),
            (ComparedMetric::PublicRepos, self.public_repos),
            (ComparedMetric::TotalStars, self.total_stars),
            (ComparedMetric::TotalForks, self.total_forks),
        ];

        let mut outcomes: Vec<MetricOutcome> = counts
            .into_iter()
            .map(|(metric, pair)| MetricOutcome {
                metric,
                values: OutcomeValues::Count(pair),
                winner: pair.winner(),
            })
            .collect();

        outcomes.push(MetricOutcome {
            metric: ComparedMetric::AvgStarsPerRepo,
            values: OutcomeValues::Average(self.avg_stars_per_repo),
            winner: self.avg_stars_per_repo.winner(),
        });

        outcomes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonData {
    pub user1: GitHubProfile,
    pub user2: GitHubProfile,
    pub comparison_metrics: ComparisonMetrics,
}
