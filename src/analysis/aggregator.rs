//! Pure derivations over already-fetched profile data.
//!
//! Nothing in here performs I/O or holds state between calls, so every
//! function is safe to call concurrently from any number of tasks.

use crate::models::{
    ComparisonData, ComparisonMetrics, ContributionStats, GitHubProfile, LanguageStats,
    MetricPair, Metrics, ProfileData, Repository, Winner,
};

/// Per-language repository counts, in order of first appearance.
///
/// Repositories without a declared language are left out of both the counts
/// and the percentage base. Returns an empty list when no repository declares
/// a language.
pub fn compute_language_stats(repositories: &[Repository]) -> Vec<LanguageStats> {
    let mut counts: Vec<(&str, u64)> = Vec::new();

    for language in repositories.iter().filter_map(Repository::declared_language) {
        match counts.iter_mut().find(|(seen, _)| *seen == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language, 1)),
        }
    }

    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .into_iter()
        .map(|(language, count)| LanguageStats {
            language: language.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

pub fn compute_metrics(repositories: &[Repository]) -> Metrics {
    let total_stars: u64 = repositories.iter().map(|r| r.stars).sum();
    let total_forks: u64 = repositories.iter().map(|r| r.forks).sum();
    let repository_count = repositories.len() as u64;

    Metrics {
        total_stars,
        total_forks,
        avg_stars_per_repo: average(total_stars, repository_count),
        avg_forks_per_repo: average(total_forks, repository_count),
        top_language: top_language(&compute_language_stats(repositories)),
        repository_count,
    }
}

fn average(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

// Strictly-greater keeps the earliest entry on ties.
fn top_language(stats: &[LanguageStats]) -> Option<String> {
    let mut best: Option<&LanguageStats> = None;
    for entry in stats {
        if best.map_or(true, |b| entry.count > b.count) {
            best = Some(entry);
        }
    }
    best.map(|entry| entry.language.clone())
}

/// Pairs the six compared values. No derivation happens here: the caller
/// supplies profiles whose totals and metrics are already populated.
pub fn compare_profiles(
    profile1: &GitHubProfile,
    metrics1: &Metrics,
    profile2: &GitHubProfile,
    metrics2: &Metrics,
) -> ComparisonMetrics {
    ComparisonMetrics {
        followers: MetricPair::new(profile1.followers, profile2.followers),
        following: MetricPair::new(profile1.following, profile2.following),
        public_repos: MetricPair::new(profile1.public_repos, profile2.public_repos),
        total_stars: MetricPair::new(profile1.total_stars, profile2.total_stars),
        total_forks: MetricPair::new(profile1.total_forks, profile2.total_forks),
        avg_stars_per_repo: MetricPair::new(metrics1.avg_stars_per_repo, metrics2.avg_stars_per_repo),
    }
}

/// Decides a single metric. Values that are not comparable (NaN) tie.
pub fn pick_winner<T: PartialOrd>(value1: T, value2: T) -> Winner {
    if value1 > value2 {
        Winner::First
    } else if value2 > value1 {
        Winner::Second
    } else {
        Winner::Tie
    }
}

/// Fills the profile totals from its repositories and derives the rest.
pub fn build_profile_data(mut profile: GitHubProfile, repositories: Vec<Repository>) -> ProfileData {
    let metrics = compute_metrics(&repositories);
    profile.total_stars = metrics.total_stars;
    profile.total_forks = metrics.total_forks;

    ProfileData {
        profile,
        language_stats: compute_language_stats(&repositories),
        repositories,
        contribution_stats: ContributionStats::default(),
        metrics,
    }
}

pub fn build_comparison(first: ProfileData, second: ProfileData) -> ComparisonData {
    let comparison_metrics = compare_profiles(
        &first.profile,
        &first.metrics,
        &second.profile,
        &second.metrics,
    );

    ComparisonData {
        user1: first.profile,
        user2: second.profile,
        comparison_metrics,
    }
}
