use clap::ValueEnum;

use crate::error::Result;
use crate::models::{
    ComparisonData, GitHubProfile, MetricOutcome, OutcomeValues, ProfileData, Winner,
};
use crate::report::format::{
    format_count, format_date_long, format_date_short, format_decimal, format_size,
};

const REPOSITORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

pub fn render_profile(data: &ProfileData, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Json => serde_json::to_string_pretty(data)?,
        ReportFormat::Markdown => profile_markdown(data),
        ReportFormat::Text => profile_text(data),
    })
}

pub fn render_comparison(data: &ComparisonData, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Json => serde_json::to_string_pretty(data)?,
        ReportFormat::Markdown => comparison_markdown(data),
        ReportFormat::Text => comparison_text(data),
    })
}

/// `(title, value)` rows of the stats grid.
fn stats_rows(data: &ProfileData) -> Vec<(&'static str, String)> {
    let m = &data.metrics;
    vec![
        ("Total Stars", format_count(m.total_stars)),
        ("Total Forks", format_count(m.total_forks)),
        ("Avg Stars/Repo", format_decimal(m.avg_stars_per_repo)),
        ("Avg Forks/Repo", format_decimal(m.avg_forks_per_repo)),
        ("Repository Count", format_count(m.repository_count)),
        (
            "Top Language",
            m.top_language.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
    ]
}

fn profile_details(profile: &GitHubProfile) -> Vec<(&'static str, String)> {
    let mut details = Vec::new();
    if let Some(ref location) = profile.location {
        details.push(("Location", location.clone()));
    }
    if let Some(ref company) = profile.company {
        details.push(("Company", company.clone()));
    }
    if let Some(ref blog) = profile.blog {
        details.push(("Blog", blog.clone()));
    }
    if let Some(ref twitter) = profile.twitter_username {
        details.push(("Twitter", format!("@{} (https://twitter.com/{})", twitter, twitter)));
    }
    details
}

fn profile_text(data: &ProfileData) -> String {
    let profile = &data.profile;
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== {} (@{}) ===\n\n",
        profile.display_name(),
        profile.username
    ));

    if let Some(ref bio) = profile.bio {
        output.push_str(&format!("{}\n\n", bio));
    }
    for (label, value) in profile_details(profile) {
        output.push_str(&format!("{}: {}\n", label, value));
    }

    output.push_str(&format!(
        "Followers: {}  Following: {}  Repositories: {}  Stars: {}\n",
        format_count(profile.followers),
        format_count(profile.following),
        format_count(profile.public_repos),
        format_count(profile.total_stars)
    ));
    output.push_str(&format!(
        "Joined {}\n",
        format_date_long(&profile.created_at)
    ));

    output.push_str("\nStats:\n");
    for (title, value) in stats_rows(data) {
        output.push_str(&format!("  {:<18} {}\n", title, value));
    }

    if !data.language_stats.is_empty() {
        output.push_str("\nLanguages:\n");
        for stat in &data.language_stats {
            output.push_str(&format!(
                "  {:<18} {:>4} repos  {:>5.1}%\n",
                stat.language, stat.count, stat.percentage
            ));
        }
    }

    output.push_str("\nRepositories:\n");
    if data.repositories.is_empty() {
        output.push_str("  (none)\n");
    }
    for repo in data.repositories.iter().take(REPOSITORY_LIMIT) {
        output.push_str(&format!("  {} - {}\n", repo.name, repo.html_url));
        if let Some(ref description) = repo.description {
            output.push_str(&format!("    {}\n", description));
        }
        let mut line = String::from("    ");
        if let Some(language) = repo.declared_language() {
            line.push_str(&format!("{} | ", language));
        }
        line.push_str(&format!(
            "★ {} | forks {} | Updated {} | {}\n",
            format_count(repo.stars),
            format_count(repo.forks),
            format_date_short(&repo.updated_at),
            format_size(repo.size)
        ));
        output.push_str(&line);
    }
    if data.repositories.len() > REPOSITORY_LIMIT {
        output.push_str(&format!(
            "  Showing {} of {} repositories\n",
            REPOSITORY_LIMIT,
            data.repositories.len()
        ));
    }

    output
}

fn profile_markdown(data: &ProfileData) -> String {
    let profile = &data.profile;
    let mut output = String::new();

    output.push_str(&format!(
        "# {} (@{})\n\n",
        profile.display_name(),
        profile.username
    ));

    if let Some(ref bio) = profile.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }
    for (label, value) in profile_details(profile) {
        output.push_str(&format!("- **{}:** {}\n", label, value));
    }
    output.push_str(&format!(
        "- **Joined:** {}\n\n",
        format_date_long(&profile.created_at)
    ));

    output.push_str("## Stats\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Followers | {} |\n", format_count(profile.followers)));
    output.push_str(&format!("| Following | {} |\n", format_count(profile.following)));
    for (title, value) in stats_rows(data) {
        output.push_str(&format!("| {} | {} |\n", title, value));
    }

    if !data.language_stats.is_empty() {
        output.push_str("\n## Languages\n\n");
        output.push_str("| Language | Repositories | Share |\n");
        output.push_str("|----------|--------------|-------|\n");
        for stat in &data.language_stats {
            output.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                stat.language, stat.count, stat.percentage
            ));
        }
    }

    output.push_str("\n## Repositories\n\n");
    output.push_str("| Repository | Language | Stars | Forks | Updated | Size |\n");
    output.push_str("|------------|----------|-------|-------|---------|------|\n");
    for repo in data.repositories.iter().take(REPOSITORY_LIMIT) {
        output.push_str(&format!(
            "| [{}]({}) | {} | {} | {} | {} | {} |\n",
            repo.name,
            repo.html_url,
            repo.declared_language().unwrap_or("-"),
            format_count(repo.stars),
            format_count(repo.forks),
            format_date_short(&repo.updated_at),
            format_size(repo.size)
        ));
    }
    if data.repositories.len() > REPOSITORY_LIMIT {
        output.push_str(&format!(
            "\n*Showing {} of {} repositories*\n",
            REPOSITORY_LIMIT,
            data.repositories.len()
        ));
    }

    output
}

fn outcome_values(outcome: &MetricOutcome) -> (String, String) {
    match outcome.values {
        OutcomeValues::Count(pair) => (format_count(pair.user1), format_count(pair.user2)),
        OutcomeValues::Average(pair) => (format_decimal(pair.user1), format_decimal(pair.user2)),
    }
}

fn comparison_text(data: &ComparisonData) -> String {
    let (user1, user2) = (&data.user1, &data.user2);
    let mut output = String::new();

    output.push_str("\n=== Profile Comparison ===\n\n");
    for profile in [user1, user2] {
        output.push_str(&format!("{} (@{})\n", profile.display_name(), profile.username));
        if let Some(ref bio) = profile.bio {
            output.push_str(&format!("  {}\n", bio));
        }
    }
    output.push('\n');

    let left = format!("@{}", user1.username);
    let right = format!("@{}", user2.username);
    output.push_str(&format!("{:<22}{:>16}{:>16}  {}\n", "", left, right, "Result"));

    for outcome in data.comparison_metrics.outcomes() {
        let (v1, v2) = outcome_values(&outcome);
        let verdict = match outcome.winner {
            Winner::First => format!("Winner: {}", left),
            Winner::Second => format!("Winner: {}", right),
            Winner::Tie => "Tie".to_string(),
        };
        output.push_str(&format!(
            "{:<22}{:>16}{:>16}  {}\n",
            outcome.metric.title(),
            v1,
            v2,
            verdict
        ));
    }

    output
}

fn comparison_markdown(data: &ComparisonData) -> String {
    let (user1, user2) = (&data.user1, &data.user2);
    let mut output = String::new();

    output.push_str("# Profile Comparison\n\n");
    for profile in [user1, user2] {
        output.push_str(&format!(
            "- **{}** (@{})",
            profile.display_name(),
            profile.username
        ));
        if let Some(ref bio) = profile.bio {
            output.push_str(&format!(": {}", bio));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\n| Metric | @{} | @{} | Result |\n",
        user1.username, user2.username
    ));
    output.push_str("|--------|------|------|--------|\n");

    for outcome in data.comparison_metrics.outcomes() {
        let (mut v1, mut v2) = outcome_values(&outcome);
        let verdict = match outcome.winner {
            Winner::First => {
                v1 = format!("**{}**", v1);
                format!("Winner: @{}", user1.username)
            }
            Winner::Second => {
                v2 = format!("**{}**", v2);
                format!("Winner: @{}", user2.username)
            }
            Winner::Tie => "Tie".to_string(),
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            outcome.metric.title(),
            v1,
            v2,
            verdict
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{build_comparison, build_profile_data};
    use crate::models::Repository;
    use chrono::{TimeZone, Utc};

    fn profile(username: &str, name: Option<&str>, followers: u64) -> GitHubProfile {
        GitHubProfile {
            username: username.to_string(),
            name: name.map(str::to_string),
            bio: Some("Builds things".to_string()),
            avatar_url: format!("https://avatars.example/{}", username),
            followers,
            following: 4,
            public_repos: 12,
            total_stars: 0,
            total_forks: 0,
            created_at: Utc.with_ymd_and_hms(2013, 6, 9, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            location: Some("Berlin".to_string()),
            company: None,
            blog: None,
            twitter_username: Some("octo".to_string()),
        }
    }

    fn repos(count: usize) -> Vec<Repository> {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| Repository {
                name: format!("project-{}", i),
                full_name: format!("octocat/project-{}", i),
                description: None,
                language: if i % 2 == 0 { Some("Rust".to_string()) } else { None },
                stars: 1000 * i as u64,
                forks: i as u64,
                size: 2048,
                created_at: ts,
                updated_at: ts,
                pushed_at: None,
                html_url: format!("https://github.com/octocat/project-{}", i),
            })
            .collect()
    }

    #[test]
    fn test_profile_text_report() {
        let data = build_profile_data(profile("octocat", Some("The Octocat"), 1500), repos(12));
        let text = render_profile(&data, ReportFormat::Text).unwrap();

        assert!(text.contains("=== The Octocat (@octocat) ==="));
        assert!(text.contains("Followers: 1,500"));
        assert!(text.contains("Joined June 9, 2013"));
        assert!(text.contains("Twitter: @octo"));
        assert!(text.contains("Top Language"));
        assert!(text.contains("Updated Jan 5, 2024"));
        assert!(text.contains("2.0 MB"));
        assert!(text.contains("Showing 10 of 12 repositories"));
        assert!(!text.contains("project-11 -"));
    }

    #[test]
    fn test_profile_without_languages_shows_na() {
        let data = build_profile_data(profile("ghost", None, 0), Vec::new());
        let markdown = render_profile(&data, ReportFormat::Markdown).unwrap();

        assert!(markdown.starts_with("# ghost (@ghost)"));
        assert!(markdown.contains("| Top Language | N/A |"));
        assert!(markdown.contains("| Avg Stars/Repo | 0.0 |"));
        assert!(!markdown.contains("## Languages"));
    }

    #[test]
    fn test_profile_json_report_parses_back() {
        let data = build_profile_data(profile("octocat", None, 3), repos(2));
        let json = render_profile(&data, ReportFormat::Json).unwrap();
        let parsed: ProfileData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_comparison_reports_mark_winners() {
        let first = build_profile_data(profile("alice", None, 10), repos(3));
        let second = build_profile_data(profile("bob", None, 20), repos(1));
        let data = build_comparison(first, second);

        let text = render_comparison(&data, ReportFormat::Text).unwrap();
        assert!(text.contains("Profile Comparison"));
        assert!(text.lines().any(|l| l.starts_with("Followers") && l.ends_with("Winner: @bob")));
        assert!(text.lines().any(|l| l.starts_with("Following") && l.ends_with("Tie")));
        assert!(text.lines().any(|l| l.starts_with("Total Stars") && l.ends_with("Winner: @alice")));

        let markdown = render_comparison(&data, ReportFormat::Markdown).unwrap();
        assert!(markdown.contains("| Followers | 10 | **20** | Winner: @bob |"));
        assert!(markdown.contains("| Avg Stars/Repo | **1000.0** | 0.0 | Winner: @alice |"));
    }

    #[test]
    fn test_large_counts_keep_every_digit() {
        let first = build_profile_data(profile("alice", None, 9_007_199_254_740_993), Vec::new());
        let second = build_profile_data(profile("bob", None, 1), Vec::new());
        let data = build_comparison(first, second);

        let markdown = render_comparison(&data, ReportFormat::Markdown).unwrap();
        assert!(markdown.contains("| Followers | **9,007,199,254,740,993** | 1 | Winner: @alice |"));
    }
}
