use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub language: String,
    /// Number of repositories declaring this language.
    pub count: u64,
    /// Share of the repositories that declare any language, in `[0, 100]`.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_stars: u64,
    pub total_forks: u64,
    pub avg_stars_per_repo: f64,
    pub avg_forks_per_repo: f64,
    #[serde(default)]
    pub top_language: Option<String>,
    pub repository_count: u64,
}
