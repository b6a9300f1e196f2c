use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User document as returned by `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubProfile {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    /// Sum of stars over the profile's repositories.
    pub total_stars: u64,
    /// Sum of forks over the profile's repositories.
    pub total_forks: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl GitHubProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

// GitHub reports unset text fields as either null or "".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<GitHubUser> for GitHubProfile {
    fn from(user: GitHubUser) -> Self {
        Self {
            username: user.login,
            name: non_empty(user.name),
            bio: non_empty(user.bio),
            avatar_url: user.avatar_url,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            total_stars: 0,
            total_forks: 0,
            created_at: user.created_at,
            updated_at: user.updated_at,
            location: non_empty(user.location),
            company: non_empty(user.company),
            blog: non_empty(user.blog),
            twitter_username: non_empty(user.twitter_username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_document_maps_to_profile() {
        let raw = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "bio": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "followers": 9000,
            "following": 9,
            "public_repos": 8,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-22T12:30:17Z",
            "location": "San Francisco",
            "company": "@github",
            "blog": "",
            "twitter_username": null
        }"#;
        let user: GitHubUser = serde_json::from_str(raw).unwrap();
        let profile = GitHubProfile::from(user);

        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(profile.followers, 9000);
        assert_eq!(profile.total_stars, 0);
        assert_eq!(profile.blog, None);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
    }
}
