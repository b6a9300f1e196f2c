#![allow(dead_code)]

use std::time::Duration;

use chrono::{TimeZone, Utc};
use gitinsights::models::{GitHubProfile, Repository};
use gitinsights::GitHubConfig;
use serde_json::{json, Value};

pub fn github_config(api_base: &str) -> GitHubConfig {
    GitHubConfig {
        token: None,
        api_base: api_base.to_string(),
        max_repositories: 100,
        rate_limit_max_wait: Duration::from_secs(1),
        requests_per_minute: 0,
    }
}

pub fn user_json(login: &str, followers: u64) -> Value {
    json!({
        "login": login,
        "id": 1,
        "name": format!("{} name", login),
        "bio": null,
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "followers": followers,
        "following": 2,
        "public_repos": 3,
        "created_at": "2012-04-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z",
        "location": null,
        "company": null,
        "blog": "",
        "twitter_username": null
    })
}

pub fn repo_json(owner: &str, name: &str, language: Option<&str>, stars: u64, forks: u64) -> Value {
    json!({
        "id": 42,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "description": null,
        "language": language,
        "stargazers_count": stars,
        "forks_count": forks,
        "size": 512,
        "fork": false,
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": "2024-01-05T00:00:00Z",
        "pushed_at": null,
        "html_url": format!("https://github.com/{}/{}", owner, name)
    })
}

pub fn profile(username: &str, followers: u64) -> GitHubProfile {
    let ts = Utc.with_ymd_and_hms(2016, 8, 1, 0, 0, 0).unwrap();
    GitHubProfile {
        username: username.to_string(),
        name: None,
        bio: None,
        avatar_url: format!("https://avatars.githubusercontent.com/{}", username),
        followers,
        following: 1,
        public_repos: 2,
        total_stars: 0,
        total_forks: 0,
        created_at: ts,
        updated_at: ts,
        location: None,
        company: None,
        blog: None,
        twitter_username: None,
    }
}

pub fn repository(owner: &str, name: &str, language: Option<&str>, stars: u64, forks: u64) -> Repository {
    let ts = Utc.with_ymd_and_hms(2023, 11, 20, 0, 0, 0).unwrap();
    Repository {
        name: name.to_string(),
        full_name: format!("{}/{}", owner, name),
        description: None,
        language: language.map(str::to_string),
        stars,
        forks,
        size: 64,
        created_at: ts,
        updated_at: ts,
        pushed_at: Some(ts),
        html_url: format!("https://github.com/{}/{}", owner, name),
    }
}
