pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod api;
pub mod report;

pub use config::{Config, GitHubConfig};
pub use error::{Error, FetchErrorKind, Result};
pub use github::{GitHubClient, ProfileSource};
pub use analysis::AnalysisPipeline;
pub use api::BackendClient;
