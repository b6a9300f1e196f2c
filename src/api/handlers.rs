use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::analysis::AnalysisPipeline;
use crate::error::{Error, FetchErrorKind};
use crate::models::RepositoryList;

pub struct AppState {
    pub pipeline: AnalysisPipeline,
}

/// Error body is always `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            FetchErrorKind::Invalid if matches!(self.0, Error::InvalidUsername(_)) => {
                StatusCode::BAD_REQUEST
            }
            FetchErrorKind::NotFound => StatusCode::NOT_FOUND,
            FetchErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            FetchErrorKind::Network | FetchErrorKind::Server => StatusCode::BAD_GATEWAY,
            FetchErrorKind::Invalid | FetchErrorKind::Other => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.0.to_string()
        }))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api")
            .route("", web::get().to(root))
            .route("/", web::get().to(root))
            .route("/profile/{username}", web::get().to(get_profile))
            .route("/compare/{user1}/{user2}", web::get().to(compare_profiles))
            .route("/repositories/{username}", web::get().to(get_repositories)),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME")
    }))
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "GitHub Toolkit API" }))
}

async fn get_profile(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let profile = data.pipeline.analyze_profile(&username).await.map_err(|e| {
        tracing::warn!("Profile request for {} failed: {}", username, e);
        e
    })?;
    Ok(HttpResponse::Ok().json(profile))
}

async fn compare_profiles(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (user1, user2) = path.into_inner();
    let comparison = data.pipeline.compare(&user1, &user2).await.map_err(|e| {
        tracing::warn!("Comparison of {} and {} failed: {}", user1, user2, e);
        e
    })?;
    Ok(HttpResponse::Ok().json(comparison))
}

#[derive(Debug, Deserialize)]
pub struct RepositoriesQuery {
    pub per_page: Option<usize>,
}

async fn get_repositories(
    path: web::Path<String>,
    query: web::Query<RepositoriesQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let mut repositories = data.pipeline.repositories(&username).await?;
    if let Some(per_page) = query.per_page {
        repositories.truncate(per_page);
    }
    Ok(HttpResponse::Ok().json(RepositoryList { repositories }))
}
