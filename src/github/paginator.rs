use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::github::client::check_status;
use crate::github::rate_limiter::RateLimiter;

pub struct Paginator<'a> {
    client: &'a Client,
    rate_limiter: &'a RateLimiter,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, rate_limiter: &'a RateLimiter) -> Self {
        Self {
            client,
            rate_limiter,
        }
    }

    /// Follows `rel="next"` links until `max_items` are collected or the
    /// listing runs out. `subject` names the user for not-found errors.
    pub async fn fetch_limited<T: DeserializeOwned>(
        &self,
        base_url: &str,
        subject: &str,
        per_page: u32,
        max_items: u32,
    ) -> Result<Vec<T>> {
        let per_page = per_page.clamp(1, 100).min(max_items.max(1));
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            self.rate_limiter.wait().await?;

            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;
            self.rate_limiter.update_from_headers(response.headers()).await;
            let response = check_status(response, subject).await?;

            let has_next = has_next_page(response.headers());

            let items: Vec<T> = response.json().await?;
            let items_count = items.len();
            all_items.extend(items);

            if all_items.len() >= max_items as usize || !has_next || items_count < per_page as usize
            {
                break;
            }

            page += 1;
        }

        all_items.truncate(max_items as usize);
        Ok(all_items)
    }
}

fn has_next_page(headers: &reqwest::header::HeaderMap) -> bool {
    headers
        .get(reqwest::header::LINK)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("rel=\"next\""))
        .unwrap_or(false)
}
