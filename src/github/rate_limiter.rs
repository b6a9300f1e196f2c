use reqwest::header::HeaderMap;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};

use crate::error::{Error, Result};

pub struct RateLimiter {
    state: Mutex<RateLimitState>,
    max_wait: Duration,
    requests_per_minute: u32,
}

struct RateLimitState {
    remaining: Option<u32>,
    reset_at: Option<Instant>,
    requests_this_minute: u32,
    minute_start: Instant,
}

impl RateLimiter {
    /// `max_wait` bounds how long a request may block on an exhausted quota;
    /// beyond that the request fails with [`Error::RateLimited`].
    /// A `requests_per_minute` of zero disables the soft budget.
    pub fn new(max_wait: Duration, requests_per_minute: u32) -> Self {
        Self {
            state: Mutex::new(RateLimitState {
                remaining: None,
                reset_at: None,
                requests_this_minute: 0,
                minute_start: Instant::now(),
            }),
            max_wait,
            requests_per_minute,
        }
    }

    pub async fn wait(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        if state.remaining == Some(0) {
            if let Some(reset_at) = state.reset_at {
                let now = Instant::now();
                if reset_at > now {
                    let wait_duration = reset_at - now;
                    if wait_duration > self.max_wait {
                        return Err(Error::RateLimited(wait_duration.as_secs().max(1)));
                    }
                    drop(state);
                    tracing::info!("Rate limited, waiting {:?}", wait_duration);
                    sleep(wait_duration).await;
                    state = self.state.lock().await;
                }
            }
            state.remaining = None;
            state.reset_at = None;
        }

        if self.requests_per_minute > 0 {
            let minute_elapsed = state.minute_start.elapsed();
            if minute_elapsed < Duration::from_secs(60) {
                if state.requests_this_minute >= self.requests_per_minute {
                    let wait_time = Duration::from_secs(60) - minute_elapsed;
                    drop(state);
                    tracing::debug!("Soft rate limiting, waiting {:?}", wait_time);
                    sleep(wait_time).await;
                    state = self.state.lock().await;
                    state.requests_this_minute = 0;
                    state.minute_start = Instant::now();
                }
            } else {
                state.requests_this_minute = 0;
                state.minute_start = Instant::now();
            }
            state.requests_this_minute += 1;
        }

        Ok(())
    }

    pub async fn update_from_headers(&self, headers: &HeaderMap) {
        let Some(remaining) = header_number::<u32>(headers, "x-ratelimit-remaining") else {
            return;
        };

        let mut state = self.state.lock().await;
        state.remaining = Some(remaining);
        state.reset_at = seconds_until_reset(headers)
            .map(|secs| Instant::now() + Duration::from_secs(secs));

        if remaining == 0 {
            tracing::warn!("GitHub rate limit exhausted");
        }
    }
}

pub(crate) fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Seconds until `x-ratelimit-reset`, if that lies in the future.
pub(crate) fn seconds_until_reset(headers: &HeaderMap) -> Option<u64> {
    let reset = header_number::<u64>(headers, "x-ratelimit-reset")?;
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
    reset.checked_sub(now).filter(|secs| *secs > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(remaining: u32, reset_in: u64) -> HeaderMap {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
        headers.insert("x-ratelimit-reset", HeaderValue::from(now + reset_in));
        headers
    }

    #[tokio::test]
    async fn test_exhausted_quota_fails_fast() {
        let limiter = RateLimiter::new(Duration::from_secs(5), 0);
        limiter.update_from_headers(&headers(0, 3600)).await;

        match limiter.wait().await {
            Err(Error::RateLimited(secs)) => assert!(secs > 3000),
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remaining_quota_passes() {
        let limiter = RateLimiter::new(Duration::from_secs(5), 0);
        limiter.update_from_headers(&headers(42, 3600)).await;

        let started = Instant::now();
        assert!(limiter.wait().await.is_ok());
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_exhausted_quota_waits_for_near_reset() {
        let limiter = RateLimiter::new(Duration::from_secs(5), 0);
        limiter.update_from_headers(&headers(0, 2)).await;

        let started = Instant::now();
        assert!(limiter.wait().await.is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));

        // The quota is treated as unknown again once the reset has passed.
        let started = Instant::now();
        assert!(limiter.wait().await.is_ok());
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_missing_headers_are_ignored() {
        let limiter = RateLimiter::new(Duration::from_secs(5), 30);
        limiter.update_from_headers(&HeaderMap::new()).await;

        assert!(limiter.wait().await.is_ok());
        assert!(limiter.wait().await.is_ok());
    }
}
