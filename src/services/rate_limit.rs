//! Rate limiting service for controlling request frequency.

use crate::{config::RateLimitConfig, error::ApiError, utils::http::extract_peer_ip};
use actix_web::{HttpRequest, web};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

/// Simple in-memory rate limiter
///
/// Fixed window per client key: the first request opens a window, and at
/// most `max_requests` are admitted until it expires.
#[derive(Clone)]
pub struct SimpleRateLimiter {
    config: RateLimitConfig,
    storage: Arc<Mutex<HashMap<String, (usize, Instant)>>>,
}

impl SimpleRateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_seconds)
    }

    /// Check if the given key (typically IP address) is within rate limits
    ///
    /// Returns `true` if the request should be allowed, `false` if rate limited.
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let mut storage = self.storage.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let window = self.window();

        // Drop expired windows so idle clients do not accumulate
        storage.retain(|_, (_, started)| now.duration_since(*started) < window);

        match storage.get_mut(key) {
            Some((count, _)) if *count >= self.config.max_requests => false,
            Some((count, _)) => {
                *count += 1;
                true
            }
            None => {
                if self.config.max_requests == 0 {
                    return false;
                }
                storage.insert(key.to_string(), (1, now));
                true
            }
        }
    }

    /// Requests still allowed for `key` in its current window
    pub fn remaining(&self, key: &str) -> usize {
        let storage = self.storage.lock().unwrap_or_else(PoisonError::into_inner);
        let used = storage
            .get(key)
            .filter(|(_, started)| started.elapsed() < self.window())
            .map(|(count, _)| *count)
            .unwrap_or(0);
        self.config.max_requests.saturating_sub(used)
    }
}

/// Rate limiting check for handlers
///
/// Uses the limiter registered as app data, keyed by the peer address. When
/// no limiter is registered every request is allowed.
pub fn rate_limit_middleware(req: &HttpRequest) -> Result<(), ApiError> {
    let Some(limiter) = req.app_data::<web::Data<SimpleRateLimiter>>() else {
        return Ok(());
    };

    let ip = extract_peer_ip(req);
    if !limiter.check_rate_limit(&ip) {
        tracing::warn!(ip = %ip, path = %req.path(), "Rate limit exceeded");
        return Err(ApiError::RateLimited);
    }

    Ok(())
}
