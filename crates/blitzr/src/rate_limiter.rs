// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

/// Minimum-interval rate limiter for outgoing API calls.
///
/// Blitzr publishes no request quota, so the client leaves this off by
/// default; callers that want to be polite can enable it through the
/// builder. The mutex is held across the wait, which serialises
/// concurrent callers and keeps at most one request in flight.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait until the configured interval has elapsed since the last call.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::trace!(target: "blitzr", "rate limiting: waiting {:?}", wait);
                sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }
}
