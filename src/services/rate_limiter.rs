use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::num::NonZeroU32;
use std::sync::Arc;
use nonzero_ext::*;
use std::time::Duration;
use crate::config::constants::BURST_LIMIT_PER_SECOND;

/// Client-side throttle in front of the model API: a per-minute quota plus a short burst cap.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(nonzero!(1u32));
        let per_second = NonZeroU32::new(BURST_LIMIT_PER_SECOND).unwrap_or(nonzero!(1u32));

        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
            burst_limiter: Arc::new(RateLimiter::direct(Quota::per_second(per_second))),
        }
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter.until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100))).await;
    }
}

impl Default for ApiRateLimiter {
    fn default() -> Self {
        Self::new(crate::config::constants::DEFAULT_RATE_LIMIT_PER_MINUTE)
    }
}
