use crate::log_warn;
use crate::shared::errors::{AppError, AppResult};
use governor::clock::{Clock, DefaultClock};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;

type KeyedLimiter = GovernorRateLimiter<
    String,
    governor::state::keyed::DefaultKeyedStateStore<String>,
    DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// Per-client limiter for write requests (one bucket per client address)
pub struct WriteRateLimiter {
    limiter: KeyedLimiter,
    clock: DefaultClock,
}

impl WriteRateLimiter {
    /// Allow `writes_per_minute` writes per client, bursting up to the same amount
    pub fn per_minute(writes_per_minute: u32) -> Self {
        let burst = NonZeroU32::new(writes_per_minute.max(1)).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: GovernorRateLimiter::keyed(Quota::per_minute(burst)),
            clock: DefaultClock::default(),
        }
    }

    /// Record one write for `client`; fails with the number of seconds to wait
    pub fn check(&self, client: &str) -> AppResult<()> {
        // Occasionally drop buckets of clients that have gone quiet
        if rand::random::<u8>() < 10 {
            self.limiter.retain_recent();
        }

        self.limiter
            .check_key(&client.to_string())
            .map_err(|not_until| {
                let wait = not_until.wait_time_from(self.clock.now());
                let retry_after = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
                log_warn!(
                    "Write rate limit exceeded for {} (retry after {}s)",
                    client,
                    retry_after
                );
                AppError::RateLimitError {
                    retry_after: retry_after.max(1),
                }
            })
    }
}
