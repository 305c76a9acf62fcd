use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-client limiter in front of launch-data verification.
///
/// Each client address gets its own bucket, so one client probing the
/// signature check cannot lock others out. A client may spend the full
/// `max_requests` as a burst, then it refills evenly over the window.
pub struct AuthRateLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    config: RateLimitConfig,
}

impl AuthRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));
        let period = (window / burst.get()).max(Duration::from_millis(1));

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Check if `client` may attempt another verification
    #[track_caller]
    pub fn check(&self, client: IpAddr) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&client)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop buckets that have refilled completely
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }

    /// Number of client buckets currently held
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_secs.max(1))
    }
}

impl Default for AuthRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
