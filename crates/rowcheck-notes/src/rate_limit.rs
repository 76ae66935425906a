//! Minimum-interval throttling for service calls

use std::thread;
use std::time::{Duration, Instant};

/// Enforces a minimum wall-clock interval between consecutive calls
///
/// [`throttle`](RateLimiter::throttle) must run immediately before every
/// service call, including the first (where it is a no-op). The timestamp is
/// taken when the slot is acquired; it is never reset or persisted.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    /// Create a rate limiter with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Block until the minimum interval since the previous call has elapsed
    pub fn throttle(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_call = Some(Instant::now());
    }
}
