//! Rate limit information.

/// Minimum remaining requests before proactively waiting.
pub(crate) const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Rate limit information for the core GitHub API.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true if few enough requests remain that callers should wait.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.remaining < MIN_REMAINING_THRESHOLD
    }

    /// Seconds from `now` until the window resets, or `None` if it already has.
    #[must_use]
    pub fn seconds_until_reset(&self, now: u64) -> Option<u64> {
        (self.reset > now).then(|| self.reset - now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_when_below_threshold() {
        let mut info = RateLimitInfo {
            remaining: 4,
            reset: 1_700_000_100,
            limit: 5000,
        };
        assert!(info.is_low());

        info.remaining = 5;
        assert!(!info.is_low());
    }

    #[test]
    fn reset_in_the_past_needs_no_wait() {
        let info = RateLimitInfo {
            remaining: 0,
            reset: 1_700_000_100,
            limit: 5000,
        };
        assert_eq!(info.seconds_until_reset(1_700_000_000), Some(100));
        assert_eq!(info.seconds_until_reset(1_700_000_100), None);
    }
}
