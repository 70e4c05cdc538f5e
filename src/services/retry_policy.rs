use std::time::Duration;
use backoff::backoff::Backoff;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use rand::Rng;
use crate::config::constants::{millis, DEFAULT_BASE_DELAY_MS, DEFAULT_JITTER_MS, DEFAULT_MAX_DELAY_MS, DEFAULT_MAX_RETRIES};
use crate::structs::config::retry_config::RetryConfig;

/// Retry budget plus the delay schedule between attempts: exponential with a ceiling,
/// followed by additive random jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: millis(DEFAULT_BASE_DELAY_MS),
            max_delay: millis(DEFAULT_MAX_DELAY_MS),
            jitter: millis(DEFAULT_JITTER_MS),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: millis(config.base_delay_ms),
            max_delay: millis(config.max_delay_ms),
            jitter: millis(config.jitter_ms),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = Duration::ZERO;
        self
    }

    /// Total number of calls allowed; never less than one.
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// The doubling schedule without jitter or an elapsed-time deadline.
    pub fn exponential(&self) -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(self.base_delay)
            .with_multiplier(2.0)
            .with_max_interval(self.max_delay)
            .with_randomization_factor(0.0)
            .with_max_elapsed_time(None)
            .build()
    }

    /// `base * 2^attempt_index`, clamped to `max_delay`.
    pub fn base_delay_for(&self, attempt_index: u32) -> Duration {
        let mut schedule = self.exponential();
        for _ in 0..attempt_index {
            if schedule.current_interval >= self.max_delay {
                break;
            }
            schedule.next_backoff();
        }
        schedule.current_interval.min(self.max_delay)
    }

    /// Backoff that yields one delay per retry, `attempts() - 1` in total.
    pub fn backoff(&self) -> AnalysisBackoff {
        AnalysisBackoff {
            schedule: self.exponential(),
            max_delay: self.max_delay,
            jitter: self.jitter,
            retries: self.attempts() - 1,
            retries_left: self.attempts() - 1,
        }
    }
}

#[derive(Clone)]
pub struct AnalysisBackoff {
    schedule: ExponentialBackoff,
    max_delay: Duration,
    jitter: Duration,
    retries: u32,
    retries_left: u32,
}

impl AnalysisBackoff {
    fn random_jitter(&self) -> Duration {
        if self.jitter.is_zero() {
            return Duration::ZERO;
        }
        millis(rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64))
    }
}

impl Backoff for AnalysisBackoff {
    fn reset(&mut self) {
        self.schedule.reset();
        self.retries_left = self.retries;
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        if self.retries_left == 0 {
            return None;
        }
        self.retries_left -= 1;

        let delay = self.schedule.next_backoff()?.min(self.max_delay);
        Some(delay + self.random_jitter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_from_one_second() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.base_delay_for(0), Duration::from_secs(1));
        assert_eq!(policy.base_delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.base_delay_for(2), Duration::from_secs(4));
    }

    #[test]
    fn delays_are_capped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.base_delay_for(10), Duration::from_secs(30));
        assert_eq!(policy.base_delay_for(40), Duration::from_secs(30));
    }

    #[test]
    fn jitter_stays_within_bound() {
        for _ in 0..100 {
            let mut backoff = RetryPolicy::default().backoff();
            let first = backoff.next_backoff().unwrap();
            let second = backoff.next_backoff().unwrap();
            assert!(first >= Duration::from_secs(1) && first <= Duration::from_millis(1251), "{:?}", first);
            assert!(second >= Duration::from_secs(2) && second <= Duration::from_millis(2251), "{:?}", second);
        }
    }

    #[test]
    fn backoff_yields_one_delay_per_retry() {
        let mut backoff = RetryPolicy::default().without_jitter().backoff();
        let delays: Vec<Duration> = std::iter::from_fn(|| backoff.next_backoff()).collect();

        assert_eq!(delays.len(), 2);
        assert!(delays[0] >= Duration::from_secs(1) && delays[0] < Duration::from_millis(1001));
        assert!(delays[1] >= Duration::from_secs(2) && delays[1] < Duration::from_millis(2001));

        backoff.reset();
        assert!(backoff.next_backoff().is_some());
    }

    #[test]
    fn zero_retries_still_allows_one_call() {
        let policy = RetryPolicy::default().with_max_retries(0);
        assert_eq!(policy.attempts(), 1);
        assert_eq!(policy.backoff().next_backoff(), None);
    }
}
