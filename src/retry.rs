//! Bounded retry with exponential backoff for the extraction call.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time;
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    pub(crate) max_attempts: u32,
    pub(crate) initial_delay: Duration,
    pub(crate) multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            multiplier: 2,
        }
    }
}

/// Explicit backoff state: which attempt is in flight and how long the
/// next wait will be. Kept separate from the async loop so the schedule
/// can be tested without sleeping.
pub(crate) struct Backoff {
    policy: RetryPolicy,
    attempt: u32,
    delay: Duration,
}

impl Backoff {
    pub(crate) fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            attempt: 1,
            delay: policy.initial_delay,
        }
    }

    pub(crate) fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Advance to the next attempt, returning the delay to wait first, or
    /// `None` once the attempt budget is exhausted.
    pub(crate) fn advance(&mut self) -> Option<Duration> {
        if self.attempt >= self.policy.max_attempts {
            return None;
        }
        let wait = self.delay;
        self.delay *= self.policy.multiplier;
        self.attempt += 1;
        Some(wait)
    }
}

/// Run `op` up to the policy's attempt budget. There is no delay before
/// the first attempt; each subsequent attempt waits the current backoff
/// delay, which doubles every failure. The last error propagates once the
/// budget is spent.
pub(crate) async fn run<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut backoff = Backoff::new(policy);
    loop {
        match op(backoff.attempt()).await {
            Ok(value) => return Ok(value),
            Err(error) => match backoff.advance() {
                Some(delay) => {
                    warn!(
                        "attempt {} failed, retrying in {}ms: {error}",
                        backoff.attempt() - 1,
                        delay.as_millis()
                    );
                    time::sleep(delay).await;
                }
                None => return Err(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use tokio::time::Instant;

    use super::*;

    #[test]
    fn backoff_schedule_doubles_until_exhausted() {
        let mut backoff = Backoff::new(RetryPolicy::default());
        assert_eq!(backoff.attempt(), 1);
        assert_eq!(backoff.advance(), Some(Duration::from_millis(1000)));
        assert_eq!(backoff.attempt(), 2);
        assert_eq!(backoff.advance(), Some(Duration::from_millis(2000)));
        assert_eq!(backoff.attempt(), 3);
        assert_eq!(backoff.advance(), None);
        assert_eq!(backoff.attempt(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn two_failures_then_success_takes_three_attempts() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<u32, String> = run(RetryPolicy::default(), |attempt| {
            let calls = &calls;
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if attempt < 3 {
                    Err(format!("boom {attempt}"))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // 1000ms before the 2nd attempt, 2000ms before the 3rd.
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_one_second_before_the_second_attempt() {
        let started = Instant::now();
        let result: Result<(), String> = run(RetryPolicy::default(), |attempt| async move {
            if attempt == 1 {
                Err("first".to_string())
            } else {
                Ok(())
            }
        })
        .await;

        assert_eq!(result, Ok(()));
        assert_eq!(started.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_budget_propagates_the_last_error() {
        let calls = AtomicU32::new(0);

        let result: Result<(), String> = run(RetryPolicy::default(), |attempt| {
            let calls = &calls;
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(format!("failure {attempt}"))
            }
        })
        .await;

        assert_eq!(result, Err("failure 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn immediate_success_does_not_wait() {
        let result: Result<u32, String> = run(RetryPolicy::default(), |_| async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
    }
}
