//! Retry with exponential backoff

use std::future::Future;
use std::time::Duration;

use tracing::debug;

type RetryPredicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;
type RetryHook<E> = Box<dyn FnMut(&E, u32) + Send>;

/// Options for [`retry`], builder-style.
///
/// Defaults: 3 retries, 1 s initial delay, 30 s delay cap, multiplier 2.0,
/// every error retryable, no hook.
pub struct RetryOptions<E> {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    should_retry: Option<RetryPredicate<E>>,
    on_retry: Option<RetryHook<E>>,
}

impl<E> Default for RetryOptions<E> {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(30_000),
            backoff_multiplier: 2.0,
            should_retry: None,
            on_retry: None,
        }
    }
}

impl<E> RetryOptions<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Predicate deciding whether an error is worth another attempt.
    /// Returning `false` re-raises immediately, budget notwithstanding.
    pub fn with_should_retry<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.should_retry = Some(Box::new(predicate));
        self
    }

    /// Side-effect hook invoked before each retry with the error and the
    /// 1-based number of the attempt that just failed.
    pub fn with_on_retry<H>(mut self, hook: H) -> Self
    where
        H: FnMut(&E, u32) + Send + 'static,
    {
        self.on_retry = Some(Box::new(hook));
        self
    }

    /// Delay before attempt `failed + 1`:
    /// `min(initial_delay * multiplier^failed, max_delay)`.
    fn delay_after(&self, failed_attempts: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(failed_attempts as i32);
        let millis = (self.initial_delay.as_millis() as f64 * factor)
            .min(self.max_delay.as_millis() as f64);
        Duration::from_millis(millis as u64)
    }
}

/// Run `task` up to `max_retries + 1` times, sleeping (non-blocking) with
/// exponential backoff between attempts.
///
/// Fails with the last observed error once the budget is exhausted or the
/// `should_retry` predicate declines. No other helper in this crate retries
/// on its own.
pub async fn retry<T, E, F, Fut>(mut task: F, mut options: RetryOptions<E>) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut failed_attempts: u32 = 0;
    loop {
        match task().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let retryable = options.should_retry.as_ref().map_or(true, |p| p(&err));
                if !retryable || failed_attempts >= options.max_retries {
                    return Err(err);
                }
                if let Some(hook) = options.on_retry.as_mut() {
                    hook(&err, failed_attempts + 1);
                }
                let delay = options.delay_after(failed_attempts);
                debug!(attempt = failed_attempts + 1, ?delay, "retrying after failure");
                tokio::time::sleep(delay).await;
                failed_attempts += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast() -> RetryOptions<String> {
        RetryOptions::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let attempts = Arc::new(AtomicU32::new(0));
        let retries_seen = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&attempts);
        let seen = Arc::clone(&retries_seen);
        let result = retry(
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(format!("transient {n}"))
                    } else {
                        Ok("done")
                    }
                }
            },
            fast()
                .with_max_retries(3)
                .with_on_retry(move |_, _| {
                    seen.fetch_add(1, Ordering::SeqCst);
                }),
        )
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(retries_seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn exhausted_budget_returns_last_error() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result: Result<(), String> = retry(
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move { Err(format!("failure {n}")) }
            },
            fast().with_max_retries(2),
        )
        .await;

        // max_retries + 1 attempts, last error surfaces
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(result, Err("failure 2".to_string()));
    }

    #[tokio::test]
    async fn should_retry_false_stops_immediately() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result: Result<(), String> = retry(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async move { Err("fatal".to_string()) }
            },
            fast()
                .with_max_retries(5)
                .with_should_retry(|e: &String| !e.contains("fatal")),
        )
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(result, Err("fatal".to_string()));
    }

    #[tokio::test]
    async fn on_retry_receives_attempt_numbers() {
        let numbers = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&numbers);
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let _: Result<(), &str> = retry(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async move { Err("nope") }
            },
            RetryOptions::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_max_retries(3)
                .with_on_retry(move |_, attempt| sink.lock().push(attempt)),
        )
        .await;

        assert_eq!(*numbers.lock(), vec![1, 2, 3]);
    }

    #[test]
    fn backoff_sequence_is_capped() {
        let options: RetryOptions<()> = RetryOptions::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_max_delay(Duration::from_millis(350))
            .with_backoff_multiplier(2.0);

        assert_eq!(options.delay_after(0), Duration::from_millis(100));
        assert_eq!(options.delay_after(1), Duration::from_millis(200));
        // 400 would exceed the cap
        assert_eq!(options.delay_after(2), Duration::from_millis(350));
        assert_eq!(options.delay_after(10), Duration::from_millis(350));
    }
}
