//! Condition polling with a deadline

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::UtilError;

type FinishHook = Box<dyn FnOnce() + Send>;

/// Options for [`wait_for`]. Defaults: poll every 100 ms, give up after 10 s.
pub struct WaitForOptions {
    pub interval: Duration,
    pub timeout: Duration,
    on_finish: Option<FinishHook>,
    on_timeout: Option<FinishHook>,
}

impl Default for WaitForOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            timeout: Duration::from_secs(10),
            on_finish: None,
            on_timeout: None,
        }
    }
}

impl WaitForOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_on_finish<H: FnOnce() + Send + 'static>(mut self, hook: H) -> Self {
        self.on_finish = Some(Box::new(hook));
        self
    }

    pub fn with_on_timeout<H: FnOnce() + Send + 'static>(mut self, hook: H) -> Self {
        self.on_timeout = Some(Box::new(hook));
        self
    }
}

/// Poll an async predicate until it returns true or the deadline passes.
///
/// The condition is checked immediately, then every `interval`. There is no
/// built-in cancellation; callers that need to abort early should layer
/// their own flag into the condition.
pub async fn wait_for<C, Fut>(mut condition: C, options: WaitForOptions) -> Result<(), UtilError>
where
    C: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let mut options = options;
    let started = Instant::now();
    loop {
        if condition().await {
            if let Some(hook) = options.on_finish.take() {
                hook();
            }
            return Ok(());
        }
        if started.elapsed() >= options.timeout {
            if let Some(hook) = options.on_timeout.take() {
                hook();
            }
            return Err(UtilError::WaitForTimeout {
                timeout: options.timeout,
            });
        }
        trace!(elapsed = ?started.elapsed(), "condition not met, polling again");
        tokio::time::sleep(options.interval).await;
    }
}

/// [`wait_for`] over a synchronous predicate.
pub async fn wait_for_sync<C>(mut condition: C, options: WaitForOptions) -> Result<(), UtilError>
where
    C: FnMut() -> bool,
{
    wait_for(
        move || {
            let met = condition();
            async move { met }
        },
        options,
    )
    .await
}
