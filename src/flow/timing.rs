//! Non-blocking sleep and deadline racing

use std::future::Future;
use std::time::Duration;

use crate::error::UtilError;

/// Suspend the current asynchronous flow for `duration` without blocking
/// any other concurrent flow.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Race `fut` against a timer.
///
/// If the timer fires first the result is `UtilError::Timeout` carrying the
/// custom or default message, and the losing future is dropped at the race.
/// Work the future has already spawned elsewhere keeps running; nothing here
/// reaches out to cancel it. The timer itself cannot leak -- it is consumed
/// by the race either way.
///
/// ```no_run
/// # use std::time::Duration;
/// # async fn example() {
/// let slow = async {
///     kitbag::flow::sleep(Duration::from_secs(60)).await;
///     42
/// };
/// let result = kitbag::flow::timeout(slow, Duration::from_millis(50), Some("gave up")).await;
/// assert!(result.is_err());
/// # }
/// ```
pub async fn timeout<F>(
    fut: F,
    duration: Duration,
    message: Option<&str>,
) -> Result<F::Output, UtilError>
where
    F: Future,
{
    match tokio::time::timeout(duration, fut).await {
        Ok(value) => Ok(value),
        Err(_) => Err(UtilError::timeout(duration, message)),
    }
}
