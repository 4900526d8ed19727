//! Async control-flow combinators
//!
//! Reusable combinators over cooperative asynchronous tasks: retry with
//! exponential backoff, deadline racing, burst coalescing (debounce),
//! rate gating (throttle), bounded-concurrency execution, condition
//! polling, and memoization.
//!
//! Everything here assumes a tokio runtime. No worker pools are created:
//! concurrency bounding is done by admission tracking (a bounded in-flight
//! set), and cancellation is not a first-class concept -- `timeout` races,
//! it does not terminate the loser's spawned work.

mod debounce;
mod memo;
mod parallel;
mod poll;
mod retry;
mod sequential;
mod throttle;
mod timing;

pub use debounce::{Debouncer, SyncDebouncer};
pub use memo::{Memoized, MemoizeOptions};
pub use parallel::{batch_execute, parallel_limit};
pub use poll::{wait_for, wait_for_sync, WaitForOptions};
pub use retry::{retry, RetryOptions};
pub use sequential::{async_filter, async_map, try_async_map};
pub use throttle::Throttle;
pub use timing::{sleep, timeout};
