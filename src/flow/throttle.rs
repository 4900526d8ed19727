//! Rate gating with cached results

use std::future::Future;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::trace;

/// Throttle wrapper for an async function.
///
/// The first call executes immediately and caches its result; calls inside
/// the window get the cached prior result back without executing. After the
/// window elapses the next call executes again.
///
/// Concurrent first calls may both execute (the gate is checked before the
/// await); last writer wins the cache slot. This mirrors the cooperative
/// single-flow model the helper was designed for.
pub struct Throttle<A, F, T> {
    func: F,
    window: Duration,
    last: Mutex<Option<(Instant, T)>>,
    _args: PhantomData<fn(A)>,
}

impl<A, F, Fut, T> Throttle<A, F, T>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T>,
    T: Clone,
{
    pub fn new(window: Duration, func: F) -> Self {
        Self {
            func,
            window,
            last: Mutex::new(None),
            _args: PhantomData,
        }
    }

    pub async fn call(&self, arg: A) -> T {
        {
            let last = self.last.lock();
            if let Some((at, cached)) = last.as_ref() {
                if at.elapsed() < self.window {
                    trace!("throttled, returning cached result");
                    return cached.clone();
                }
            }
        }
        let output = (self.func)(arg).await;
        *self.last.lock() = Some((Instant::now(), output.clone()));
        output
    }
}
