//! Trailing-edge debouncing
//!
//! Coalesces bursts of calls into one invocation after a quiet period.
//! Each new call supersedes the pending one; only the final call in a burst
//! actually runs the wrapped function.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::trace;

use crate::error::UtilError;

/// Debounce wrapper for an async function.
///
/// `call` hands each caller a future. When the quiet period passes without a
/// newer call, the latest call runs the function and its future resolves with
/// the output. Superseded callers resolve with
/// [`UtilError::DebounceSuperseded`] -- they do not hang forever waiting for
/// an execution that will never be theirs.
pub struct Debouncer<A, F> {
    func: Arc<F>,
    quiet: Duration,
    generation: Arc<AtomicU64>,
    _args: PhantomData<fn(A)>,
}

impl<A, F, Fut, T> Debouncer<A, F>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    pub fn new(quiet: Duration, func: F) -> Self {
        Self {
            func: Arc::new(func),
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
            _args: PhantomData,
        }
    }

    /// Schedule a call. Resolves with the function's output if this call is
    /// still the latest when the quiet period ends.
    pub fn call(&self, arg: A) -> impl Future<Output = Result<T, UtilError>> {
        let this_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let func = Arc::clone(&self.func);
        let quiet = self.quiet;
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            if generation.load(Ordering::SeqCst) == this_gen {
                trace!(generation = this_gen, "debounce window closed, executing");
                let output = func(arg).await;
                // Receiver may have been dropped; nothing to do then.
                let _ = tx.send(output);
            }
        });

        async move { rx.await.map_err(|_| UtilError::DebounceSuperseded) }
    }
}

/// Debounce wrapper for a synchronous side-effecting function.
///
/// Fire-and-forget: callers get no handle, the function simply runs once per
/// burst after the quiet period.
pub struct SyncDebouncer<A, F> {
    func: Arc<F>,
    quiet: Duration,
    generation: Arc<AtomicU64>,
    _args: PhantomData<fn(A)>,
}

impl<A, F> SyncDebouncer<A, F>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    pub fn new(quiet: Duration, func: F) -> Self {
        Self {
            func: Arc::new(func),
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
            _args: PhantomData,
        }
    }

    pub fn call(&self, arg: A) {
        let this_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let func = Arc::clone(&self.func);
        let quiet = self.quiet;

        tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            if generation.load(Ordering::SeqCst) == this_gen {
                func(arg);
            }
        });
    }
}
