//! Bounded-concurrency execution
//!
//! Both helpers bound in-flight work with explicit admission tracking over
//! the tasks the caller hands in. Neither spins up a worker pool.

use std::future::Future;

use futures::future::try_join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

async fn with_index<Fut, T, E>(index: usize, task: Fut) -> (usize, Result<T, E>)
where
    Fut: Future<Output = Result<T, E>>,
{
    (index, task.await)
}

/// Run `tasks` with at most `concurrency` in flight at any instant.
///
/// Admission is race-based: whichever in-flight task finishes first frees a
/// slot for the next pending one (this is NOT a FIFO worker pool, and the
/// distinction is deliberate -- it affects fairness under skewed task
/// durations). Results come back in original task order regardless of
/// completion order.
///
/// On the first rejection no further tasks are admitted; already-racing
/// tasks are left to settle, then the first error is returned.
/// `concurrency == 0` is clamped to 1 rather than silently dropping work.
pub async fn parallel_limit<Fut, T, E>(tasks: Vec<Fut>, concurrency: usize) -> Result<Vec<T>, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    let concurrency = concurrency.max(1);
    let total = tasks.len();
    let mut results: Vec<Option<T>> = Vec::with_capacity(total);
    results.resize_with(total, || None);

    let mut pending = tasks.into_iter().enumerate();
    let mut in_flight = FuturesUnordered::new();
    for _ in 0..concurrency {
        if let Some((index, task)) = pending.next() {
            in_flight.push(with_index(index, task));
        }
    }

    let mut first_error: Option<E> = None;
    while let Some((index, outcome)) = in_flight.next().await {
        match outcome {
            Ok(value) => {
                results[index] = Some(value);
                if first_error.is_none() {
                    if let Some((next_index, task)) = pending.next() {
                        in_flight.push(with_index(next_index, task));
                    }
                }
            }
            Err(err) => {
                if first_error.is_none() {
                    debug!(index, "task failed, draining in-flight set");
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(results.into_iter().flatten().collect()),
    }
}

/// Run `tasks` in sequential chunks of `chunk_size`, each chunk fully in
/// parallel, the next chunk starting only when the previous one is done.
///
/// Aggregated results preserve original task order. A failure inside a chunk
/// surfaces immediately (sibling tasks in that chunk are dropped at the
/// join); later chunks never start. `chunk_size == 0` yields no work, same
/// as `chunk` on slices.
pub async fn batch_execute<Fut, T, E>(tasks: Vec<Fut>, chunk_size: usize) -> Result<Vec<T>, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    if chunk_size == 0 {
        return Ok(Vec::new());
    }
    let mut results = Vec::with_capacity(tasks.len());
    let mut pending = tasks.into_iter().peekable();
    while pending.peek().is_some() {
        let batch: Vec<Fut> = pending.by_ref().take(chunk_size).collect();
        let mut settled = try_join_all(batch).await?;
        results.append(&mut settled);
    }
    Ok(results)
}
