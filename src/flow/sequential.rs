//! Sequential async map/filter
//!
//! Strictly one-at-a-time application: element `n + 1` is not started until
//! element `n` has settled, so side-effect ordering matches input ordering.
//! For bounded parallel execution see [`super::parallel_limit`].

use std::future::Future;

/// Apply an async function to each element in order, collecting the outputs.
pub async fn async_map<T, U, F, Fut>(items: Vec<T>, mut f: F) -> Vec<U>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(f(item).await);
    }
    out
}

/// Fallible [`async_map`]: stops at and propagates the first error.
pub async fn try_async_map<T, U, E, F, Fut>(items: Vec<T>, mut f: F) -> Result<Vec<U>, E>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(f(item).await?);
    }
    Ok(out)
}

/// Keep the elements for which the async predicate returns true, in order.
///
/// The predicate receives a reference; futures that need the element beyond
/// the call should clone what they capture.
pub async fn async_filter<T, F, Fut>(items: Vec<T>, mut pred: F) -> Vec<T>
where
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut out = Vec::new();
    for item in items {
        if pred(&item).await {
            out.push(item);
        }
    }
    out
}
