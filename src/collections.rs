//! List and set operations
//!
//! All helpers are non-mutating: they borrow their input and return new
//! containers. Order guarantees are part of the contract -- dedup and set
//! operations preserve first-seen order, and the `-by` selector variants
//! resolve ties to the first occurrence.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::Sum;

use rand::seq::SliceRandom;
use serde_json::Value;

/// Split into consecutive chunks of at most `size` elements.
///
/// The final chunk may be shorter. `size == 0` yields no chunks.
///
/// ```
/// let chunks = kitbag::collections::chunk(&[1, 2, 3, 4, 5], 2);
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(kitbag::collections::chunk(&[1, 2, 3], 0).is_empty());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Remove duplicates, keeping the first occurrence of each element.
///
/// ```
/// assert_eq!(kitbag::collections::unique(&[1, 2, 2, 3, 3]), vec![1, 2, 3]);
/// ```
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Remove duplicates by a derived key, keeping the first occurrence.
pub fn unique_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key(item)))
        .cloned()
        .collect()
}

/// Group elements by a derived key. Within each group, input order is kept.
pub fn group_by<T, K, F>(items: &[T], mut key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Split into (matching, non-matching) by a predicate, preserving order.
pub fn partition<T, F>(items: &[T], mut pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for item in items {
        if pred(item) {
            yes.push(item.clone());
        } else {
            no.push(item.clone());
        }
    }
    (yes, no)
}

/// Return a uniformly shuffled copy (Fisher-Yates over `thread_rng`).
///
/// The random source is NOT cryptographic. Do not use this where an
/// adversary must not predict the permutation (card deals, token order).
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut rand::thread_rng());
    out
}

/// Drop `None` entries, unwrapping the rest in order.
///
/// ```
/// assert_eq!(kitbag::collections::compact(&[Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn compact<T: Clone>(items: &[Option<T>]) -> Vec<T> {
    items.iter().filter_map(Clone::clone).collect()
}

/// Elements of `a` that also appear in `b`, in `a`'s order.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let b_set: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| b_set.contains(x)).cloned().collect()
}

/// Elements of `a` that do not appear in `b`, in `a`'s order.
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let b_set: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| !b_set.contains(x)).cloned().collect()
}

/// Flatten one level of nesting.
pub fn flatten<T: Clone>(items: &[Vec<T>]) -> Vec<T> {
    items.iter().flatten().cloned().collect()
}

/// Flatten arbitrarily nested JSON arrays into a flat list of leaf values.
///
/// Non-array input is returned as a single-element list.
///
/// ```
/// use serde_json::json;
/// let flat = kitbag::collections::flatten_deep(&json!([1, [2, [3, 4]], 5]));
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
/// ```
pub fn flatten_deep(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    collect_leaves(value, &mut out);
    out
}

fn collect_leaves(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_leaves(item, out);
            }
        }
        leaf => out.push(leaf.clone()),
    }
}

/// Sum of all elements. Empty input sums to the type's zero.
pub fn sum<T: Sum<T> + Copy>(items: &[T]) -> T {
    items.iter().copied().sum()
}

/// Sum of a derived numeric value per element.
pub fn sum_by<T, F>(items: &[T], f: F) -> f64
where
    F: FnMut(&T) -> f64,
{
    items.iter().map(f).sum()
}

/// Smallest element, or `None` when empty. Ties go to the first occurrence.
pub fn min<T: PartialOrd>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .fold(None, |best: Option<&T>, x| match best {
            Some(b) if x < b => Some(x),
            Some(b) => Some(b),
            None => Some(x),
        })
}

/// Largest element, or `None` when empty. Ties go to the first occurrence.
pub fn max<T: PartialOrd>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .fold(None, |best: Option<&T>, x| match best {
            Some(b) if x > b => Some(x),
            Some(b) => Some(b),
            None => Some(x),
        })
}

/// Element with the smallest derived key; first occurrence wins ties.
pub fn min_by_key<T, K, F>(items: &[T], mut key: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        match &best {
            Some((_, bk)) if k < *bk => best = Some((item, k)),
            Some(_) => {}
            None => best = Some((item, k)),
        }
    }
    best.map(|(item, _)| item)
}

/// Element with the largest derived key; first occurrence wins ties.
///
/// Note this differs from `Iterator::max_by_key`, which returns the LAST
/// maximum.
pub fn max_by_key<T, K, F>(items: &[T], mut key: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        match &best {
            Some((_, bk)) if k > *bk => best = Some((item, k)),
            Some(_) => {}
            None => best = Some((item, k)),
        }
    }
    best.map(|(item, _)| item)
}

/// First `n` elements (all of them when `n` exceeds the length).
pub fn take<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

/// Last `n` elements, preserving order.
pub fn take_last<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    let start = items.len().saturating_sub(n);
    items[start..].to_vec()
}

/// True for `None` and for empty slices.
pub fn is_nil_or_empty<T>(items: Option<&[T]>) -> bool {
    items.map_or(true, <[T]>::is_empty)
}
