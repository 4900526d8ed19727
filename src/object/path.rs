//! Dot-path access into JSON values
//!
//! Supports:
//! - `a.b.c` (object fields)
//! - `items.0.name` (numeric segments index arrays)
//!
//! Does NOT support filters, wildcards, or slices.

use serde_json::{Map, Value};

use crate::error::UtilError;

/// A parsed path segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Object field access
    Field(String),
    /// Array index access
    Index(usize),
}

/// Parse a dot-separated path into segments.
///
/// Numeric segments become indices: `"items.0.name"` is
/// `[Field("items"), Index(0), Field("name")]`. Empty paths and empty
/// segments (`"a..b"`) are rejected.
pub fn parse(path: &str) -> Result<Vec<Segment>, UtilError> {
    if path.is_empty() {
        return Err(UtilError::InvalidPath {
            path: path.to_string(),
        });
    }

    let mut segments = Vec::new();
    for part in path.split('.') {
        if part.is_empty() {
            return Err(UtilError::InvalidPath {
                path: path.to_string(),
            });
        }
        if let Ok(index) = part.parse::<usize>() {
            segments.push(Segment::Index(index));
        } else {
            segments.push(Segment::Field(part.to_string()));
        }
    }
    Ok(segments)
}

/// Walk segments through a value. Uses references internally, clones once
/// at the end.
fn apply(value: &Value, segments: &[Segment]) -> Option<Value> {
    let mut current = value;
    for segment in segments {
        current = match segment {
            Segment::Field(name) => current.get(name)?,
            Segment::Index(index) => current.get(*index)?,
        };
    }
    Some(current.clone())
}

/// Read the value at `path`, or `default` when any segment is missing.
///
/// Tolerant by contract: a malformed path behaves like a missing one.
///
/// ```
/// use serde_json::json;
/// use kitbag::object::get_path;
///
/// let value = json!({"a": {"b": {"c": 1}}});
/// assert_eq!(get_path(&value, "a.b.c", json!(null)), json!(1));
/// assert_eq!(get_path(&json!({}), "x.y", json!("default")), json!("default"));
/// ```
pub fn get_path(value: &Value, path: &str, default: Value) -> Value {
    match parse(path) {
        Ok(segments) => apply(value, &segments).unwrap_or(default),
        Err(_) => default,
    }
}

/// True when `path` resolves to any value (including `null`).
pub fn has_path(value: &Value, path: &str) -> bool {
    parse(path)
        .map(|segments| apply(value, &segments).is_some())
        .unwrap_or(false)
}

/// Write `new_value` at `path`, creating intermediate containers: objects
/// for field segments, arrays (null-padded) for index segments. Existing
/// non-container values along the way are replaced.
///
/// ```
/// use serde_json::json;
/// use kitbag::object::set_path;
///
/// let mut value = json!({});
/// set_path(&mut value, "a.b.0", json!("x")).unwrap();
/// assert_eq!(value, json!({"a": {"b": ["x"]}}));
/// ```
pub fn set_path(target: &mut Value, path: &str, new_value: Value) -> Result<(), UtilError> {
    let segments = parse(path)?;
    let mut current = target;
    for segment in &segments[..segments.len() - 1] {
        current = descend(current, segment);
    }
    match segments.last() {
        Some(Segment::Field(name)) => {
            ensure_object(current).insert(name.clone(), new_value);
        }
        Some(Segment::Index(index)) => {
            let arr = ensure_array(current, *index);
            arr[*index] = new_value;
        }
        None => {
            return Err(UtilError::InvalidPath {
                path: path.to_string(),
            })
        }
    }
    Ok(())
}

fn descend<'a>(current: &'a mut Value, segment: &Segment) -> &'a mut Value {
    match segment {
        Segment::Field(name) => ensure_object(current)
            .entry(name.clone())
            .or_insert(Value::Null),
        Segment::Index(index) => {
            let arr = ensure_array(current, *index);
            &mut arr[*index]
        }
    }
}

fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !matches!(slot, Value::Object(_)) {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just coerced to an object"),
    }
}

fn ensure_array(slot: &mut Value, index: usize) -> &mut Vec<Value> {
    if !matches!(slot, Value::Array(_)) {
        *slot = Value::Array(Vec::new());
    }
    match slot {
        Value::Array(arr) => {
            while arr.len() <= index {
                arr.push(Value::Null);
            }
            arr
        }
        _ => unreachable!("slot was just coerced to an array"),
    }
}
