//! JSON object helpers
//!
//! Structural operations over `serde_json::Value` trees: key selection,
//! recursive merge, dot-path flattening, and typed accessors. All helpers
//! are non-mutating except `set_path`.

mod path;

pub use path::{get_path, has_path, parse, set_path, Segment};

use serde_json::{Map, Value};

/// New object containing only the named keys (missing keys are skipped).
/// Non-object input yields an empty object.
///
/// ```
/// use serde_json::json;
/// let picked = kitbag::object::pick(&json!({"a": 1, "b": 2, "c": 3}), &["a", "c"]);
/// assert_eq!(picked, json!({"a": 1, "c": 3}));
/// ```
pub fn pick(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for key in keys {
            if let Some(v) = map.get(*key) {
                out.insert((*key).to_string(), v.clone());
            }
        }
    }
    Value::Object(out)
}

/// New object without the named keys. Non-object input yields an empty
/// object.
pub fn omit(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for (key, v) in map {
            if !keys.contains(&key.as_str()) {
                out.insert(key.clone(), v.clone());
            }
        }
    }
    Value::Object(out)
}

/// Full structural copy of a JSON tree.
///
/// `Value` owns its whole subtree, so a clone is already deep: objects,
/// arrays, and scalars are copied recursively with no shared state between
/// the original and the copy.
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}

/// Recursively merge `overlay` onto `base`.
///
/// Objects merge key-by-key; everything else -- scalars AND arrays --
/// replaces wholesale. Array replacement (not concatenation) is the
/// contract: `{"tags": ["a"]}` merged with `{"tags": ["b"]}` is
/// `{"tags": ["b"]}`.
///
/// ```
/// use serde_json::json;
/// let merged = kitbag::object::deep_merge(
///     &json!({"a": 1, "b": {"c": 2}}),
///     &json!({"b": {"d": 3}}),
/// );
/// assert_eq!(merged, json!({"a": 1, "b": {"c": 2, "d": 3}}));
/// ```
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, overlay_value) in overlay_map {
                let combined = match merged.get(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                merged.insert(key.clone(), combined);
            }
            Value::Object(merged)
        }
        (_, replacement) => replacement.clone(),
    }
}

/// Flatten nested objects into a single-level map with dot-joined keys.
///
/// Arrays are treated as leaves (they survive intact under their path).
///
/// ```
/// use serde_json::json;
/// let flat = kitbag::object::flatten_paths(&json!({"a": {"b": 1, "c": {"d": 2}}}));
/// assert_eq!(flat.get("a.b"), Some(&json!(1)));
/// assert_eq!(flat.get("a.c.d"), Some(&json!(2)));
/// ```
pub fn flatten_paths(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for (key, v) in map {
            flatten_into(key.clone(), v, &mut out);
        }
    }
    out
}

fn flatten_into(prefix: String, value: &Value, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, v) in map {
                flatten_into(format!("{prefix}.{key}"), v, out);
            }
        }
        leaf => {
            out.insert(prefix, leaf.clone());
        }
    }
}

/// Inverse of [`flatten_paths`]: expand dot-joined keys back into nested
/// objects. Only objects are rebuilt; dotted keys never recreate arrays.
pub fn unflatten_paths(flat: &Map<String, Value>) -> Value {
    let mut out = Value::Object(Map::new());
    for (path, value) in flat {
        let mut current = &mut out;
        let parts: Vec<&str> = path.split('.').collect();
        for part in &parts[..parts.len() - 1] {
            let map = match current {
                Value::Object(map) => map,
                _ => break,
            };
            current = map
                .entry((*part).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        if let (Value::Object(map), Some(leaf)) = (&mut *current, parts.last()) {
            map.insert((*leaf).to_string(), value.clone());
        }
    }
    out
}

/// Keys of an object, in the map's key order. Non-object input yields nothing.
pub fn keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Values of an object, in the map's key order.
pub fn values(value: &Value) -> Vec<Value> {
    match value {
        Value::Object(map) => map.values().cloned().collect(),
        _ => Vec::new(),
    }
}

/// `(key, value)` pairs of an object, in the map's key order.
pub fn entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pick_selects_existing_keys() {
        let value = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(pick(&value, &["a", "c", "zzz"]), json!({"a": 1, "c": 3}));
        assert_eq!(pick(&json!(42), &["a"]), json!({}));
    }

    #[test]
    fn omit_drops_named_keys() {
        let value = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(omit(&value, &["b"]), json!({"a": 1, "c": 3}));
        assert_eq!(omit(&value, &[]), value);
    }

    #[test]
    fn deep_clone_shares_nothing() {
        let original = json!({"a": {"b": [1, 2, {"c": 3}]}});
        let mut copy = deep_clone(&original);
        set_path(&mut copy, "a.b.2.c", json!(99)).unwrap();
        assert_eq!(get_path(&original, "a.b.2.c", json!(null)), json!(3));
        assert_eq!(get_path(&copy, "a.b.2.c", json!(null)), json!(99));
    }

    #[test]
    fn deep_merge_combines_nested_objects() {
        let merged = deep_merge(&json!({"a": 1, "b": {"c": 2}}), &json!({"b": {"d": 3}}));
        assert_eq!(merged, json!({"a": 1, "b": {"c": 2, "d": 3}}));
    }

    #[test]
    fn deep_merge_replaces_arrays_wholesale() {
        let merged = deep_merge(&json!({"tags": ["a"]}), &json!({"tags": ["b"]}));
        assert_eq!(merged, json!({"tags": ["b"]}));
    }

    #[test]
    fn deep_merge_overlay_scalar_wins() {
        let merged = deep_merge(&json!({"a": {"deep": true}}), &json!({"a": 7}));
        assert_eq!(merged, json!({"a": 7}));
        // and in the other direction an object replaces a scalar
        let merged = deep_merge(&json!({"a": 7}), &json!({"a": {"deep": true}}));
        assert_eq!(merged, json!({"a": {"deep": true}}));
    }

    #[test]
    fn flatten_and_unflatten_round_trip_objects() {
        let value = json!({"a": {"b": 1, "c": {"d": 2}}, "e": [1, 2]});
        let flat = flatten_paths(&value);
        assert_eq!(flat.get("a.b"), Some(&json!(1)));
        assert_eq!(flat.get("a.c.d"), Some(&json!(2)));
        // arrays are leaves
        assert_eq!(flat.get("e"), Some(&json!([1, 2])));

        assert_eq!(unflatten_paths(&flat), value);
    }

    #[test]
    fn flatten_keeps_empty_objects_as_leaves() {
        let flat = flatten_paths(&json!({"a": {}}));
        assert_eq!(flat.get("a"), Some(&json!({})));
    }

    #[test]
    fn typed_accessors() {
        let value = json!({"x": 1, "y": "two"});
        assert_eq!(keys(&value), vec!["x", "y"]);
        assert_eq!(values(&value), vec![json!(1), json!("two")]);
        assert_eq!(
            entries(&value),
            vec![("x".to_string(), json!(1)), ("y".to_string(), json!("two"))]
        );
        assert!(keys(&json!([1, 2])).is_empty());
    }
}
