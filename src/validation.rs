//! Schema validation boundary
//!
//! The crate does not implement schema validation itself (that is delegated
//! to the `jsonschema` crate); this module is the single adapter between
//! that library's error shape and the [`crate::outcome`] failure form.
//! Nothing else in the crate inspects `jsonschema` types.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::outcome::{common, ok, ApiResult, FailureResult};

/// Convert `jsonschema` validation errors into a [`FailureResult`] with
/// `VALIDATION_FAILED` and per-field messages.
///
/// Field keys are the dot-joined instance paths (`"address.city"`,
/// `"items.0"`); root-level errors land under `"root"`. When several errors
/// hit the same field, the first message wins.
pub fn validation_failure<'a, I>(errors: I) -> FailureResult
where
    I: IntoIterator<Item = jsonschema::ValidationError<'a>>,
{
    let mut field_errors = BTreeMap::new();
    for error in errors {
        let field = field_key(&error.instance_path.to_string());
        field_errors.entry(field).or_insert_with(|| error.to_string());
    }
    FailureResult::from_model(&common::VALIDATION_FAILED).with_field_errors(field_errors)
}

/// Validate `instance` against a compiled schema, producing an
/// [`ApiResult`].
pub fn validate(schema: &jsonschema::Validator, instance: &Value) -> ApiResult<()> {
    let errors: Vec<_> = schema.iter_errors(instance).collect();
    if errors.is_empty() {
        ok()
    } else {
        ApiResult::Failure(validation_failure(errors))
    }
}

/// JSON pointer (`/a/0/b`) to dot path (`a.0.b`); empty pointer is `root`.
fn field_key(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        "root".to_string()
    } else {
        trimmed.replace('/', ".")
    }
}
