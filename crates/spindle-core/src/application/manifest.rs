//! Package-manifest merging and finalization.
//!
//! Several template fragments contribute to the destination `package.json`.
//! They accumulate through [`merge`] and the merged document goes through
//! [`finalize`] exactly once before being written — a pure function, never a
//! read-modify-write pass over the destination file.

use serde_json::Value;

use crate::application::ports::TemplateRenderer;
use crate::domain::GeneratorConfig;

/// Deep-merge `fragment` into `base`.
///
/// Nested objects merge key-wise; scalars and arrays overwrite. On every
/// conflict the fragment wins.
pub fn merge(base: &mut Value, fragment: Value) {
    match (base, fragment) {
        (Value::Object(base_map), Value::Object(fragment_map)) => {
            for (key, value) in fragment_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, other) => *slot = other,
    }
}

/// Resolve `{{key}}` placeholders inside every string value of the merged
/// manifest. Keys, numbers, booleans and structure are untouched.
pub fn finalize(
    manifest: Value,
    config: &GeneratorConfig,
    renderer: &dyn TemplateRenderer,
) -> Value {
    match manifest {
        Value::String(s) => Value::String(renderer.render(&s, config)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| finalize(item, config, renderer))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, finalize(value, config, renderer)))
                .collect(),
        ),
        other => other,
    }
}
