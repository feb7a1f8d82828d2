//! Partial updates of native dicts.

use serde_json::{Map, Value};

use super::API_KEY;
use crate::schema::{discover, ModelSchema};

/// Overlay `delta` onto `current`.
///
/// Nested-object fields present in both are merged field by field so that
/// siblings missing from the delta survive. A nested value that is absent or
/// null in `current` is replaced wholesale. Everything else is overwritten.
pub fn merge_native(
    schema: &ModelSchema,
    current: &mut Map<String, Value>,
    mut delta: Map<String, Value>,
) {
    delta.remove(API_KEY);

    for (key, child) in &discover(schema).objs {
        let Some(incoming) = delta.remove(*key) else {
            continue;
        };
        match (current.get_mut(*key), incoming) {
            (Some(Value::Object(existing)), Value::Object(nested_delta)) => {
                merge_native(child, existing, nested_delta);
            }
            (_, incoming) => {
                current.insert((*key).to_string(), incoming);
            }
        }
    }

    current.extend(delta);
}
