//! Native → wire dict conversion.
//!
//! Nested typed objects are always serialized through their own schema, so
//! their remaps, normalization and cleanup rules run at every level.

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::coerce::normalize_native_value;
use super::API_KEY;
use crate::schema::{discover, ModelSchema};

/// Convert a native dict for `schema`'s type into a wire dict.
///
/// Keys in `exclude` are dropped before anything else runs.
pub fn unifi_dict(
    schema: &ModelSchema,
    mut data: Map<String, Value>,
    exclude: Option<&HashSet<String>>,
) -> Map<String, Value> {
    if let Some(exclude) = exclude {
        data.retain(|key, _| !exclude.contains(key));
    }
    data.remove(API_KEY);

    let nested = discover(schema);

    for (key, child) in &nested.objs {
        if let Some(value) = data.get_mut(*key) {
            export_child(child, value);
        }
    }

    for (key, child) in &nested.lists {
        if let Some(Value::Array(items)) = data.get_mut(*key) {
            for item in items.iter_mut() {
                export_child(child, item);
            }
        }
    }

    for (key, child) in &nested.dicts {
        if let Some(Value::Object(items)) = data.get_mut(*key) {
            for item in items.values_mut() {
                export_child(child, item);
            }
        }
    }

    let mut wire = Map::with_capacity(data.len());
    for (key, value) in data {
        let value = match schema.field(&key) {
            Some(field) if !nested.contains(&key) => normalize_native_value(&field.kind, value),
            _ => value,
        };
        wire.insert(schema.wire_key(&key), value);
    }

    wire.remove(API_KEY);

    for hook in schema.cleanup_hooks() {
        hook(&mut wire);
    }

    wire
}

fn export_child(schema: &ModelSchema, value: &mut Value) {
    if let Value::Object(map) = value {
        let native = std::mem::take(map);
        *map = unifi_dict(schema, native, None);
    }
}

/// Drop `key` from a wire dict when it serialized to null.
pub fn remove_if_null(data: &mut Map<String, Value>, key: &str) {
    if matches!(data.get(key), Some(Value::Null)) {
        data.remove(key);
    }
}
