//! Typed-object construction from native dicts.

use serde_json::{Map, Value};

use super::ConversionMode;
use crate::api::ApiHandle;
use crate::object::ProtectObject;
use crate::types::Result;
use crate::validation;

/// Build a `T` from a native dict and attach `api` to the whole graph.
///
/// `Validated` checks every declared field (recursively) against the schema
/// first and reports all mismatches together. `Fast` hands the dict straight
/// to serde; payloads are trusted and only structural failures surface.
pub fn construct<T: ProtectObject>(
    data: Map<String, Value>,
    api: &ApiHandle,
    mode: ConversionMode,
) -> Result<T> {
    if mode.validates() {
        validation::validate(T::schema(), &data)?;
    }

    let mut obj: T = serde_json::from_value(Value::Object(data))?;
    obj.attach_api(api);
    Ok(obj)
}

/// Serialize `obj` to its native dict (the shallow dump of the object graph).
pub fn to_native<T: ProtectObject>(obj: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(obj)? {
        Value::Object(map) => Ok(map),
        other => Err(crate::types::Error::validation(format!(
            "{} serialized to {} instead of an object",
            T::schema().name(),
            crate::schema::value_type_name(&other)
        ))),
    }
}
