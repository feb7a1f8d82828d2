//! Scalar coercions between wire and native encodings.
//!
//! Wire timestamps are epoch milliseconds and wire durations are
//! milliseconds. Native dicts carry the encodings the typed models
//! deserialize: RFC 3339 strings (chrono) and humantime strings
//! (humantime-serde).

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;

use crate::schema::{FieldKind, ScalarKind};

/// `f` as an `i64` when it is integral and representable.
fn float_to_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn millis(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().and_then(float_to_i64))
}

/// Epoch-millisecond number → native timestamp. Non-numbers are `None`.
pub fn ms_to_timestamp(value: &Value) -> Option<Value> {
    let dt = DateTime::<Utc>::from_timestamp_millis(millis(value)?)?;
    serde_json::to_value(dt).ok()
}

/// Millisecond number → native duration. Non-numbers are `None`.
pub fn ms_to_duration(value: &Value) -> Option<Value> {
    let ms = u64::try_from(millis(value)?).ok()?;
    let formatted = humantime::format_duration(Duration::from_millis(ms)).to_string();
    Some(Value::String(formatted))
}

/// Native timestamp → epoch milliseconds.
pub fn timestamp_to_ms(value: &Value) -> Option<Value> {
    let dt = DateTime::parse_from_rfc3339(value.as_str()?).ok()?;
    Some(Value::from(dt.with_timezone(&Utc).timestamp_millis()))
}

/// Native duration → milliseconds.
pub fn duration_to_ms(value: &Value) -> Option<Value> {
    let duration = humantime::parse_duration(value.as_str()?).ok()?;
    let ms = u64::try_from(duration.as_millis()).ok()?;
    Some(Value::from(ms))
}

/// Decode wire-only encodings of a declared field: epoch-millisecond
/// timestamps and millisecond durations. Runs in every mode; null and
/// already-native values are left alone.
pub fn decode_wire_value(kind: &FieldKind, value: Value) -> Value {
    map_scalars(kind, value, decode_scalar)
}

/// Full wire → native coercion for a retained field in fast mode: decoding
/// plus repair of float-encoded integers.
pub fn coerce_wire_value(kind: &FieldKind, value: Value) -> Value {
    map_scalars(kind, value, coerce_scalar)
}

fn map_scalars(kind: &FieldKind, value: Value, f: fn(&ScalarKind, Value) -> Value) -> Value {
    match kind {
        FieldKind::Scalar(scalar) => f(scalar, value),
        FieldKind::ScalarList(scalar) => match value {
            Value::Array(items) => Value::Array(items.into_iter().map(|v| f(scalar, v)).collect()),
            other => other,
        },
        FieldKind::Object(_) | FieldKind::List(_) | FieldKind::Map(_) => value,
    }
}

fn decode_scalar(kind: &ScalarKind, value: Value) -> Value {
    match kind {
        ScalarKind::Timestamp => ms_to_timestamp(&value).unwrap_or(value),
        ScalarKind::Duration => ms_to_duration(&value).unwrap_or(value),
        _ => value,
    }
}

fn coerce_scalar(kind: &ScalarKind, value: Value) -> Value {
    match kind {
        // Float-encoded integers, e.g. 5.0. Out-of-range floats stay as they
        // are so construction rejects them.
        ScalarKind::Int if value.is_f64() => match value.as_f64().and_then(float_to_i64) {
            Some(i) => Value::from(i),
            None => value,
        },
        _ => decode_scalar(kind, value),
    }
}

/// Native → wire normalization for a declared scalar field.
pub fn normalize_native_value(kind: &FieldKind, value: Value) -> Value {
    match kind {
        FieldKind::Scalar(scalar) => normalize_scalar(scalar, value),
        FieldKind::ScalarList(scalar) => match value {
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|v| normalize_scalar(scalar, v))
                    .collect(),
            ),
            other => other,
        },
        FieldKind::Object(_) | FieldKind::List(_) | FieldKind::Map(_) => value,
    }
}

fn normalize_scalar(kind: &ScalarKind, value: Value) -> Value {
    match kind {
        ScalarKind::Timestamp => timestamp_to_ms(&value).unwrap_or(value),
        ScalarKind::Duration => duration_to_ms(&value).unwrap_or(value),
        _ => value,
    }
}
