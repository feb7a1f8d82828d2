//! Wire → native dict conversion.
//!
//! Order matters: hooks see raw wire keys, the remap table runs before the
//! snake_case pass, and unknown-field dropping runs on snake_case keys so it
//! compares against native field names. Timestamp and duration fields are
//! decoded in both modes.

use serde_json::{Map, Value};

use super::coerce::{coerce_wire_value, decode_wire_value};
use super::{ConversionMode, API_KEY};
use crate::schema::{discover, ModelSchema};

/// Convert a decoded wire dict into a native dict for `schema`'s type.
pub fn unifi_dict_to_dict(
    schema: &ModelSchema,
    mut data: Map<String, Value>,
    mode: ConversionMode,
) -> Map<String, Value> {
    data.remove(API_KEY);

    for hook in schema.pre_convert_hooks() {
        hook(&mut data);
    }

    let mut remapped = Map::new();
    for (wire_key, native_key) in schema.remaps() {
        if let Some(value) = data.remove(*wire_key) {
            remapped.insert((*native_key).to_string(), value);
        }
    }

    let mut native = Map::with_capacity(data.len() + remapped.len());
    for (key, value) in data {
        native.insert(schema.native_key(&key), value);
    }
    // remap destinations overwrite whatever the mechanical pass produced
    native.extend(remapped);

    if mode.drops_unknown_fields() {
        native = native
            .into_iter()
            .filter_map(|(key, value)| match schema.field(&key) {
                Some(field) => Some((key, coerce_wire_value(&field.kind, value))),
                None => {
                    tracing::trace!(model = schema.name(), field = %key, "dropping unknown field");
                    None
                }
            })
            .collect();
    } else {
        for (key, value) in native.iter_mut() {
            if let Some(field) = schema.field(key) {
                *value = decode_wire_value(&field.kind, std::mem::take(value));
            }
        }
    }

    let nested = discover(schema);

    for (key, child) in &nested.objs {
        if let Some(value) = native.get_mut(*key) {
            convert_child(child, value, mode);
        }
    }

    for (key, child) in &nested.lists {
        if let Some(Value::Array(items)) = native.get_mut(*key) {
            for item in items.iter_mut() {
                convert_child(child, item, mode);
            }
        }
    }

    for (key, child) in &nested.dicts {
        if let Some(Value::Object(items)) = native.get_mut(*key) {
            for item in items.values_mut() {
                convert_child(child, item, mode);
            }
        }
    }

    native
}

/// Convert one nested value in place; non-dict values pass through.
fn convert_child(schema: &ModelSchema, value: &mut Value, mode: ConversionMode) {
    if let Value::Object(map) = value {
        let wire = std::mem::take(map);
        *map = unifi_dict_to_dict(schema, wire, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdoptableDevice, DeviceModel, WiredConnectionState};
    use crate::object::ProtectObject;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn wire(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_unknown_fields_dropped_in_fast_mode() {
        let native = unifi_dict_to_dict(
            WiredConnectionState::schema(),
            wire(json!({"totallyUnknownField": 1, "phyRate": 1000})),
            ConversionMode::Fast,
        );
        assert_eq!(Value::Object(native), json!({"phy_rate": 1000}));
    }

    #[test]
    fn test_unknown_fields_kept_in_validated_mode() {
        let native = unifi_dict_to_dict(
            WiredConnectionState::schema(),
            wire(json!({"totallyUnknownField": 1, "phyRate": 1000})),
            ConversionMode::Validated,
        );
        assert_eq!(
            Value::Object(native),
            json!({"phy_rate": 1000, "totally_unknown_field": 1})
        );
    }

    #[test]
    fn test_remap_overwrites_destination() {
        let native = unifi_dict_to_dict(
            AdoptableDevice::schema(),
            wire(json!({"bridge": "b-1", "bridgeId": "stale", "modelKey": "bridge"})),
            ConversionMode::Fast,
        );
        assert_eq!(native["bridge_id"], json!("b-1"));
        assert_eq!(native["model"], json!("bridge"));
        assert!(!native.contains_key("bridge"));
        assert!(!native.contains_key("model_key"));
    }

    #[test]
    fn test_nested_objects_are_converted() {
        let native = unifi_dict_to_dict(
            AdoptableDevice::schema(),
            wire(json!({
                "wiredConnectionState": {"phyRate": 100, "noise": 3},
                "wifiConnectionState": {"signalQuality": 80, "ssid": "cams"},
                "bluetoothConnectionState": null,
            })),
            ConversionMode::Fast,
        );
        assert_eq!(native["wired_connection_state"], json!({"phy_rate": 100}));
        assert_eq!(
            native["wifi_connection_state"],
            json!({"signal_quality": 80, "ssid": "cams"})
        );
        assert_eq!(native["bluetooth_connection_state"], Value::Null);
    }

    #[test]
    fn test_device_scalars_are_coerced() {
        let native = unifi_dict_to_dict(
            DeviceModel::schema(),
            wire(json!({"lastSeen": 1700000000000u64, "uptime": 60000, "upSince": null})),
            ConversionMode::Fast,
        );
        assert_eq!(native["last_seen"], json!("2023-11-14T22:13:20Z"));
        assert_eq!(native["uptime"], json!("1m"));
        assert_eq!(native["up_since"], Value::Null);
    }

    #[test]
    fn test_device_times_decoded_in_validated_mode() {
        let native = unifi_dict_to_dict(
            DeviceModel::schema(),
            wire(json!({"lastSeen": 1700000000000u64, "uptime": 60000, "upSince": null})),
            ConversionMode::Validated,
        );
        assert_eq!(native["last_seen"], json!("2023-11-14T22:13:20Z"));
        assert_eq!(native["uptime"], json!("1m"));
        assert_eq!(native["up_since"], Value::Null);
    }

    #[test]
    fn test_back_reference_key_is_stripped() {
        let native = unifi_dict_to_dict(
            WiredConnectionState::schema(),
            wire(json!({"api": "session", "phyRate": 1})),
            ConversionMode::Validated,
        );
        assert!(!native.contains_key(API_KEY));
    }

    #[test]
    fn test_conversion_is_idempotent_on_native_dicts() {
        let once = unifi_dict_to_dict(
            AdoptableDevice::schema(),
            wire(json!({
                "isSshEnabled": true,
                "connectionHost": "10.0.0.2",
                "wiredConnectionState": {"phyRate": 100},
                "lastSeen": 1700000000000u64,
            })),
            ConversionMode::Fast,
        );
        let twice = unifi_dict_to_dict(AdoptableDevice::schema(), once.clone(), ConversionMode::Fast);
        assert_eq!(once, twice);
    }
}
