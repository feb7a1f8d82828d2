//! Field declarations for typed UFP objects.
//!
//! Every typed object exposes one `&'static ModelSchema` describing its native
//! fields, its wire-key exceptions (the remap table) and the hooks a derived
//! model adds on top of its ancestors. The conversion engine is driven by
//! these declarations only; the typed structs themselves are plain serde
//! types.
//!
//! Derived models are built by extending the ancestor's [`SchemaBuilder`]:
//! fields are appended, remap entries are merged after the ancestor's,
//! pre-conversion hooks run child-first and wire cleanup hooks run
//! ancestor-first.

use serde_json::{Map, Value};
use std::any::TypeId;
use std::collections::HashMap;

use crate::convert::case::{to_camel_case, to_snake_case};

pub mod introspect;
pub mod registry;

pub use introspect::{discover, NestedFields};

/// Wire-dict rewrite applied before the generic conversion runs.
pub type PreConvertHook = fn(&mut Map<String, Value>);

/// Wire-dict rewrite applied after the generic serialization ran.
pub type CleanupHook = fn(&mut Map<String, Value>);

// =============================================================================
// Field kinds
// =============================================================================

/// Declared type of a scalar native field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Str,
    Int,
    Float,
    Bool,
    /// Native: RFC 3339 UTC string. Wire: epoch milliseconds.
    Timestamp,
    /// Native: humantime string. Wire: milliseconds.
    Duration,
    IpAddr,
    StrOrInt,
    Enum(&'static [&'static str]),
    Any,
}

impl ScalarKind {
    /// Validate a JSON value against this scalar kind.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        match self {
            ScalarKind::Str => expect(value.is_string(), "string", value),
            ScalarKind::Int => expect(value.is_i64() || value.is_u64(), "integer", value),
            ScalarKind::Float => expect(value.is_number(), "number", value),
            ScalarKind::Bool => expect(value.is_boolean(), "boolean", value),
            ScalarKind::Timestamp => match value.as_str() {
                Some(s) => chrono::DateTime::parse_from_rfc3339(s)
                    .map(|_| ())
                    .map_err(|e| format!("invalid timestamp '{}': {}", s, e)),
                None => Err(format!("expected timestamp, got {}", value_type_name(value))),
            },
            ScalarKind::Duration => match value.as_str() {
                Some(s) => humantime::parse_duration(s)
                    .map(|_| ())
                    .map_err(|e| format!("invalid duration '{}': {}", s, e)),
                None => Err(format!("expected duration, got {}", value_type_name(value))),
            },
            ScalarKind::IpAddr => match value.as_str() {
                Some(s) => s
                    .parse::<std::net::IpAddr>()
                    .map(|_| ())
                    .map_err(|_| format!("invalid ip address '{}'", s)),
                None => Err(format!("expected ip address, got {}", value_type_name(value))),
            },
            ScalarKind::StrOrInt => expect(
                value.is_string() || value.is_i64() || value.is_u64(),
                "string or integer",
                value,
            ),
            ScalarKind::Enum(variants) => match value.as_str() {
                Some(s) if variants.contains(&s) => Ok(()),
                Some(s) => Err(format!(
                    "invalid enum value '{}', expected one of: {}",
                    s,
                    variants.join(", ")
                )),
                None => Err(format!("expected string for enum, got {}", value_type_name(value))),
            },
            ScalarKind::Any => Ok(()),
        }
    }
}

/// Declared shape of a native field.
///
/// Nested typed objects are referenced by their registered model name and
/// resolved through [`registry`] when the introspector first runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    ScalarList(ScalarKind),
    Object(&'static str),
    List(&'static str),
    Map(&'static str),
}

impl FieldKind {
    /// Name of the nested model, if this field holds typed objects.
    pub fn nested_name(&self) -> Option<&'static str> {
        match self {
            FieldKind::Object(name) | FieldKind::List(name) | FieldKind::Map(name) => Some(name),
            FieldKind::Scalar(_) | FieldKind::ScalarList(_) => None,
        }
    }
}

/// A single declared native field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Missing or null is accepted.
    pub optional: bool,
}

pub(crate) fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect(ok: bool, expected: &str, value: &Value) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(format!("expected {}, got {}", expected, value_type_name(value)))
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Per-type declaration consumed by the conversion engine.
#[derive(Debug)]
pub struct ModelSchema {
    name: &'static str,
    type_id: TypeId,
    fields: Vec<FieldDef>,
    /// camelCase spelling of every declared field → field name
    declared_wire_keys: HashMap<String, &'static str>,
    remaps: Vec<(&'static str, &'static str)>,
    pre_convert: Vec<PreConvertHook>,
    cleanup: Vec<CleanupHook>,
}

impl ModelSchema {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// `(wire_key, native_key)` pairs, ancestors first.
    pub fn remaps(&self) -> &[(&'static str, &'static str)] {
        &self.remaps
    }

    /// Wire key for a remapped native key. Later (more derived) entries win.
    pub fn wire_key_for(&self, native_key: &str) -> Option<&'static str> {
        self.remaps
            .iter()
            .rev()
            .find(|(_, native)| *native == native_key)
            .map(|(wire, _)| *wire)
    }

    /// Native key for a wire key outside the remap table.
    ///
    /// Declared fields are matched on their exact camelCase spelling first,
    /// so every declared name survives the trip through [`Self::wire_key`]
    /// even where the mechanical snake_case pass would merge its segments.
    pub fn native_key(&self, wire_key: &str) -> String {
        match self.declared_wire_keys.get(wire_key) {
            Some(name) => (*name).to_string(),
            None => to_snake_case(wire_key),
        }
    }

    /// Wire key for a native key: the remap table, else camelCase.
    pub fn wire_key(&self, native_key: &str) -> String {
        match self.wire_key_for(native_key) {
            Some(remapped) => remapped.to_string(),
            None => to_camel_case(native_key),
        }
    }

    pub(crate) fn pre_convert_hooks(&self) -> &[PreConvertHook] {
        &self.pre_convert
    }

    pub(crate) fn cleanup_hooks(&self) -> &[CleanupHook] {
        &self.cleanup
    }
}

/// Accumulates the declarations of one model layer and its ancestors.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDef>,
    remaps: Vec<(&'static str, &'static str)>,
    pre_convert: Vec<PreConvertHook>,
    cleanup: Vec<CleanupHook>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required field.
    pub fn field(self, name: &'static str, kind: FieldKind) -> Self {
        self.push_field(name, kind, false)
    }

    /// Declare a field that may be missing or null.
    pub fn optional(self, name: &'static str, kind: FieldKind) -> Self {
        self.push_field(name, kind, true)
    }

    fn push_field(mut self, name: &'static str, kind: FieldKind, optional: bool) -> Self {
        self.fields.retain(|f| f.name != name);
        self.fields.push(FieldDef {
            name,
            kind,
            optional,
        });
        self
    }

    /// Map a wire key that does not follow camelCase to its native field.
    ///
    /// Re-mapping a wire key an ancestor already mapped replaces that entry.
    pub fn remap(mut self, wire_key: &'static str, native_key: &'static str) -> Self {
        self.remaps.retain(|(wire, _)| *wire != wire_key);
        self.remaps.push((wire_key, native_key));
        self
    }

    /// Run `hook` on the raw wire dict before the ancestors' hooks.
    pub fn pre_convert(mut self, hook: PreConvertHook) -> Self {
        self.pre_convert.insert(0, hook);
        self
    }

    /// Run `hook` on the finished wire dict after the ancestors' hooks.
    pub fn cleanup(mut self, hook: CleanupHook) -> Self {
        self.cleanup.push(hook);
        self
    }

    pub fn build<T: 'static>(self, name: &'static str) -> ModelSchema {
        let declared_wire_keys = self
            .fields
            .iter()
            .map(|f| (to_camel_case(f.name), f.name))
            .collect();

        ModelSchema {
            name,
            type_id: TypeId::of::<T>(),
            fields: self.fields,
            declared_wire_keys,
            remaps: self.remaps,
            pre_convert: self.pre_convert,
            cleanup: self.cleanup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    struct Marker;

    fn strip_a(data: &mut Map<String, Value>) {
        data.remove("a");
    }

    fn strip_b(data: &mut Map<String, Value>) {
        data.remove("b");
    }

    #[test]
    fn test_scalar_validation() {
        assert!(ScalarKind::Int.validate(&json!(5)).is_ok());
        assert!(ScalarKind::Int.validate(&json!(5.5)).is_err());
        assert!(ScalarKind::Timestamp.validate(&json!("2023-11-14T22:13:20Z")).is_ok());
        assert!(ScalarKind::Timestamp.validate(&json!(1700000000000u64)).is_err());
        assert!(ScalarKind::Duration.validate(&json!("1m")).is_ok());
        assert!(ScalarKind::Duration.validate(&json!("soon")).is_err());
        assert!(ScalarKind::IpAddr.validate(&json!("192.168.1.10")).is_ok());
        assert!(ScalarKind::IpAddr.validate(&json!("not-an-ip")).is_err());
        assert!(ScalarKind::StrOrInt.validate(&json!(3)).is_ok());
        assert!(ScalarKind::StrOrInt.validate(&json!("r3")).is_ok());
        assert!(ScalarKind::StrOrInt.validate(&json!(true)).is_err());

        let err = ScalarKind::Enum(&["low", "high"])
            .validate(&json!("medium"))
            .unwrap_err();
        assert_eq!(err, "invalid enum value 'medium', expected one of: low, high");
    }

    #[test]
    fn test_builder_layers_compose() {
        let base = SchemaBuilder::new()
            .field("id", FieldKind::Scalar(ScalarKind::Str))
            .remap("modelKey", "model")
            .pre_convert(strip_a)
            .cleanup(strip_a);
        let schema = base
            .optional("bridge_id", FieldKind::Scalar(ScalarKind::Str))
            .remap("bridge", "bridge_id")
            .pre_convert(strip_b)
            .cleanup(strip_b)
            .build::<Marker>("Marker");

        assert_eq!(schema.name(), "Marker");
        assert_eq!(schema.type_id(), TypeId::of::<Marker>());
        assert_eq!(schema.fields().len(), 2);
        assert!(schema.field("bridge_id").unwrap().optional);
        assert!(!schema.field("id").unwrap().optional);
        assert_eq!(schema.remaps(), &[("modelKey", "model"), ("bridge", "bridge_id")]);
        assert_eq!(schema.wire_key_for("bridge_id"), Some("bridge"));
        assert_eq!(schema.wire_key_for("id"), None);

        assert_eq!(schema.pre_convert_hooks().len(), 2);
        assert_eq!(schema.cleanup_hooks().len(), 2);

        let mut data = json!({"a": 1, "b": 2, "c": 3}).as_object().cloned().unwrap();
        for hook in schema.cleanup_hooks() {
            hook(&mut data);
        }
        assert_eq!(Value::Object(data), json!({"c": 3}));
    }

    #[test]
    fn test_child_remap_replaces_inherited_wire_key() {
        let schema = SchemaBuilder::new()
            .optional("bridge_id", FieldKind::Scalar(ScalarKind::Str))
            .optional("bridge_ref", FieldKind::Scalar(ScalarKind::Str))
            .remap("bridge", "bridge_id")
            .remap("bridge", "bridge_ref")
            .build::<Marker>("Marker");

        assert_eq!(schema.remaps(), &[("bridge", "bridge_ref")]);
        assert_eq!(schema.wire_key("bridge_ref"), "bridge");
        assert_eq!(schema.wire_key("bridge_id"), "bridgeId");
        assert_eq!(schema.wire_key_for("bridge_id"), None);
    }

    #[test]
    fn test_declared_names_resolve_exactly() {
        let schema = SchemaBuilder::new()
            .field("a_a_a0", FieldKind::Scalar(ScalarKind::Int))
            .field("is_ssh_enabled", FieldKind::Scalar(ScalarKind::Bool))
            .build::<Marker>("Marker");

        let wire = schema.wire_key("a_a_a0");
        assert_eq!(schema.native_key(&wire), "a_a_a0");
        assert_eq!(schema.native_key("isSshEnabled"), "is_ssh_enabled");
        assert_eq!(schema.native_key("isSSHEnabled"), "is_ssh_enabled");
        assert_eq!(schema.native_key("totallyUnknownField"), "totally_unknown_field");
    }

    proptest! {
        #[test]
        fn declared_fields_survive_wire_round_trip(
            key in "[a-z][a-z0-9]{0,6}(_[a-z][a-z0-9]{0,6}){0,3}"
        ) {
            let name: &'static str = Box::leak(key.clone().into_boxed_str());
            let schema = SchemaBuilder::new()
                .field(name, FieldKind::Scalar(ScalarKind::Any))
                .build::<Marker>("Marker");
            prop_assert_eq!(schema.native_key(&schema.wire_key(&key)), key);
        }
    }

    #[test]
    fn test_redeclared_field_replaces_ancestor() {
        let schema = SchemaBuilder::new()
            .field("model", FieldKind::Scalar(ScalarKind::Str))
            .optional("model", FieldKind::Scalar(ScalarKind::Any))
            .build::<Marker>("Marker");
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.fields()[0].kind, FieldKind::Scalar(ScalarKind::Any));
    }
}
