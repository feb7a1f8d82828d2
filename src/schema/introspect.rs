//! Nested-object discovery, memoized per type.
//!
//! The result for a type is computed on first access and shared for the rest
//! of the process. Two callers racing on the first access both compute the
//! same value; the second insert overwrites it with an identical one.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::{registry, FieldKind, ModelSchema};

type Cache = RwLock<HashMap<TypeId, Arc<NestedFields>>>;

static CACHE: OnceLock<Cache> = OnceLock::new();

/// Fields of one type that hold typed objects, grouped by shape.
#[derive(Debug, Default, Clone)]
pub struct NestedFields {
    /// field name → schema of the single nested object
    pub objs: Vec<(&'static str, &'static ModelSchema)>,
    /// field name → schema of the list element
    pub lists: Vec<(&'static str, &'static ModelSchema)>,
    /// field name → schema of the mapping value
    pub dicts: Vec<(&'static str, &'static ModelSchema)>,
}

impl NestedFields {
    pub fn is_empty(&self) -> bool {
        self.objs.is_empty() && self.lists.is_empty() && self.dicts.is_empty()
    }

    /// Whether `name` is any kind of nested-object field.
    pub fn contains(&self, name: &str) -> bool {
        self.objs
            .iter()
            .chain(&self.lists)
            .chain(&self.dicts)
            .any(|(field, _)| *field == name)
    }
}

/// Return the nested-object fields of `schema`'s type.
pub fn discover(schema: &ModelSchema) -> Arc<NestedFields> {
    let cache = CACHE.get_or_init(|| RwLock::new(HashMap::new()));

    if let Some(found) = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&schema.type_id())
    {
        return Arc::clone(found);
    }

    let computed = Arc::new(compute(schema));
    tracing::debug!(
        model = schema.name(),
        objs = computed.objs.len(),
        lists = computed.lists.len(),
        dicts = computed.dicts.len(),
        "nested fields discovered"
    );
    cache
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(schema.type_id(), Arc::clone(&computed));
    computed
}

fn compute(schema: &ModelSchema) -> NestedFields {
    let mut nested = NestedFields::default();

    for field in schema.fields() {
        let Some(type_name) = field.kind.nested_name() else {
            continue;
        };
        let Some(target) = registry::resolve(type_name) else {
            tracing::warn!(
                model = schema.name(),
                field = field.name,
                nested_type = type_name,
                "nested type is not registered, treating field as scalar"
            );
            continue;
        };

        match field.kind {
            FieldKind::List(_) => nested.lists.push((field.name, target)),
            FieldKind::Map(_) => nested.dicts.push((field.name, target)),
            FieldKind::Object(_) => nested.objs.push((field.name, target)),
            FieldKind::Scalar(_) | FieldKind::ScalarList(_) => {}
        }
    }

    nested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdoptableDevice, Light, WiredConnectionState};
    use crate::object::ProtectObject;
    use crate::schema::{ScalarKind, SchemaBuilder};

    #[test]
    fn test_adoptable_device_connection_states_are_objects() {
        let nested = discover(AdoptableDevice::schema());
        let names: Vec<&str> = nested.objs.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "wired_connection_state",
                "wifi_connection_state",
                "bluetooth_connection_state"
            ]
        );
        assert!(nested.lists.is_empty());
        assert!(nested.dicts.is_empty());
        assert_eq!(nested.objs[1].1.name(), "WifiConnectionState");
    }

    #[test]
    fn test_leaf_object_has_no_nested_fields() {
        assert!(discover(WiredConnectionState::schema()).is_empty());
    }

    #[test]
    fn test_discover_is_memoized() {
        let first = discover(Light::schema());
        let second = discover(Light::schema());
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.contains("light_device_settings"));
        assert!(!first.contains("name"));
    }

    #[test]
    fn test_shapes_are_classified() {
        struct Shapes;
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        let schema = SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .field("single", FieldKind::Object("WiredConnectionState"))
                .field("many", FieldKind::List("WiredConnectionState"))
                .field("keyed", FieldKind::Map("WiredConnectionState"))
                .field("tags", FieldKind::ScalarList(ScalarKind::Str))
                .build::<Shapes>("Shapes")
        });

        let nested = discover(schema);
        assert_eq!(nested.objs.len(), 1);
        assert_eq!(nested.lists.len(), 1);
        assert_eq!(nested.dicts.len(), 1);
        assert!(!nested.contains("tags"));
    }

    #[test]
    fn test_unregistered_nested_type_falls_back_to_scalar() {
        struct Orphan;
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        let schema = SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .field("ghost", FieldKind::Object("NoSuchModel"))
                .build::<Orphan>("Orphan")
        });

        assert!(discover(schema).is_empty());
    }
}
