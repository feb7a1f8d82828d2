//! Schema validation of native dicts (validated construction mode).

use serde_json::{Map, Value};

use crate::schema::{discover, FieldKind, ModelSchema};
use crate::types::{Error, Result};

/// Check every declared field of `data` against `schema`, recursing into
/// nested objects. All mismatches are reported in one error.
pub fn validate(schema: &ModelSchema, data: &Map<String, Value>) -> Result<()> {
    let mut errors = Vec::new();
    collect_errors(schema, data, schema.name(), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(errors.join("; ")))
    }
}

fn collect_errors(
    schema: &ModelSchema,
    data: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<String>,
) {
    let nested = discover(schema);

    for field in schema.fields() {
        let field_path = format!("{}.{}", path, field.name);
        let value = match data.get(field.name) {
            None | Some(Value::Null) if field.optional => continue,
            None => {
                errors.push(format!("{}: field required", field_path));
                continue;
            }
            Some(Value::Null) => {
                errors.push(format!("{}: none is not an allowed value", field_path));
                continue;
            }
            Some(value) => value,
        };

        let child = nested
            .objs
            .iter()
            .chain(&nested.lists)
            .chain(&nested.dicts)
            .find(|(name, _)| *name == field.name)
            .map(|(_, child)| *child);

        match (field.kind, child) {
            (FieldKind::Scalar(kind), _) => {
                if let Err(e) = kind.validate(value) {
                    errors.push(format!("{}: {}", field_path, e));
                }
            }
            (FieldKind::ScalarList(kind), _) => match value.as_array() {
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if let Err(e) = kind.validate(item) {
                            errors.push(format!("{}[{}]: {}", field_path, i, e));
                        }
                    }
                }
                None => errors.push(format!("{}: expected array", field_path)),
            },
            // unresolved nested type: accepted as an opaque scalar
            (_, None) => {}
            (FieldKind::Object(_), Some(child)) => match value.as_object() {
                Some(map) => collect_errors(child, map, &field_path, errors),
                None => errors.push(format!("{}: expected object", field_path)),
            },
            (FieldKind::List(_), Some(child)) => match value.as_array() {
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        let item_path = format!("{}[{}]", field_path, i);
                        match item.as_object() {
                            Some(map) => collect_errors(child, map, &item_path, errors),
                            None => errors.push(format!("{}: expected object", item_path)),
                        }
                    }
                }
                None => errors.push(format!("{}: expected array", field_path)),
            },
            (FieldKind::Map(_), Some(child)) => match value.as_object() {
                Some(items) => {
                    for (key, item) in items {
                        let item_path = format!("{}[{}]", field_path, key);
                        match item.as_object() {
                            Some(map) => collect_errors(child, map, &item_path, errors),
                            None => errors.push(format!("{}: expected object", item_path)),
                        }
                    }
                }
                None => errors.push(format!("{}: expected object", field_path)),
            },
        }
    }
}
