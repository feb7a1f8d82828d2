//! Model-name → schema lookup used to resolve nested field types.
//!
//! Built-in models are registered on first access. Models defined outside
//! this crate must be registered before the first conversion of any type
//! that nests them, since introspection results are cached.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use super::ModelSchema;

type Registry = RwLock<HashMap<&'static str, &'static ModelSchema>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let builtins = crate::models::builtin_schemas()
            .into_iter()
            .map(|schema| (schema.name(), schema))
            .collect();
        RwLock::new(builtins)
    })
}

/// Register a model schema under its name, replacing any previous entry.
pub fn register(schema: &'static ModelSchema) {
    tracing::debug!(model = schema.name(), "registering model schema");
    registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(schema.name(), schema);
}

/// Look up a registered schema by model name.
pub fn resolve(name: &str) -> Option<&'static ModelSchema> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

/// Names of every registered model, sorted.
pub fn registered_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .copied()
        .collect();
    names.sort_unstable();
    names
}
