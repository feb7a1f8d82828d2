//! Logging of introspection fallbacks.
//!
//! Kept in its own test binary: `#[traced_test]` installs a global
//! subscriber.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::OnceLock;
use tracing_test::traced_test;

use ufp_data::schema::{discover, FieldKind, ModelSchema, ScalarKind, SchemaBuilder};
use ufp_data::{ApiHandle, ConversionMode, ProtectObject};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Doorbell {
    name: String,
    chime: Option<serde_json::Value>,

    #[serde(skip)]
    api: ApiHandle,
}

impl ProtectObject for Doorbell {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .field("name", FieldKind::Scalar(ScalarKind::Str))
                .optional("chime", FieldKind::Object("UnregisteredChime"))
                .build::<Self>("Doorbell")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

#[traced_test]
#[test]
fn test_unresolved_nested_type_is_logged_and_kept_opaque() {
    assert!(discover(Doorbell::schema()).is_empty());
    assert!(logs_contain("nested type is not registered"));
    assert!(logs_contain("UnregisteredChime"));

    let wire = json!({"name": "Front", "chime": {"volumeLevel": 80}});
    let doorbell = Doorbell::from_unifi_dict_with(
        wire.as_object().cloned().unwrap(),
        ApiHandle::none(),
        ConversionMode::Validated,
    )
    .unwrap();

    // opaque value: inner keys are left in wire form
    assert_eq!(doorbell.chime, Some(json!({"volumeLevel": 80})));
}
