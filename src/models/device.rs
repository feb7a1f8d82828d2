//! Base model layers and the generic device model.
//!
//! ```text
//! model layer      modelKey → model, null modelKey dropped on the wire
//!   └ with id      id
//!     └ device     name, type, mac, host, timestamps, firmware, flags
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::net::IpAddr;
use std::sync::OnceLock;
use std::time::Duration;

use super::enums::{HardwareRevision, ModelType};
use crate::api::ApiHandle;
use crate::convert::export::remove_if_null;
use crate::object::ProtectObject;
use crate::schema::{FieldKind, ModelSchema, ScalarKind, SchemaBuilder};
use crate::types::DeviceId;

pub(crate) const STR: FieldKind = FieldKind::Scalar(ScalarKind::Str);
pub(crate) const BOOL: FieldKind = FieldKind::Scalar(ScalarKind::Bool);
pub(crate) const TIMESTAMP: FieldKind = FieldKind::Scalar(ScalarKind::Timestamp);

/// Objects carrying a `modelKey` discriminator.
pub(crate) fn model_layer() -> SchemaBuilder {
    SchemaBuilder::new()
        .optional("model", FieldKind::Scalar(ScalarKind::Enum(ModelType::VALUES)))
        .remap("modelKey", "model")
        .cleanup(drop_null_model_key)
}

pub(crate) fn model_with_id_layer() -> SchemaBuilder {
    model_layer().field("id", STR)
}

pub(crate) fn device_layer() -> SchemaBuilder {
    model_with_id_layer()
        .field("name", STR)
        .field("type", STR)
        .field("mac", STR)
        .optional("host", FieldKind::Scalar(ScalarKind::IpAddr))
        .optional("up_since", TIMESTAMP)
        .optional("uptime", FieldKind::Scalar(ScalarKind::Duration))
        .field("last_seen", TIMESTAMP)
        .optional("hardware_revision", FieldKind::Scalar(ScalarKind::StrOrInt))
        .field("firmware_version", STR)
        .field("is_updating", BOOL)
        .field("is_ssh_enabled", BOOL)
}

fn drop_null_model_key(data: &mut Map<String, Value>) {
    remove_if_null(data, "modelKey");
}

/// Fields shared by every UFP device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceModel {
    pub model: Option<ModelType>,
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub mac: String,
    pub host: Option<IpAddr>,
    pub up_since: Option<DateTime<Utc>>,
    #[serde(default, with = "humantime_serde")]
    pub uptime: Option<Duration>,
    pub last_seen: DateTime<Utc>,
    pub hardware_revision: Option<HardwareRevision>,
    pub firmware_version: String,
    pub is_updating: bool,
    pub is_ssh_enabled: bool,

    #[serde(skip)]
    api: ApiHandle,
}

impl ProtectObject for DeviceModel {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| device_layer().build::<Self>("DeviceModel"))
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

/// Access to the device fields of any concrete device.
pub trait ProtectDevice: ProtectObject {
    fn device(&self) -> &DeviceModel;

    fn id(&self) -> &str {
        self.device().id.as_str()
    }

    fn name(&self) -> &str {
        &self.device().name
    }

    fn model_type(&self) -> Option<ModelType> {
        self.device().model
    }
}

impl ProtectDevice for DeviceModel {
    fn device(&self) -> &DeviceModel {
        self
    }
}
