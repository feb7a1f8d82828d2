//! Adoptable devices with a motion sensor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::adoptable::{adoptable_layer, AdoptableDevice, AdoptableDeviceModel};
use super::device::{DeviceModel, ProtectDevice, BOOL, STR, TIMESTAMP};
use super::event::Event;
use crate::api::ApiHandle;
use crate::object::ProtectObject;
use crate::schema::{ModelSchema, SchemaBuilder};
use crate::types::{Error, EventId, Result};

pub(crate) fn motion_layer() -> SchemaBuilder {
    adoptable_layer()
        .optional("last_motion", TIMESTAMP)
        .field("is_dark", BOOL)
        .optional("last_motion_event_id", STR)
        .cleanup(drop_local_fields)
}

// lastMotionEventId is tracked locally from websocket events, never sent.
fn drop_local_fields(data: &mut Map<String, Value>) {
    data.remove("lastMotionEventId");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionDevice {
    #[serde(flatten)]
    pub adoptable: AdoptableDevice,
    pub last_motion: Option<DateTime<Utc>>,
    pub is_dark: bool,
    #[serde(default)]
    pub last_motion_event_id: Option<EventId>,
}

impl ProtectObject for MotionDevice {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| motion_layer().build::<Self>("MotionDevice"))
    }

    fn api_handle(&self) -> &ApiHandle {
        self.adoptable.api_handle()
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.adoptable.attach_api(api);
    }
}

impl ProtectDevice for MotionDevice {
    fn device(&self) -> &DeviceModel {
        &self.adoptable.device
    }
}

impl AdoptableDeviceModel for MotionDevice {
    fn adoptable(&self) -> &AdoptableDevice {
        &self.adoptable
    }
}

impl MotionDeviceModel for MotionDevice {
    fn motion(&self) -> &MotionDevice {
        self
    }
}

pub trait MotionDeviceModel: AdoptableDeviceModel {
    fn motion(&self) -> &MotionDevice;

    /// The most recent motion event, if one has been seen this session.
    fn last_motion_event(&self) -> Result<Option<Event>> {
        let Some(event_id) = &self.motion().last_motion_event_id else {
            return Ok(None);
        };

        let api = self.api()?;
        api.bootstrap()
            .events
            .get(event_id.as_str())
            .cloned()
            .map(Some)
            .ok_or_else(|| Error::bad_request(format!("event {} not in bootstrap", event_id)))
    }
}
