//! Devices that can be adopted by an NVR.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::net::IpAddr;
use std::sync::OnceLock;

use super::bridge::Bridge;
use super::connection::{WifiConnectionState, WiredConnectionState, WirelessConnectionState};
use super::device::{device_layer, DeviceModel, ProtectDevice, BOOL, STR, TIMESTAMP};
use super::enums::StateType;
use crate::api::ApiHandle;
use crate::convert::export::remove_if_null;
use crate::object::ProtectObject;
use crate::schema::{FieldKind, ModelSchema, ScalarKind, SchemaBuilder};
use crate::types::{BridgeId, Error, Result};

pub(crate) fn adoptable_layer() -> SchemaBuilder {
    device_layer()
        .field("state", FieldKind::Scalar(ScalarKind::Enum(StateType::VALUES)))
        .field("connection_host", FieldKind::Scalar(ScalarKind::IpAddr))
        .optional("connected_since", TIMESTAMP)
        .optional("latest_firmware_version", STR)
        .optional("firmware_build", STR)
        .field("is_adopting", BOOL)
        .field("is_adopted", BOOL)
        .field("is_adopted_by_other", BOOL)
        .field("is_provisioned", BOOL)
        .field("is_rebooting", BOOL)
        .field("can_adopt", BOOL)
        .field("is_attempting_to_connect", BOOL)
        .field("is_connected", BOOL)
        .optional("wired_connection_state", FieldKind::Object("WiredConnectionState"))
        .optional("wifi_connection_state", FieldKind::Object("WifiConnectionState"))
        .optional("bluetooth_connection_state", FieldKind::Object("WirelessConnectionState"))
        .optional("bridge_id", STR)
        .remap("bridge", "bridge_id")
        .cleanup(drop_null_links)
}

fn drop_null_links(data: &mut Map<String, Value>) {
    for key in [
        "wiredConnectionState",
        "wifiConnectionState",
        "bluetoothConnectionState",
        "bridge",
    ] {
        remove_if_null(data, key);
    }
}

/// Device fields plus adoption state, connection links and bridge relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptableDevice {
    #[serde(flatten)]
    pub device: DeviceModel,
    pub state: StateType,
    pub connection_host: IpAddr,
    pub connected_since: Option<DateTime<Utc>>,
    pub latest_firmware_version: Option<String>,
    pub firmware_build: Option<String>,
    pub is_adopting: bool,
    pub is_adopted: bool,
    pub is_adopted_by_other: bool,
    pub is_provisioned: bool,
    pub is_rebooting: bool,
    pub can_adopt: bool,
    pub is_attempting_to_connect: bool,
    pub is_connected: bool,

    #[serde(default)]
    pub wired_connection_state: Option<WiredConnectionState>,
    #[serde(default)]
    pub wifi_connection_state: Option<WifiConnectionState>,
    #[serde(default)]
    pub bluetooth_connection_state: Option<WirelessConnectionState>,
    pub bridge_id: Option<BridgeId>,
}

impl ProtectObject for AdoptableDevice {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| adoptable_layer().build::<Self>("AdoptableDevice"))
    }

    fn api_handle(&self) -> &ApiHandle {
        self.device.api_handle()
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.device.attach_api(api);
        if let Some(state) = self.wired_connection_state.as_mut() {
            state.attach_api(api);
        }
        if let Some(state) = self.wifi_connection_state.as_mut() {
            state.attach_api(api);
        }
        if let Some(state) = self.bluetooth_connection_state.as_mut() {
            state.attach_api(api);
        }
    }
}

impl ProtectDevice for AdoptableDevice {
    fn device(&self) -> &DeviceModel {
        &self.device
    }
}

impl AdoptableDeviceModel for AdoptableDevice {
    fn adoptable(&self) -> &AdoptableDevice {
        self
    }
}

/// Behaviour shared by every adoptable device.
pub trait AdoptableDeviceModel: ProtectDevice {
    fn adoptable(&self) -> &AdoptableDevice;

    fn is_wired(&self) -> bool {
        self.adoptable().wired_connection_state.is_some()
    }

    fn is_wifi(&self) -> bool {
        self.adoptable().wifi_connection_state.is_some()
    }

    fn is_bluetooth(&self) -> bool {
        self.adoptable().bluetooth_connection_state.is_some()
    }

    /// The bridge this device is paired to, looked up in the session registry.
    fn bridge(&self) -> Result<Option<Bridge>> {
        let Some(bridge_id) = &self.adoptable().bridge_id else {
            return Ok(None);
        };

        let api = self.api()?;
        api.bootstrap()
            .bridges
            .get(bridge_id.as_str())
            .cloned()
            .map(Some)
            .ok_or_else(|| Error::bad_request(format!("bridge {} not in bootstrap", bridge_id)))
    }
}
