//! Typed UFP models.
//!
//! Layers compose by flattening: each struct embeds its parent with
//! `#[serde(flatten)]` and builds its schema on top of the parent's layer.
//!
//! ```text
//! DeviceModel
//!   └ AdoptableDevice ── Bridge
//!       └ MotionDevice ── Light
//! Event
//! ```

pub mod adoptable;
pub mod any;
pub mod bridge;
pub mod connection;
pub mod device;
pub mod enums;
pub mod event;
pub mod light;
pub mod motion;

pub use adoptable::{AdoptableDevice, AdoptableDeviceModel};
pub use any::{constructor_for, create_from_unifi_dict, create_from_unifi_dict_with, AnyModel};
pub use bridge::Bridge;
pub use connection::{WifiConnectionState, WiredConnectionState, WirelessConnectionState};
pub use device::{DeviceModel, ProtectDevice};
pub use enums::{
    EventType, HardwareRevision, LightModeEnableType, LightModeType, LowMedHigh, ModelType,
    SmartDetectObjectType, StateType,
};
pub use event::Event;
pub use light::{Light, LightDeviceSettings, LightModeSettings, LightOnSettings};
pub use motion::{MotionDevice, MotionDeviceModel};

use crate::object::ProtectObject;
use crate::schema::ModelSchema;

/// Schemas registered by default so nested field types resolve by name.
pub(crate) fn builtin_schemas() -> Vec<&'static ModelSchema> {
    vec![
        WiredConnectionState::schema(),
        WirelessConnectionState::schema(),
        WifiConnectionState::schema(),
        DeviceModel::schema(),
        AdoptableDevice::schema(),
        MotionDevice::schema(),
        Bridge::schema(),
        LightDeviceSettings::schema(),
        LightOnSettings::schema(),
        LightModeSettings::schema(),
        Light::schema(),
        Event::schema(),
    ]
}
