//! Floodlight and its settings objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;
use std::time::Duration;

use super::adoptable::{AdoptableDevice, AdoptableDeviceModel};
use super::device::{DeviceModel, ProtectDevice, BOOL, STR};
use super::enums::{LightModeEnableType, LightModeType, LowMedHigh};
use super::motion::{motion_layer, MotionDevice, MotionDeviceModel};
use crate::api::ApiHandle;
use crate::convert::export::remove_if_null;
use crate::object::ProtectObject;
use crate::schema::{FieldKind, ModelSchema, ScalarKind, SchemaBuilder};
use crate::types::CameraId;

const INT: FieldKind = FieldKind::Scalar(ScalarKind::Int);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDeviceSettings {
    pub is_indicator_enabled: bool,
    /// Brightness, 1..=6
    pub led_level: i64,
    pub lux_sensitivity: LowMedHigh,
    #[serde(with = "humantime_serde")]
    pub pir_duration: Duration,
    /// 0..=100
    pub pir_sensitivity: i64,

    #[serde(skip)]
    api: ApiHandle,
}

impl ProtectObject for LightDeviceSettings {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .field("is_indicator_enabled", BOOL)
                .field("led_level", INT)
                .field(
                    "lux_sensitivity",
                    FieldKind::Scalar(ScalarKind::Enum(LowMedHigh::VALUES)),
                )
                .field("pir_duration", FieldKind::Scalar(ScalarKind::Duration))
                .field("pir_sensitivity", INT)
                .build::<Self>("LightDeviceSettings")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightOnSettings {
    pub is_led_force_on: bool,

    #[serde(skip)]
    api: ApiHandle,
}

impl ProtectObject for LightOnSettings {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .field("is_led_force_on", BOOL)
                .build::<Self>("LightOnSettings")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightModeSettings {
    pub mode: LightModeType,
    pub enable_at: LightModeEnableType,

    #[serde(skip)]
    api: ApiHandle,
}

impl ProtectObject for LightModeSettings {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .field("mode", FieldKind::Scalar(ScalarKind::Enum(LightModeType::VALUES)))
                .field(
                    "enable_at",
                    FieldKind::Scalar(ScalarKind::Enum(LightModeEnableType::VALUES)),
                )
                .build::<Self>("LightModeSettings")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

fn drop_null_camera(data: &mut Map<String, Value>) {
    remove_if_null(data, "camera");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(flatten)]
    pub motion: MotionDevice,
    pub is_pir_motion_detected: bool,
    pub is_light_on: bool,
    pub is_locating: bool,
    pub light_device_settings: LightDeviceSettings,
    pub light_on_settings: LightOnSettings,
    pub light_mode_settings: LightModeSettings,
    pub camera_id: Option<CameraId>,
    pub is_camera_paired: bool,
}

impl ProtectObject for Light {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            motion_layer()
                .field("is_pir_motion_detected", BOOL)
                .field("is_light_on", BOOL)
                .field("is_locating", BOOL)
                .field("light_device_settings", FieldKind::Object("LightDeviceSettings"))
                .field("light_on_settings", FieldKind::Object("LightOnSettings"))
                .field("light_mode_settings", FieldKind::Object("LightModeSettings"))
                .optional("camera_id", STR)
                .field("is_camera_paired", BOOL)
                .remap("camera", "camera_id")
                .cleanup(drop_null_camera)
                .build::<Self>("Light")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        self.motion.api_handle()
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.motion.attach_api(api);
        self.light_device_settings.attach_api(api);
        self.light_on_settings.attach_api(api);
        self.light_mode_settings.attach_api(api);
    }
}

impl ProtectDevice for Light {
    fn device(&self) -> &DeviceModel {
        &self.motion.adoptable.device
    }
}

impl AdoptableDeviceModel for Light {
    fn adoptable(&self) -> &AdoptableDevice {
        &self.motion.adoptable
    }
}

impl MotionDeviceModel for Light {
    fn motion(&self) -> &MotionDevice {
        &self.motion
    }
}
