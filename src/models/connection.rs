//! Connection-state objects nested in adoptable devices.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::api::ApiHandle;
use crate::object::ProtectObject;
use crate::schema::{FieldKind, ModelSchema, ScalarKind, SchemaBuilder};

const INT: FieldKind = FieldKind::Scalar(ScalarKind::Int);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiredConnectionState {
    pub phy_rate: Option<i64>,

    #[serde(skip)]
    api: ApiHandle,
}

impl WiredConnectionState {
    pub fn new(phy_rate: Option<i64>) -> Self {
        Self {
            phy_rate,
            api: ApiHandle::none(),
        }
    }
}

impl ProtectObject for WiredConnectionState {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaBuilder::new()
                .optional("phy_rate", INT)
                .build::<Self>("WiredConnectionState")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

fn wireless_layer() -> SchemaBuilder {
    SchemaBuilder::new()
        .optional("signal_quality", INT)
        .optional("signal_strength", INT)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirelessConnectionState {
    pub signal_quality: Option<i64>,
    pub signal_strength: Option<i64>,

    #[serde(skip)]
    api: ApiHandle,
}

impl WirelessConnectionState {
    pub fn new(signal_quality: Option<i64>, signal_strength: Option<i64>) -> Self {
        Self {
            signal_quality,
            signal_strength,
            api: ApiHandle::none(),
        }
    }
}

impl ProtectObject for WirelessConnectionState {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| wireless_layer().build::<Self>("WirelessConnectionState"))
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

/// Wi-Fi link: the wireless signal fields plus radio details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiConnectionState {
    #[serde(flatten)]
    pub wireless: WirelessConnectionState,
    pub phy_rate: Option<i64>,
    pub channel: Option<i64>,
    pub frequency: Option<i64>,
    pub ssid: Option<String>,
}

impl ProtectObject for WifiConnectionState {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            wireless_layer()
                .optional("phy_rate", INT)
                .optional("channel", INT)
                .optional("frequency", INT)
                .optional("ssid", FieldKind::Scalar(ScalarKind::Str))
                .build::<Self>("WifiConnectionState")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        self.wireless.api_handle()
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.wireless.attach_api(api);
    }
}
