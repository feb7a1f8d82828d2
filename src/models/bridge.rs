use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::adoptable::{adoptable_layer, AdoptableDevice, AdoptableDeviceModel};
use super::device::{DeviceModel, ProtectDevice, STR};
use crate::api::ApiHandle;
use crate::object::ProtectObject;
use crate::schema::ModelSchema;

/// UniFi Protect bridge: relays Bluetooth devices to the NVR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bridge {
    #[serde(flatten)]
    pub adoptable: AdoptableDevice,
    pub platform: String,
}

impl ProtectObject for Bridge {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| adoptable_layer().field("platform", STR).build::<Self>("Bridge"))
    }

    fn api_handle(&self) -> &ApiHandle {
        self.adoptable.api_handle()
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.adoptable.attach_api(api);
    }
}

impl ProtectDevice for Bridge {
    fn device(&self) -> &DeviceModel {
        &self.adoptable.device
    }
}

impl AdoptableDeviceModel for Bridge {
    fn adoptable(&self) -> &AdoptableDevice {
        &self.adoptable
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::convert::ConversionMode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Map, Value};

    pub(crate) fn bridge_wire() -> Map<String, Value> {
        json!({
            "modelKey": "bridge",
            "id": "61b3f5c7033ea703e7000424",
            "name": "Bridge",
            "type": "UFP-UAP-B",
            "mac": "245A4C9B2A1C",
            "host": "192.168.102.63",
            "upSince": 1699990000000u64,
            "uptime": null,
            "lastSeen": 1700000000000u64,
            "hardwareRevision": 19,
            "firmwareVersion": "0.3.208",
            "isUpdating": false,
            "isSshEnabled": false,
            "state": "CONNECTED",
            "connectionHost": "192.168.102.1",
            "connectedSince": 1699990005000u64,
            "latestFirmwareVersion": null,
            "firmwareBuild": null,
            "isAdopting": false,
            "isAdopted": true,
            "isAdoptedByOther": false,
            "isProvisioned": false,
            "isRebooting": false,
            "canAdopt": false,
            "isAttemptingToConnect": false,
            "isConnected": true,
            "wiredConnectionState": {"phyRate": null},
            "platform": "mt7622",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_bridge_round_trip() {
        let bridge =
            Bridge::from_unifi_dict_with(bridge_wire(), ApiHandle::none(), ConversionMode::Validated)
                .unwrap();
        assert_eq!(bridge.platform, "mt7622");
        assert!(bridge.is_wired());
        assert!(bridge.adoptable.bridge_id.is_none());

        assert_eq!(bridge.unifi_dict(None).unwrap(), bridge_wire());
    }
}
