//! Wire fixtures shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Map, Value};

pub fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

pub fn bridge_wire() -> Map<String, Value> {
    object(json!({
        "modelKey": "bridge",
        "id": "61b3f5c7033ea703e7000424",
        "name": "Bridge",
        "type": "UFP-UAP-B",
        "mac": "245A4C9B2A1C",
        "host": "192.168.102.63",
        "upSince": 1699990000000u64,
        "uptime": 10000000,
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
        "wiredConnectionState": {"phyRate": 1000},
        "platform": "mt7622",
    }))
}

pub fn light_wire() -> Map<String, Value> {
    object(json!({
        "modelKey": "light",
        "id": "6194b7a10083c603e700f3f2",
        "name": "Driveway",
        "type": "UP FloodLight",
        "mac": "E063DA0A6E3F",
        "host": "192.168.102.71",
        "upSince": 1699900000000u64,
        "uptime": 100000000,
        "lastSeen": 1700000000000u64,
        "hardwareRevision": "7",
        "firmwareVersion": "1.9.3",
        "isUpdating": false,
        "isSshEnabled": false,
        "state": "CONNECTED",
        "connectionHost": "192.168.102.1",
        "connectedSince": 1699900005000u64,
        "latestFirmwareVersion": "1.9.3",
        "firmwareBuild": "g990c553.210409.1124",
        "isAdopting": false,
        "isAdopted": true,
        "isAdoptedByOther": false,
        "isProvisioned": false,
        "isRebooting": false,
        "canAdopt": false,
        "isAttemptingToConnect": false,
        "isConnected": true,
        "wifiConnectionState": {
            "signalQuality": 80,
            "signalStrength": -55,
            "phyRate": 5,
            "channel": 6,
            "frequency": 2437,
            "ssid": "cams",
        },
        "bridge": "61b3f5c7033ea703e7000424",
        "lastMotion": 1699999000000u64,
        "isDark": false,
        "isPirMotionDetected": false,
        "isLightOn": true,
        "isLocating": false,
        "lightDeviceSettings": {
            "isIndicatorEnabled": false,
            "ledLevel": 6,
            "luxSensitivity": "medium",
            "pirDuration": 120000,
            "pirSensitivity": 46,
        },
        "lightOnSettings": {"isLedForceOn": false},
        "lightModeSettings": {"mode": "motion", "enableAt": "fulltime"},
        "camera": null,
        "isCameraPaired": false,
    }))
}

pub fn event_wire() -> Map<String, Value> {
    object(json!({
        "modelKey": "event",
        "id": "6203bdfe01a1df03e700c5e2",
        "type": "lightMotion",
        "start": 1700000000000u64,
        "end": 1700000015000u64,
        "score": 0,
        "heatmap": null,
        "camera": null,
        "smartDetectTypes": [],
        "smartDetectEvents": [],
        "thumbnail": null,
        "user": null,
        "timestamp": 1700000000000u64,
        "metadata": {"lightId": "6194b7a10083c603e700f3f2"},
    }))
}
