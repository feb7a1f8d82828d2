//! Vendor enumerations.
//!
//! Every enum serializes to the vendor's exact spelling and exposes the full
//! set of spellings as `VALUES` for schema validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a vendor string enum.
///
/// Generates: enum with per-variant serde renames, `VALUES`, `as_str()`,
/// Display.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $( $variant:ident => $wire:literal ),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$( $wire ),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(
    /// `modelKey` discriminator.
    ModelType {
        Camera => "camera",
        CloudIdentity => "cloudIdentity",
        Event => "event",
        Group => "group",
        Light => "light",
        Liveview => "liveview",
        Nvr => "nvr",
        User => "user",
        Viewer => "viewer",
        Bridge => "bridge",
        Sensor => "sensor",
        Doorlock => "doorlock",
        Chime => "chime",
        Bootstrap => "bootstrap",
    }
);

wire_enum!(
    /// Connection state of an adoptable device.
    StateType {
        Connected => "CONNECTED",
        Connecting => "CONNECTING",
        Disconnected => "DISCONNECTED",
    }
);

wire_enum!(
    LowMedHigh {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

wire_enum!(
    LightModeType {
        Motion => "motion",
        WhenDark => "always",
        Manual => "off",
    }
);

wire_enum!(
    LightModeEnableType {
        Dark => "dark",
        Always => "fulltime",
    }
);

wire_enum!(
    EventType {
        Disconnect => "disconnect",
        FirmwareUpdate => "fwUpdate",
        Provision => "provision",
        Access => "access",
        Offline => "offline",
        Off => "off",
        Update => "update",
        CameraPowerCycle => "cameraPowerCycle",
        Ring => "ring",
        Motion => "motion",
        SmartDetect => "smartDetectZone",
        SmartDetectLine => "smartDetectLine",
        SensorOpened => "sensorOpened",
        SensorClosed => "sensorClosed",
        SensorMotion => "sensorMotion",
        MotionLight => "lightMotion",
    }
);

wire_enum!(
    SmartDetectObjectType {
        Person => "person",
        Animal => "animal",
        Vehicle => "vehicle",
        Face => "face",
        Package => "package",
        LicensePlate => "licensePlate",
    }
);

/// Hardware revision: the vendor sends either a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HardwareRevision {
    Int(i64),
    Str(String),
}
