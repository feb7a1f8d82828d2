//! Strongly-typed identifiers.
//!
//! UFP ids are opaque strings. They serialize as bare JSON strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype wrapper.
///
/// Generates: struct, `from_string()`, `as_str()`, Display, TryFrom<&str>,
/// Serialize, Deserialize.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn from_string(s: String) -> Result<Self, &'static str> {
                if s.is_empty() {
                    return Err(concat!(stringify!($name), " cannot be empty"));
                }
                Ok(Self(s))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = &'static str;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::from_string(s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(DeviceId);
define_id!(BridgeId);
define_id!(EventId);
define_id!(CameraId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_rejected() {
        assert!(DeviceId::from_string(String::new()).is_err());
        let id = DeviceId::from_string("61b3f5c7".to_string()).unwrap();
        assert_eq!(id.as_str(), "61b3f5c7");
        assert_eq!(id.to_string(), "61b3f5c7");
    }

    #[test]
    fn test_borrowed_str_goes_through_empty_check() {
        assert_eq!(DeviceId::try_from(""), Err("DeviceId cannot be empty"));
        assert_eq!(
            CameraId::try_from("cam-1").unwrap(),
            CameraId::from_string("cam-1".to_string()).unwrap()
        );
    }

    #[test]
    fn test_id_is_transparent_in_json() {
        let id = BridgeId::try_from("bridge-1").unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("bridge-1"));
        let back: BridgeId = serde_json::from_value(serde_json::json!("bridge-1")).unwrap();
        assert_eq!(back, id);
    }
}
