//! camelCase ↔ snake_case key conversion.
//!
//! The mechanical rule only. Declared fields resolve through
//! [`ModelSchema::native_key`](crate::schema::ModelSchema::native_key) first,
//! which keeps names such as `a_a_a0` stable across a round trip.

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Convert a wire key to snake_case.
///
/// Acronym runs stay together: `isSSHEnabled` → `is_ssh_enabled`,
/// `HTTPServer` → `http_server`. Already-native keys pass through.
pub fn to_snake_case(key: &str) -> String {
    key.to_snake_case()
}

/// Convert a native key to camelCase.
pub fn to_camel_case(key: &str) -> String {
    key.to_lower_camel_case()
}
