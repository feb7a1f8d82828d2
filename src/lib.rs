//! # UFP Data - UniFi Protect object mapping
//!
//! Converts the JSON the UniFi Protect NVR speaks into typed Rust models and
//! back:
//! - Wire dicts (camelCase keys, epoch-millisecond timestamps) to native
//!   dicts (snake_case keys, RFC 3339 timestamps, humantime durations)
//! - Per-model remap tables for keys that do not follow the case rule
//! - Schema-driven discovery of nested objects, lists and maps, memoized per
//!   type
//! - Two construction strategies: validated (debug) and fast (trusted)
//! - Partial updates that merge nested objects field by field
//! - A non-owning back-reference from every object to its session
//!
//! ## Architecture
//!
//! ```text
//!                  ┌────────────────────────────────────────┐
//!  wire dict  ──▶  │ import: hooks → remap → snake → drop   │
//!                  │         unknown/coerce → recurse        │
//!                  └───────────────────┬────────────────────┘
//!                                      ▼
//!                  ┌────────────────────────────────────────┐
//!  native dict ──▶ │ construct: [validate] → serde → attach │ ──▶ typed object
//!                  └────────────────────────────────────────┘
//!                                      │ to_native
//!                                      ▼
//!                  ┌────────────────────────────────────────┐
//!  wire dict  ◀──  │ export: recurse → normalize → camel/   │
//!                  │         remap → cleanup hooks           │
//!                  └────────────────────────────────────────┘
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod api;
pub mod convert;
pub mod models;
pub mod object;
pub mod schema;
pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use api::{ApiHandle, Bootstrap, ProtectApi, Session};
pub use convert::ConversionMode;
pub use models::{create_from_unifi_dict, create_from_unifi_dict_with, AnyModel};
pub use object::ProtectObject;
pub use types::{Config, Error, Result};
