//! Core types for the UFP object-mapping layer.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: Strongly-typed identifiers (DeviceId, BridgeId, etc.)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Debug flag and observability settings

mod config;
mod errors;
mod ids;

pub use config::{is_debug, Config, ObservabilityConfig, DEBUG_ENV, LOG_FORMAT_ENV};
pub use errors::{Error, Result};
pub use ids::{BridgeId, CameraId, DeviceId, EventId};
