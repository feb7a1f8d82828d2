//! Conversion engine between wire dicts and typed objects.
//!
//! ```text
//!  wire dict ──import──▶ native dict ──construct──▶ typed object
//!      ▲                     │  ▲                        │
//!      └──────export─────────┘  └────────to_native───────┘
//! ```
//!
//! All entry points take an explicit [`ConversionMode`]. The mode-less
//! helpers on [`crate::object::ProtectObject`] read it from the process-wide
//! [`Config`].

use crate::types::Config;

pub mod case;
pub mod coerce;
pub mod construct;
pub mod export;
pub mod import;
pub mod update;

pub use case::{to_camel_case, to_snake_case};
pub use construct::{construct, to_native};
pub use export::unifi_dict;
pub use import::unifi_dict_to_dict;
pub use update::merge_native;

/// Reserved key for the back-reference; never read from or written to a dict.
pub const API_KEY: &str = "api";

/// Construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Keep unknown wire fields and validate every field on construction.
    /// Selected by the debug flag.
    Validated,
    /// Drop unknown wire fields, coerce scalars, construct without the
    /// validation pass. Meant for high-volume trusted payloads.
    #[default]
    Fast,
}

impl ConversionMode {
    pub fn from_config(config: &Config) -> Self {
        if config.debug {
            ConversionMode::Validated
        } else {
            ConversionMode::Fast
        }
    }

    /// Mode selected by the process-wide debug flag.
    pub fn current() -> Self {
        Self::from_config(Config::global())
    }

    pub fn validates(self) -> bool {
        self == ConversionMode::Validated
    }

    pub fn drops_unknown_fields(self) -> bool {
        self == ConversionMode::Fast
    }
}
