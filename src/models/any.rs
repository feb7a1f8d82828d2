//! Polymorphic construction keyed on the `modelKey` discriminator.

use serde_json::{Map, Value};

use super::bridge::Bridge;
use super::enums::ModelType;
use super::event::Event;
use super::light::Light;
use crate::api::ApiHandle;
use crate::convert::ConversionMode;
use crate::object::ProtectObject;
use crate::types::{Error, Result};

/// Any model that can be built from a wire dict by its `modelKey`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyModel {
    Bridge(Bridge),
    Light(Box<Light>),
    Event(Event),
}

impl AnyModel {
    pub fn model_type(&self) -> ModelType {
        match self {
            AnyModel::Bridge(_) => ModelType::Bridge,
            AnyModel::Light(_) => ModelType::Light,
            AnyModel::Event(_) => ModelType::Event,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            AnyModel::Bridge(bridge) => bridge.adoptable.device.id.as_str(),
            AnyModel::Light(light) => light.motion.adoptable.device.id.as_str(),
            AnyModel::Event(event) => event.id.as_str(),
        }
    }

    pub fn to_native(&self) -> Result<Map<String, Value>> {
        match self {
            AnyModel::Bridge(bridge) => bridge.to_native(),
            AnyModel::Light(light) => light.to_native(),
            AnyModel::Event(event) => event.to_native(),
        }
    }

    pub fn unifi_dict(&self) -> Result<Map<String, Value>> {
        match self {
            AnyModel::Bridge(bridge) => bridge.unifi_dict(None),
            AnyModel::Light(light) => light.unifi_dict(None),
            AnyModel::Event(event) => event.unifi_dict(None),
        }
    }
}

type Constructor = fn(Map<String, Value>, ApiHandle, ConversionMode) -> Result<AnyModel>;

fn build_bridge(data: Map<String, Value>, api: ApiHandle, mode: ConversionMode) -> Result<AnyModel> {
    Bridge::from_unifi_dict_with(data, api, mode).map(AnyModel::Bridge)
}

fn build_light(data: Map<String, Value>, api: ApiHandle, mode: ConversionMode) -> Result<AnyModel> {
    Light::from_unifi_dict_with(data, api, mode).map(|light| AnyModel::Light(Box::new(light)))
}

fn build_event(data: Map<String, Value>, api: ApiHandle, mode: ConversionMode) -> Result<AnyModel> {
    Event::from_unifi_dict_with(data, api, mode).map(AnyModel::Event)
}

/// Constructor for a model type, if this crate models it.
pub fn constructor_for(model: ModelType) -> Option<Constructor> {
    match model {
        ModelType::Bridge => Some(build_bridge),
        ModelType::Light => Some(build_light),
        ModelType::Event => Some(build_event),
        _ => None,
    }
}

/// Build whichever model `data["modelKey"]` names.
pub fn create_from_unifi_dict(data: Map<String, Value>, api: ApiHandle) -> Result<AnyModel> {
    create_from_unifi_dict_with(data, api, ConversionMode::current())
}

pub fn create_from_unifi_dict_with(
    data: Map<String, Value>,
    api: ApiHandle,
    mode: ConversionMode,
) -> Result<AnyModel> {
    let key = match data.get("modelKey") {
        Some(Value::String(key)) => key.clone(),
        Some(other) => {
            tracing::debug!(model_key = %other, "modelKey is not a string");
            return Err(Error::unknown_model(format!("invalid modelKey: {}", other)));
        }
        None => {
            tracing::debug!("wire dict has no modelKey");
            return Err(Error::unknown_model("missing modelKey"));
        }
    };

    let constructor = serde_json::from_value::<ModelType>(Value::String(key.clone()))
        .ok()
        .and_then(constructor_for)
        .ok_or_else(|| {
            tracing::debug!(model_key = %key, "no constructor for modelKey");
            Error::unknown_model(format!("unsupported modelKey: {}", key))
        })?;

    constructor(data, api, mode)
}
