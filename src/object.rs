//! The `ProtectObject` trait: typed UFP objects and their conversions.
//!
//! Implementors provide a schema and access to their back-reference; every
//! conversion is a provided method built on [`crate::convert`]. Each
//! operation exists in two forms: `*_with(.., mode)` takes the construction
//! strategy explicitly, the plain form uses [`ConversionMode::current`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::api::{ApiHandle, ProtectApi};
use crate::convert::{self, ConversionMode};
use crate::schema::ModelSchema;
use crate::types::Result;

/// A typed object built from UFP JSON.
pub trait ProtectObject: Serialize + DeserializeOwned + Clone + fmt::Debug + 'static {
    /// Declared native fields, remaps and hooks of this type.
    fn schema() -> &'static ModelSchema;

    fn api_handle(&self) -> &ApiHandle;

    /// Attach `api` to this object and every nested typed object.
    fn attach_api(&mut self, api: &ApiHandle);

    /// The session this object was built through.
    ///
    /// Fails with `BadRequest` if none was given at construction.
    fn api(&self) -> Result<Arc<dyn ProtectApi>> {
        self.api_handle().get()
    }

    /// Convert a decoded wire dict into this type's native dict.
    fn unifi_dict_to_dict(data: Map<String, Value>) -> Map<String, Value> {
        Self::unifi_dict_to_dict_with(data, ConversionMode::current())
    }

    fn unifi_dict_to_dict_with(data: Map<String, Value>, mode: ConversionMode) -> Map<String, Value> {
        convert::unifi_dict_to_dict(Self::schema(), data, mode)
    }

    /// Main constructor: wire dict → typed object.
    fn from_unifi_dict(data: Map<String, Value>, api: ApiHandle) -> Result<Self> {
        Self::from_unifi_dict_with(data, api, ConversionMode::current())
    }

    fn from_unifi_dict_with(
        data: Map<String, Value>,
        api: ApiHandle,
        mode: ConversionMode,
    ) -> Result<Self> {
        let native = Self::unifi_dict_to_dict_with(data, mode);
        convert::construct(native, &api, mode)
    }

    /// Build from an already-native dict.
    fn from_dict_with(data: Map<String, Value>, api: ApiHandle, mode: ConversionMode) -> Result<Self> {
        convert::construct(data, &api, mode)
    }

    /// Shallow dump of the object graph in native form.
    fn to_native(&self) -> Result<Map<String, Value>> {
        convert::to_native(self)
    }

    /// Serialize this object into a wire dict.
    fn unifi_dict(&self, exclude: Option<&HashSet<String>>) -> Result<Map<String, Value>> {
        let native = self.to_native()?;
        Ok(convert::unifi_dict(Self::schema(), native, exclude))
    }

    /// Convert a native dict (e.g. a filtered `to_native` dump) into a wire dict.
    fn unifi_dict_from(data: Map<String, Value>, exclude: Option<&HashSet<String>>) -> Map<String, Value> {
        convert::unifi_dict(Self::schema(), data, exclude)
    }

    /// Apply a native delta, returning the updated object.
    fn update_from_dict(&self, delta: Map<String, Value>) -> Result<Self> {
        self.update_from_dict_with(delta, ConversionMode::current())
    }

    fn update_from_dict_with(&self, delta: Map<String, Value>, mode: ConversionMode) -> Result<Self> {
        let mut current = self.to_native()?;
        convert::merge_native(Self::schema(), &mut current, delta);
        convert::construct(current, self.api_handle(), mode)
    }

    /// Apply a wire delta, returning the updated object.
    fn update_from_unifi_dict(&self, delta: Map<String, Value>) -> Result<Self> {
        self.update_from_unifi_dict_with(delta, ConversionMode::current())
    }

    fn update_from_unifi_dict_with(
        &self,
        delta: Map<String, Value>,
        mode: ConversionMode,
    ) -> Result<Self> {
        let native = Self::unifi_dict_to_dict_with(delta, mode);
        self.update_from_dict_with(native, mode)
    }
}
