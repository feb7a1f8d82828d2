use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::device::{model_with_id_layer, STR, TIMESTAMP};
use super::enums::{EventType, ModelType, SmartDetectObjectType};
use crate::api::ApiHandle;
use crate::convert::export::remove_if_null;
use crate::object::ProtectObject;
use crate::schema::{FieldKind, ModelSchema, ScalarKind};
use crate::types::{CameraId, Error, EventId, Result};

fn drop_null_relations(data: &mut Map<String, Value>) {
    for key in ["camera", "heatmap", "thumbnail", "user", "end"] {
        remove_if_null(data, key);
    }
}

/// A recorded event (motion, ring, smart detection, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub model: Option<ModelType>,
    pub id: EventId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub score: i64,
    pub heatmap_id: Option<String>,
    pub camera_id: Option<CameraId>,
    #[serde(default)]
    pub smart_detect_types: Vec<SmartDetectObjectType>,
    #[serde(default)]
    pub smart_detect_event_ids: Vec<EventId>,
    pub thumbnail_id: Option<String>,
    pub user_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<Value>,

    #[serde(skip)]
    api: ApiHandle,
}

impl ProtectObject for Event {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            model_with_id_layer()
                .field("type", FieldKind::Scalar(ScalarKind::Enum(EventType::VALUES)))
                .field("start", TIMESTAMP)
                .optional("end", TIMESTAMP)
                .field("score", FieldKind::Scalar(ScalarKind::Int))
                .optional("heatmap_id", STR)
                .optional("camera_id", STR)
                .field(
                    "smart_detect_types",
                    FieldKind::ScalarList(ScalarKind::Enum(SmartDetectObjectType::VALUES)),
                )
                .field("smart_detect_event_ids", FieldKind::ScalarList(ScalarKind::Str))
                .optional("thumbnail_id", STR)
                .optional("user_id", STR)
                .optional("timestamp", TIMESTAMP)
                .optional("metadata", FieldKind::Scalar(ScalarKind::Any))
                .remap("camera", "camera_id")
                .remap("heatmap", "heatmap_id")
                .remap("user", "user_id")
                .remap("thumbnail", "thumbnail_id")
                .remap("smartDetectEvents", "smart_detect_event_ids")
                .cleanup(drop_null_relations)
                .build::<Self>("Event")
        })
    }

    fn api_handle(&self) -> &ApiHandle {
        &self.api
    }

    fn attach_api(&mut self, api: &ApiHandle) {
        self.api = api.clone();
    }
}

impl Event {
    /// Whether the event is still in progress.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// The smart detection events grouped under this one.
    pub fn smart_detect_events(&self) -> Result<Vec<Event>> {
        if self.smart_detect_event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let api = self.api()?;
        let events = &api.bootstrap().events;
        self.smart_detect_event_ids
            .iter()
            .map(|id| {
                events
                    .get(id.as_str())
                    .cloned()
                    .ok_or_else(|| Error::bad_request(format!("event {} not in bootstrap", id)))
            })
            .collect()
    }
}
