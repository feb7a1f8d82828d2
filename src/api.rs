//! Back-reference from typed objects to the session that produced them.
//!
//! Objects hold a non-owning [`ApiHandle`]. The session must outlive every
//! object built through it; once it is dropped, dereferencing the handle
//! fails the same way as an unset handle.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::models::{AnyModel, Bridge, Event, Light};
use crate::types::{Error, Result};

/// Session-side services available to typed objects.
pub trait ProtectApi: Send + Sync + fmt::Debug {
    /// Registry of every object known to the session, keyed by id.
    fn bootstrap(&self) -> &Bootstrap;
}

/// Shared object registry used to resolve id relations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bootstrap {
    pub bridges: HashMap<String, Bridge>,
    pub lights: HashMap<String, Light>,
    pub events: HashMap<String, Event>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a model under its id, replacing any previous entry.
    pub fn insert(&mut self, model: AnyModel) {
        let id = model.id().to_string();
        match model {
            AnyModel::Bridge(bridge) => {
                self.bridges.insert(id, bridge);
            }
            AnyModel::Light(light) => {
                self.lights.insert(id, *light);
            }
            AnyModel::Event(event) => {
                self.events.insert(id, event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bridges.len() + self.lights.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<AnyModel> for Bootstrap {
    fn from_iter<I: IntoIterator<Item = AnyModel>>(iter: I) -> Self {
        let mut bootstrap = Bootstrap::new();
        for model in iter {
            bootstrap.insert(model);
        }
        bootstrap
    }
}

/// In-memory session: owns a bootstrap registry and hands out handles.
#[derive(Debug, Default)]
pub struct Session {
    bootstrap: Bootstrap,
}

impl Session {
    pub fn new(bootstrap: Bootstrap) -> Arc<Self> {
        Arc::new(Self { bootstrap })
    }

    /// Non-owning handle to this session.
    pub fn handle(self: &Arc<Self>) -> ApiHandle {
        ApiHandle::from_arc(self)
    }
}

impl ProtectApi for Session {
    fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }
}

/// Non-owning, optional reference to a [`ProtectApi`].
///
/// Never serialized. Two handles always compare equal so that object
/// equality only looks at data fields.
#[derive(Clone, Default)]
pub struct ApiHandle(Option<Weak<dyn ProtectApi>>);

impl ApiHandle {
    /// A handle that is not set.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn from_arc<A: ProtectApi + 'static>(api: &Arc<A>) -> Self {
        let weak = Arc::downgrade(api);
        let weak: Weak<dyn ProtectApi> = weak;
        Self(Some(weak))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Resolve the session, failing with `BadRequest` when unset or dropped.
    pub fn get(&self) -> Result<Arc<dyn ProtectApi>> {
        let weak = self
            .0
            .as_ref()
            .ok_or_else(|| Error::bad_request("API Client not initialized"))?;
        weak.upgrade()
            .ok_or_else(|| Error::bad_request("API Client has been dropped"))
    }
}

impl fmt::Debug for ApiHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.0 {
            None => "unset",
            Some(weak) if weak.strong_count() > 0 => "set",
            Some(_) => "dropped",
        };
        write!(f, "ApiHandle({})", state)
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
