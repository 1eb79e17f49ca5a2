//! The seam between the navigation core and the live map widget.
//!
//! The core never constructs a map view; the view layer builds one, wraps it
//! in [`MapView`], and installs it into the shared [`MapSlot`] once the
//! widget has finished initializing.

use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::{core::geo::LatLng, Result};

/// Options applied to a single recenter call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Animate the transition. Navigation jumps are instantaneous, so this
    /// defaults to `false`.
    pub animate: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { animate: false }
    }
}

/// Trait representing the live, initialized map-view object capable of
/// recentering and zooming.
pub trait MapView: Send + Sync {
    /// Recenter the view on `center` at `zoom`.
    fn set_view(&self, center: LatLng, zoom: f64, options: ViewOptions) -> Result<()>;
}

/// Shared slot holding the active map view handle.
///
/// The view layer installs the handle after the map widget initializes; the
/// navigator reads it on every call. Clones share the underlying cell, so a
/// slot handed to a deferred task observes a handle installed later.
#[derive(Clone, Default)]
pub struct MapSlot {
    inner: Arc<RwLock<Option<Arc<dyn MapView>>>>,
}

impl MapSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the active handle, replacing any previous one (a re-mounted
    /// map widget installs a fresh handle).
    pub fn install(&self, view: Arc<dyn MapView>) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(view);
        }
    }

    /// Drops the active handle, e.g. when the map widget unmounts.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }

    /// The current handle, if the view layer has installed one.
    pub fn get(&self) -> Option<Arc<dyn MapView>> {
        self.inner.read().ok().and_then(|slot| slot.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.inner.read().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl fmt::Debug for MapSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSlot")
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// Opaque reference to the currently highlighted map feature.
///
/// The core stores it on the view layer's behalf and never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRef {
    pub layer_id: String,
}

impl FeatureRef {
    pub fn new(layer_id: impl Into<String>) -> Self {
        Self {
            layer_id: layer_id.into(),
        }
    }
}
