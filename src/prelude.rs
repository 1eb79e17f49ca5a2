//! Prelude module for common mapnav types and traits
//!
//! This module re-exports the most commonly used types, traits, and
//! constants for easy importing with `use mapnav::prelude::*;`

pub use crate::core::{
    builder::StoreBuilder,
    constants::{COUNTRY_ZOOM, HANDLE_RETRY_DELAY_MS},
    geo::LatLng,
    store::MapStore,
};

pub use crate::basemap::{Basemap, BasemapId, BasemapStore, BASEMAPS};

pub use crate::layers::registry::{LayerEntry, LayerGroup, LayerRegistry};

pub use crate::nav::{NavOptions, NavOutcome, Navigator, RetryHandle};

pub use crate::persist::{JsonFileSink, SessionState, StateSink};

pub use crate::view::{FeatureRef, MapSlot, MapView, ViewOptions};

pub use crate::{MapNavError, Result};
