//! # mapnav
//!
//! The headless navigation core of a world-map application.
//!
//! This library owns the state a map view layer needs but does not render:
//! a registry of named geographic entries, a navigation service that jumps
//! the viewport to an entry by id, the slot holding the live map handle, the
//! basemap selection, and session persistence. The view layer implements
//! [`MapView`] and feeds user clicks into [`MapStore::navigate_to`].

pub mod basemap;
pub mod core;
pub mod layers;
pub mod nav;
pub mod persist;
pub mod prelude;
pub mod view;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{builder::StoreBuilder, geo::LatLng, store::MapStore};

pub use crate::basemap::{Basemap, BasemapId, BasemapStore};

pub use crate::layers::registry::{LayerEntry, LayerGroup, LayerRegistry};

pub use crate::nav::{NavOptions, NavOutcome, Navigator, RetryHandle};

pub use crate::persist::{JsonFileSink, SessionState, StateSink};

pub use crate::view::{FeatureRef, MapSlot, MapView, ViewOptions};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapNavError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapNavError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    #[error("Unknown basemap: {0}")]
    UnknownBasemap(String),

    #[error("Map view error: {0}")]
    View(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapNavError;
