//! Store builder for fluent API configuration
//!
//! This module provides a StoreBuilder that allows for fluent configuration
//! of [`MapStore`] instances with a custom registry, basemap selection, and
//! navigation options.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    basemap::{BasemapId, BasemapStore},
    core::store::MapStore,
    layers::registry::LayerRegistry,
    nav::NavOptions,
};

/// Builder for creating and configuring MapStore instances
pub struct StoreBuilder {
    registry: Option<LayerRegistry>,
    basemap: BasemapId,
    nav_options: NavOptions,
}

impl StoreBuilder {
    /// Create a new StoreBuilder with default settings
    pub fn new() -> Self {
        Self {
            registry: None,
            basemap: BasemapId::GoogleSatellite,
            nav_options: NavOptions::default(),
        }
    }

    /// Set the layer registry (defaults to the built-in world countries)
    pub fn with_registry(mut self, registry: LayerRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the initially selected basemap
    pub fn with_basemap(mut self, id: BasemapId) -> Self {
        self.basemap = id;
        self
    }

    /// Set all navigation options at once
    pub fn with_nav_options(mut self, options: NavOptions) -> Self {
        self.nav_options = options;
        self
    }

    /// Set the zoom level applied by every navigation
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.nav_options.zoom = zoom;
        self
    }

    /// Set the delay before the single deferred navigation attempt
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.nav_options.retry_delay = delay;
        self
    }

    /// Enable or disable recenter animation
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.nav_options.animate = animate;
        self
    }

    /// Build the configured store
    pub fn build(self) -> MapStore {
        let registry = Arc::new(self.registry.unwrap_or_default());
        MapStore::from_parts(registry, BasemapStore::new(self.basemap), self.nav_options)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::LatLng, layers::registry::{LayerEntry, LayerGroup}};

    #[test]
    fn test_builder_defaults() {
        let store = StoreBuilder::new().build();
        assert_eq!(store.all_entries().len(), 6);
        assert_eq!(store.selected_basemap(), BasemapId::GoogleSatellite);
        assert_eq!(store.zoom(), 17.0);
    }

    #[test]
    fn test_builder_overrides() {
        let registry = LayerRegistry::new(vec![LayerGroup::new(
            "Cities",
            vec![LayerEntry::new("tokyo", "TOKYO", LatLng::new(35.6762, 139.6503))],
        )])
        .unwrap();

        let store = StoreBuilder::new()
            .with_registry(registry)
            .with_zoom(12.0)
            .with_retry_delay(Duration::from_millis(250))
            .with_animation(true)
            .build();

        assert_eq!(store.all_entries().len(), 1);
        assert!(store.find_by_id("tokyo").is_some());
        assert_eq!(store.zoom(), 12.0);
    }
}
