//! The application-facing store: one surface over the layer registry,
//! navigation, basemap selection, selection state, and session persistence.
//!
//! A `MapStore` is an explicitly constructed service object with the
//! lifetime its owner gives it; share it behind an `Arc` where the view
//! layer needs it from several places.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    basemap::{Basemap, BasemapId, BasemapStore},
    core::builder::StoreBuilder,
    layers::registry::{LayerEntry, LayerRegistry},
    nav::{NavOptions, NavOutcome, Navigator},
    persist::{SessionState, StateSink},
    view::{FeatureRef, MapSlot, MapView},
    Result,
};

pub struct MapStore {
    registry: Arc<LayerRegistry>,
    navigator: Navigator,
    map: MapSlot,
    selection: RwLock<Option<FeatureRef>>,
    basemaps: RwLock<BasemapStore>,
}

impl MapStore {
    /// Store over the built-in world-countries dataset with default options.
    pub fn new() -> Self {
        StoreBuilder::new().build()
    }

    pub(crate) fn from_parts(
        registry: Arc<LayerRegistry>,
        basemaps: BasemapStore,
        nav_options: NavOptions,
    ) -> Self {
        let map = MapSlot::new();
        let navigator = Navigator::with_options(registry.clone(), map.clone(), nav_options);
        Self {
            registry,
            navigator,
            map,
            selection: RwLock::new(None),
            basemaps: RwLock::new(basemaps),
        }
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Looks up a layer entry by id; `None` if absent.
    pub fn find_by_id(&self, id: &str) -> Option<&LayerEntry> {
        self.registry.find_by_id(id)
    }

    /// All layer entries flattened in group order.
    pub fn all_entries(&self) -> Vec<&LayerEntry> {
        self.registry.all_entries()
    }

    /// Entries currently shown on the map (all of them).
    pub fn visible_entries(&self) -> Vec<&LayerEntry> {
        self.registry.visible_entries()
    }

    /// Installed by the view layer once the map widget has initialized.
    pub fn set_map_handle(&self, view: Arc<dyn MapView>) {
        self.map.install(view);
    }

    /// Dropped by the view layer when the map widget unmounts.
    pub fn clear_map_handle(&self) {
        self.map.clear();
    }

    pub fn map_ready(&self) -> bool {
        self.map.is_ready()
    }

    /// The slot itself, for view layers that manage the handle directly.
    pub fn map_slot(&self) -> MapSlot {
        self.map.clone()
    }

    /// Jumps the map view to the entry registered under `id`.
    ///
    /// See [`Navigator::navigate_to`] for the deferred-attempt semantics.
    pub fn navigate_to(&self, id: &str) -> Result<NavOutcome> {
        self.navigator.navigate_to(id)
    }

    /// The fixed zoom level applied by every navigation.
    pub fn zoom(&self) -> f64 {
        self.navigator.options().zoom
    }

    /// Remembers (or clears, with `None`) the highlighted map feature.
    pub fn set_selected_feature(&self, feature: Option<FeatureRef>) {
        *self
            .selection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = feature;
    }

    pub fn selected_feature(&self) -> Option<FeatureRef> {
        self.selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the active basemap with a value from the UI.
    ///
    /// Unknown values are rejected with a typed error and the selection is
    /// left untouched.
    pub fn set_selected_basemap(&self, value: &str) -> Result<()> {
        let id: BasemapId = value.parse()?;
        self.basemaps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .select(id);
        Ok(())
    }

    pub fn selected_basemap(&self) -> BasemapId {
        self.basemaps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .selected()
    }

    pub fn selected_basemap_descriptor(&self) -> &'static Basemap {
        self.selected_basemap().descriptor()
    }

    /// All configured basemaps, for the UI's selection control.
    pub fn basemaps(&self) -> &'static [Basemap] {
        self.basemaps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .basemaps()
    }

    /// Snapshot of the user-facing state for persistence.
    pub fn session_state(&self) -> SessionState {
        SessionState {
            selected_basemap: self.selected_basemap(),
            selected_feature: self.selected_feature(),
        }
    }

    /// Applies a previously saved snapshot.
    pub fn restore_session(&self, state: SessionState) {
        self.basemaps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .select(state.selected_basemap);
        self.set_selected_feature(state.selected_feature);
    }

    pub fn save_session(&self, sink: &dyn StateSink) -> Result<()> {
        sink.save(&self.session_state())
    }

    /// Loads and applies a snapshot; `false` if the sink had none.
    pub fn load_session(&self, sink: &dyn StateSink) -> Result<bool> {
        match sink.load()? {
            Some(state) => {
                self.restore_session(state);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapNavError;

    #[test]
    fn test_store_exposes_registry() {
        let store = MapStore::new();
        assert_eq!(store.all_entries().len(), 6);
        assert!(store.find_by_id("germany").is_some());
        assert!(store.find_by_id("narnia").is_none());
        assert_eq!(store.zoom(), 17.0);
    }

    #[test]
    fn test_selection_slot() {
        let store = MapStore::new();
        assert_eq!(store.selected_feature(), None);

        store.set_selected_feature(Some(FeatureRef::new("taiwan")));
        assert_eq!(store.selected_feature(), Some(FeatureRef::new("taiwan")));

        store.set_selected_feature(None);
        assert_eq!(store.selected_feature(), None);
    }

    #[test]
    fn test_basemap_selection_is_validated() {
        let store = MapStore::new();
        assert!(store.set_selected_basemap("google_satellite").is_ok());

        let err = store.set_selected_basemap("x").unwrap_err();
        assert!(matches!(err, MapNavError::UnknownBasemap(_)));
        assert_eq!(store.selected_basemap(), BasemapId::GoogleSatellite);
    }

    #[test]
    fn test_session_snapshot_and_restore() {
        let store = MapStore::new();
        store.set_selected_feature(Some(FeatureRef::new("france")));

        let snapshot = store.session_state();

        let fresh = MapStore::new();
        assert_eq!(fresh.selected_feature(), None);
        fresh.restore_session(snapshot);
        assert_eq!(fresh.selected_feature(), Some(FeatureRef::new("france")));
        assert_eq!(fresh.selected_basemap(), BasemapId::GoogleSatellite);
    }

    #[test]
    fn test_map_handle_lifecycle() {
        let store = MapStore::new();
        assert!(!store.map_ready());

        struct NoopView;
        impl MapView for NoopView {
            fn set_view(
                &self,
                _center: crate::LatLng,
                _zoom: f64,
                _options: crate::ViewOptions,
            ) -> Result<()> {
                Ok(())
            }
        }

        store.set_map_handle(Arc::new(NoopView));
        assert!(store.map_ready());

        store.clear_map_handle();
        assert!(!store.map_ready());
    }
}
