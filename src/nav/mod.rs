//! Country navigation: resolve a registry entry by id and recenter the map
//! view on it.
//!
//! The map widget initializes asynchronously after the application mounts,
//! so a navigation issued early may find no view handle installed yet. That
//! startup race is handled with a single deferred attempt: the navigator
//! waits a fixed delay, tries once more, and then gives up. This is a
//! best-effort bound, not a general resilience mechanism.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{
    core::{constants, geo::LatLng},
    layers::registry::{LayerEntry, LayerRegistry},
    view::{MapSlot, MapView, ViewOptions},
    MapNavError, Result,
};

/// Tunables for the navigator.
#[derive(Debug, Clone)]
pub struct NavOptions {
    /// Zoom level applied by every navigation.
    pub zoom: f64,
    /// How long to wait for the map view before the single deferred attempt.
    pub retry_delay: Duration,
    /// Whether recentering animates.
    pub animate: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            zoom: constants::COUNTRY_ZOOM,
            retry_delay: Duration::from_millis(constants::HANDLE_RETRY_DELAY_MS),
            animate: false,
        }
    }
}

/// Outcome of a [`Navigator::navigate_to`] call.
#[derive(Debug)]
pub enum NavOutcome {
    /// The map view was recentered immediately.
    Recentered,
    /// The map view is not ready yet; one deferred attempt was scheduled.
    Deferred(RetryHandle),
}

/// Cancellable handle to the single deferred navigation attempt.
///
/// Dropping the handle does not cancel the task; the deferred attempt is
/// fire-and-forget unless explicitly aborted.
#[derive(Debug)]
pub struct RetryHandle {
    inner: JoinHandle<()>,
}

impl RetryHandle {
    /// Aborts the deferred attempt if it has not run yet. Call sites should
    /// cancel on teardown so a stale navigation cannot fire into a dead view.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Whether the deferred attempt has run or been aborted.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Waits for the deferred attempt to run (or be aborted).
    pub async fn wait(self) {
        let _ = self.inner.await;
    }
}

/// Navigation service over a layer registry and a shared map slot.
///
/// Explicitly constructed and shared by reference; the registry is fixed for
/// the navigator's lifetime.
pub struct Navigator {
    registry: Arc<LayerRegistry>,
    map: MapSlot,
    options: NavOptions,
}

impl Navigator {
    pub fn new(registry: Arc<LayerRegistry>, map: MapSlot) -> Self {
        Self::with_options(registry, map, NavOptions::default())
    }

    pub fn with_options(registry: Arc<LayerRegistry>, map: MapSlot, options: NavOptions) -> Self {
        Self {
            registry,
            map,
            options,
        }
    }

    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Jumps the map view to the entry registered under `id`.
    ///
    /// Unknown ids fail immediately and never touch the view. If no view
    /// handle is installed yet, exactly one deferred attempt is scheduled
    /// after [`NavOptions::retry_delay`] and its handle returned. A view
    /// error is logged and surfaced without panicking the caller.
    ///
    /// Scheduling the deferred attempt requires a running tokio runtime.
    pub fn navigate_to(&self, id: &str) -> Result<NavOutcome> {
        let entry = match self.registry.find_by_id(id) {
            Some(entry) => entry,
            None => {
                log::error!("no layer registered under id '{}'", id);
                return Err(MapNavError::UnknownLayer(id.to_string()));
            }
        };

        let view = match self.map.get() {
            Some(view) => view,
            None => {
                log::warn!(
                    "map view not ready, deferring navigation to '{}' by {:?}",
                    entry.id,
                    self.options.retry_delay
                );
                return Ok(NavOutcome::Deferred(self.schedule_retry(entry.clone())));
            }
        };

        self.recenter(view.as_ref(), entry.center, &entry.name)?;
        Ok(NavOutcome::Recentered)
    }

    fn recenter(&self, view: &dyn MapView, center: LatLng, name: &str) -> Result<()> {
        let view_options = ViewOptions {
            animate: self.options.animate,
        };
        match view.set_view(center, self.options.zoom, view_options) {
            Ok(()) => {
                log::info!("recentered map on {} at zoom {}", name, self.options.zoom);
                Ok(())
            }
            Err(err) => {
                log::error!("map view failed to recenter on {}: {}", name, err);
                Err(err)
            }
        }
    }

    /// Spawns the one-shot delayed task: wait, re-read the slot, try once.
    ///
    /// The entry is resolved before scheduling; the registry is immutable,
    /// so re-resolving at fire time would be equivalent.
    fn schedule_retry(&self, entry: LayerEntry) -> RetryHandle {
        let map = self.map.clone();
        let options = self.options.clone();

        let inner = tokio::spawn(async move {
            tokio::time::sleep(options.retry_delay).await;

            let view = match map.get() {
                Some(view) => view,
                None => {
                    log::error!(
                        "map view still not ready, giving up on navigation to '{}'",
                        entry.id
                    );
                    return;
                }
            };

            let view_options = ViewOptions {
                animate: options.animate,
            };
            match view.set_view(entry.center, options.zoom, view_options) {
                Ok(()) => log::info!(
                    "map view became ready, recentered on {} at zoom {}",
                    entry.name,
                    options.zoom
                ),
                Err(err) => log::error!("deferred recenter on {} failed: {}", entry.name, err),
            }
        });

        RetryHandle { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingView {
        calls: Mutex<Vec<(LatLng, f64, bool)>>,
    }

    impl RecordingView {
        fn calls(&self) -> Vec<(LatLng, f64, bool)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MapView for RecordingView {
        fn set_view(&self, center: LatLng, zoom: f64, options: ViewOptions) -> Result<()> {
            self.calls.lock().unwrap().push((center, zoom, options.animate));
            Ok(())
        }
    }

    fn navigator_with_view() -> (Navigator, Arc<RecordingView>) {
        let slot = MapSlot::new();
        let view = Arc::new(RecordingView::default());
        slot.install(view.clone());
        let navigator = Navigator::new(Arc::new(LayerRegistry::world_countries()), slot);
        (navigator, view)
    }

    #[test]
    fn test_default_options() {
        let options = NavOptions::default();
        assert_eq!(options.zoom, 17.0);
        assert_eq!(options.retry_delay, Duration::from_millis(1000));
        assert!(!options.animate);
    }

    #[test]
    fn test_navigate_recenters_with_exact_coordinates() {
        let (navigator, view) = navigator_with_view();

        let outcome = navigator.navigate_to("france").unwrap();
        assert!(matches!(outcome, NavOutcome::Recentered));

        let calls = view.calls();
        assert_eq!(calls, vec![(LatLng::new(48.8534, 2.3488), 17.0, false)]);
    }

    #[test]
    fn test_unknown_id_is_terminal() {
        let (navigator, view) = navigator_with_view();

        let err = navigator.navigate_to("atlantis").unwrap_err();
        assert!(matches!(err, MapNavError::UnknownLayer(id) if id == "atlantis"));
        assert!(view.calls().is_empty());
    }

    #[tokio::test]
    async fn test_deferred_attempt_fires_once_view_arrives() {
        let slot = MapSlot::new();
        let view = Arc::new(RecordingView::default());
        let navigator = Navigator::with_options(
            Arc::new(LayerRegistry::world_countries()),
            slot.clone(),
            NavOptions {
                retry_delay: Duration::from_millis(20),
                ..NavOptions::default()
            },
        );

        let outcome = navigator.navigate_to("japan").unwrap();
        let handle = match outcome {
            NavOutcome::Deferred(handle) => handle,
            other => panic!("expected deferred navigation, got {:?}", other),
        };

        slot.install(view.clone());
        handle.wait().await;

        assert_eq!(view.calls().len(), 1);
    }
}
