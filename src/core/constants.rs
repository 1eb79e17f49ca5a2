//! Core constants shared across the navigation engine.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Zoom level applied by every country navigation (street-level detail).
pub const COUNTRY_ZOOM: f64 = 17.0;

/// How long to wait for the map view to finish initializing before the
/// single deferred navigation attempt, in milliseconds.
pub const HANDLE_RETRY_DELAY_MS: u64 = 1000;
