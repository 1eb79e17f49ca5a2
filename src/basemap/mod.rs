//! Basemap configuration: the closed set of background tile layer
//! definitions and the active selection.
//!
//! Selection is validated at this boundary; unknown values are rejected with
//! a typed error instead of being stored blindly. Tiles themselves are
//! fetched by the map library from the URL template, never by this crate.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{MapNavError, Result};

/// Identifier of a configured basemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasemapId {
    GoogleSatellite,
}

impl BasemapId {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasemapId::GoogleSatellite => "google_satellite",
        }
    }

    /// The descriptor behind this identifier.
    pub fn descriptor(&self) -> &'static Basemap {
        match self {
            BasemapId::GoogleSatellite => &GOOGLE_SATELLITE,
        }
    }
}

impl fmt::Display for BasemapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BasemapId {
    type Err = MapNavError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "google_satellite" => Ok(BasemapId::GoogleSatellite),
            other => Err(MapNavError::UnknownBasemap(other.to_string())),
        }
    }
}

/// A background tile layer definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Basemap {
    pub label: String,
    pub id: BasemapId,
    /// Slippy-map URL template with `{x}`/`{y}`/`{z}` placeholders, handed
    /// to the map library as-is.
    pub tile_url_template: String,
}

static GOOGLE_SATELLITE: Lazy<Basemap> = Lazy::new(|| Basemap {
    label: "Google Satellite".to_string(),
    id: BasemapId::GoogleSatellite,
    tile_url_template: "https://mt1.google.com/vt/lyrs=s&x={x}&y={y}&z={z}".to_string(),
});

/// All configured basemaps, in presentation order.
pub static BASEMAPS: Lazy<Vec<Basemap>> = Lazy::new(|| vec![GOOGLE_SATELLITE.clone()]);

/// Holds the active basemap selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasemapStore {
    selected: BasemapId,
}

impl BasemapStore {
    pub fn new(selected: BasemapId) -> Self {
        Self { selected }
    }

    /// Replaces the active selection with a value from the UI.
    ///
    /// Unknown values are rejected and the current selection is left
    /// untouched.
    pub fn set_selected(&mut self, value: &str) -> Result<()> {
        self.selected = value.parse()?;
        Ok(())
    }

    /// Replaces the active selection with an already-validated identifier.
    pub fn select(&mut self, id: BasemapId) {
        self.selected = id;
    }

    pub fn selected(&self) -> BasemapId {
        self.selected
    }

    pub fn selected_basemap(&self) -> &'static Basemap {
        self.selected.descriptor()
    }

    pub fn basemaps(&self) -> &'static [Basemap] {
        BASEMAPS.as_slice()
    }
}

impl Default for BasemapStore {
    fn default() -> Self {
        Self::new(BasemapId::GoogleSatellite)
    }
}
