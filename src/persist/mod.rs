//! Session persistence: snapshot and restore of the user-facing store
//! state.
//!
//! The core defines the state shape; a [`StateSink`] defines medium and
//! format. Layer and basemap tables are static configuration and are not
//! part of the snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{basemap::BasemapId, view::FeatureRef, Result};

/// Snapshot of the user-facing store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub selected_basemap: BasemapId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_feature: Option<FeatureRef>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_basemap: BasemapId::GoogleSatellite,
            selected_feature: None,
        }
    }
}

/// Anything that can store and recall a session snapshot.
pub trait StateSink: Send + Sync {
    fn save(&self, state: &SessionState) -> Result<()>;

    /// Returns `Ok(None)` when no snapshot has been saved yet.
    fn load(&self) -> Result<Option<SessionState>>;
}

/// Sink that keeps the snapshot as pretty-printed JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSink for JsonFileSink {
    fn save(&self, state: &SessionState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
