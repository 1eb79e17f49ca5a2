use serde::{Deserialize, Serialize};

use crate::{core::geo::LatLng, MapNavError, Result};

/// A named point of interest with a geographic center.
///
/// Identity is `id`, unique across the registry. Entries are immutable after
/// startup; the center is carried exactly as configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub id: String,
    pub name: String,
    pub center: LatLng,
}

impl LayerEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, center: LatLng) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            center,
        }
    }
}

/// An ordered, named grouping of layer entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerGroup {
    pub name: String,
    pub entries: Vec<LayerEntry>,
}

impl LayerGroup {
    pub fn new(name: impl Into<String>, entries: Vec<LayerEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// Ordered collection of layer groups, fixed at startup and never mutated
/// at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRegistry {
    groups: Vec<LayerGroup>,
}

impl LayerRegistry {
    /// Builds a registry from explicit groups, rejecting entries whose
    /// center falls outside the valid coordinate range.
    pub fn new(groups: Vec<LayerGroup>) -> Result<Self> {
        for group in &groups {
            for entry in &group.entries {
                if !entry.center.is_valid() {
                    return Err(MapNavError::InvalidCoordinates(format!(
                        "layer '{}' has center ({}, {}) outside the valid range",
                        entry.id, entry.center.lat, entry.center.lng
                    )));
                }
            }
        }
        Ok(Self { groups })
    }

    /// The built-in dataset: one group with six country entries.
    pub fn world_countries() -> Self {
        Self {
            groups: vec![LayerGroup::new(
                "World Countries",
                vec![
                    LayerEntry::new("taiwan", "TAIWAN", LatLng::new(25.0457, 121.5196)),
                    LayerEntry::new("china", "CHINA", LatLng::new(39.89877, 116.39167)),
                    LayerEntry::new(
                        "japan",
                        "JAPAN",
                        LatLng::new(35.684580490329374, 139.77440880399962),
                    ),
                    LayerEntry::new("usa", "UNITED STATES", LatLng::new(38.89511, -77.03655)),
                    LayerEntry::new("france", "FRANCE", LatLng::new(48.8534, 2.3488)),
                    LayerEntry::new("germany", "GERMANY", LatLng::new(52.5108, 13.399)),
                ],
            )],
        }
    }

    /// Looks up an entry by id.
    ///
    /// Linear scan over groups then entries; the first exact match wins.
    /// Returns `None` for ids that are not registered.
    pub fn find_by_id(&self, id: &str) -> Option<&LayerEntry> {
        for group in &self.groups {
            for entry in &group.entries {
                if entry.id == id {
                    return Some(entry);
                }
            }
        }
        None
    }

    /// All entries flattened in group order, then entry order within each
    /// group. Pure; recomputed on each call.
    pub fn all_entries(&self) -> Vec<&LayerEntry> {
        self.groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .collect()
    }

    /// Entries currently shown on the map. Every configured layer is
    /// permanently visible, so this is the full flattened list.
    pub fn visible_entries(&self) -> Vec<&LayerEntry> {
        self.all_entries()
    }

    pub fn groups(&self) -> &[LayerGroup] {
        &self.groups
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LayerRegistry {
    /// Defaults to the built-in world-countries dataset.
    fn default() -> Self {
        Self::world_countries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_id_resolves() {
        let registry = LayerRegistry::world_countries();
        for id in ["taiwan", "china", "japan", "usa", "france", "germany"] {
            let entry = registry.find_by_id(id);
            assert!(entry.is_some(), "missing entry for '{}'", id);
            assert_eq!(entry.map(|e| e.id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_unknown_id_returns_none() {
        let registry = LayerRegistry::world_countries();
        assert!(registry.find_by_id("atlantis").is_none());
        assert!(registry.find_by_id("").is_none());
        // Lookup is exact, not case-insensitive
        assert!(registry.find_by_id("TAIWAN").is_none());
    }

    #[test]
    fn test_all_entries_flattens_in_order() {
        let registry = LayerRegistry::world_countries();
        let entries = registry.all_entries();

        assert_eq!(entries.len(), 6);
        assert_eq!(entries.len(), registry.len());
        assert_eq!(entries[0].id, "taiwan");
        assert_eq!(entries[5].id, "germany");
    }

    #[test]
    fn test_visible_entries_matches_all() {
        let registry = LayerRegistry::world_countries();
        assert_eq!(registry.visible_entries(), registry.all_entries());
    }

    #[test]
    fn test_builtin_coordinates() {
        let registry = LayerRegistry::world_countries();
        let usa = registry.find_by_id("usa").unwrap();
        assert_eq!(usa.name, "UNITED STATES");
        assert_eq!(usa.center, LatLng::new(38.89511, -77.03655));
    }

    #[test]
    fn test_first_match_wins_across_groups() {
        let registry = LayerRegistry::new(vec![
            LayerGroup::new(
                "A",
                vec![LayerEntry::new("dup", "FIRST", LatLng::new(1.0, 1.0))],
            ),
            LayerGroup::new(
                "B",
                vec![LayerEntry::new("dup", "SECOND", LatLng::new(2.0, 2.0))],
            ),
        ])
        .unwrap();

        assert_eq!(registry.find_by_id("dup").unwrap().name, "FIRST");
    }

    #[test]
    fn test_invalid_center_rejected() {
        let result = LayerRegistry::new(vec![LayerGroup::new(
            "Bad",
            vec![LayerEntry::new("north", "NORTH", LatLng::new(95.0, 0.0))],
        )]);

        assert!(matches!(result, Err(MapNavError::InvalidCoordinates(_))));
    }

    #[test]
    fn test_empty_registry() {
        let registry = LayerRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.all_entries().is_empty());
    }
}
