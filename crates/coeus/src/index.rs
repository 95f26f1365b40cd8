//! Constant-time lookup of positions by (layer, object).

use crate::ephemeris::types::{CelestialPosition, RenderLayer};
use crate::error::{RenderError, Result};
use std::collections::{BTreeMap, HashMap};

/// Borrowed index over a set of render layers
#[derive(Debug, Clone, Default)]
pub struct PositionIndex<'a> {
    layers: HashMap<&'a str, HashMap<&'a str, &'a CelestialPosition>>,
}

impl<'a> PositionIndex<'a> {
    /// Index every position of every layer.
    ///
    /// Fails if a layer holds two positions with the same object id.
    pub fn build(layers: &'a BTreeMap<String, RenderLayer>) -> Result<Self> {
        let mut index = HashMap::with_capacity(layers.len());

        for (layer_id, layer) in layers {
            let mut by_object = HashMap::with_capacity(layer.positions.len());
            for position in &layer.positions {
                if by_object.insert(position.object_id.as_str(), position).is_some() {
                    return Err(RenderError::DuplicateObjectId {
                        layer_id: layer_id.clone(),
                        object_id: position.object_id.clone(),
                    });
                }
            }
            index.insert(layer_id.as_str(), by_object);
        }

        Ok(Self { layers: index })
    }

    pub fn get(&self, layer_id: &str, object_id: &str) -> Option<&'a CelestialPosition> {
        self.layers.get(layer_id)?.get(object_id).copied()
    }

    pub fn contains_layer(&self, layer_id: &str) -> bool {
        self.layers.contains_key(layer_id)
    }

    /// Positions of a layer restricted to `include_objects`; an empty filter
    /// selects every object. Unknown layers yield nothing.
    pub fn select(&self, layer_id: &str, include_objects: &[String]) -> Vec<&'a CelestialPosition> {
        let Some(by_object) = self.layers.get(layer_id) else {
            return Vec::new();
        };
        let mut selected: Vec<&'a CelestialPosition> = if include_objects.is_empty() {
            by_object.values().copied().collect()
        } else {
            let mut ids: Vec<&str> = include_objects.iter().map(String::as_str).collect();
            ids.sort_unstable();
            ids.dedup();
            ids.into_iter()
                .filter_map(|id| by_object.get(id).copied())
                .collect()
        };
        selected.sort_by(|a, b| a.object_id.cmp(&b.object_id));
        selected
    }

    /// Total number of indexed positions
    pub fn len(&self) -> usize {
        self.layers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
