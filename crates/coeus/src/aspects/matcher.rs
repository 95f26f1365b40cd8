use crate::aspects::types::{
    AspectCatalog, AspectDefinition, AspectObjectRef, AspectPair, AspectSet, AspectSetKind,
    OrbSettings,
};
use crate::coordinates::{angular_separation, signed_difference};
use crate::ephemeris::types::CelestialPosition;
use crate::error::{RenderError, Result};
use std::collections::HashSet;

/// Orb below which an aspect is flagged exact
const EXACT_THRESHOLD_DEG: f64 = 0.1;

/// Key under which an aspect set is stored: the layer name for a single
/// layer, `"<a>-<b>"` for a cross-layer combination.
pub fn aspect_set_key(layer_a: &str, layer_b: &str) -> String {
    if layer_a == layer_b {
        layer_a.to_string()
    } else {
        format!("{}-{}", layer_a, layer_b)
    }
}

/// Best eligible aspect for one pair of objects
struct AspectMatch<'c> {
    definition: &'c AspectDefinition,
    separation: f64,
    delta: f64,
}

/// Finds the aspects formed between object pairs under configured orbs.
///
/// Each pair yields at most one aspect: the eligible definition with the
/// smallest orb delta, ties going to the lexicographically smaller name.
#[derive(Debug, Clone, Default)]
pub struct AspectMatcher {
    catalog: AspectCatalog,
}

impl AspectMatcher {
    pub fn new(catalog: AspectCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AspectCatalog {
        &self.catalog
    }

    /// Reject orb settings that name aspects missing from the catalog.
    pub fn validate_orbs(&self, orb_settings: &OrbSettings) -> Result<()> {
        match orb_settings.keys().find(|name| !self.catalog.contains(name)) {
            Some(name) => Err(RenderError::UnknownAspectDefinition { name: name.clone() }),
            None => Ok(()),
        }
    }

    /// Compute aspects between every pair of objects within one layer
    pub fn compute_intra_layer_aspects<'a, I>(
        &self,
        layer_id: &str,
        positions: I,
        orb_settings: &OrbSettings,
    ) -> Result<AspectSet>
    where
        I: IntoIterator<Item = &'a CelestialPosition>,
    {
        self.validate_orbs(orb_settings)?;
        let positions = sorted_unique(layer_id, positions)?;

        let mut pairs = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let (a, b) = (positions[i], positions[j]);
                if let Some(pair) = self.match_pair(layer_id, a, layer_id, b, orb_settings) {
                    pairs.push(pair);
                }
            }
        }

        log::debug!(
            "Aspect set '{}': {} pairs from {} objects",
            layer_id,
            pairs.len(),
            positions.len()
        );

        Ok(AspectSet {
            source_key: aspect_set_key(layer_id, layer_id),
            label: format!("{} Aspects", capitalize_first(layer_id)),
            kind: AspectSetKind::IntraLayer,
            layer_ids: vec![layer_id.to_string()],
            pairs,
        })
    }

    /// Compute aspects between every object of layer A and every object of layer B.
    ///
    /// `object_a` of each pair always refers to layer A. The same object id in
    /// both layers is a valid pair.
    pub fn compute_inter_layer_aspects<'a, I, J>(
        &self,
        layer_id_a: &str,
        positions_a: I,
        layer_id_b: &str,
        positions_b: J,
        orb_settings: &OrbSettings,
    ) -> Result<AspectSet>
    where
        I: IntoIterator<Item = &'a CelestialPosition>,
        J: IntoIterator<Item = &'a CelestialPosition>,
    {
        if layer_id_a == layer_id_b {
            return self.compute_intra_layer_aspects(layer_id_a, positions_a, orb_settings);
        }
        self.validate_orbs(orb_settings)?;
        let positions_a = sorted_unique(layer_id_a, positions_a)?;
        let positions_b = sorted_unique(layer_id_b, positions_b)?;

        let mut pairs = Vec::new();
        for a in &positions_a {
            for b in &positions_b {
                if let Some(pair) = self.match_pair(layer_id_a, a, layer_id_b, b, orb_settings) {
                    pairs.push(pair);
                }
            }
        }

        let key = aspect_set_key(layer_id_a, layer_id_b);
        log::debug!(
            "Aspect set '{}': {} pairs from {}x{} objects",
            key,
            pairs.len(),
            positions_a.len(),
            positions_b.len()
        );

        Ok(AspectSet {
            source_key: key,
            label: format!(
                "{} / {} Aspects",
                capitalize_first(layer_id_a),
                capitalize_first(layer_id_b)
            ),
            kind: AspectSetKind::InterLayer,
            layer_ids: vec![layer_id_a.to_string(), layer_id_b.to_string()],
            pairs,
        })
    }

    fn match_pair(
        &self,
        layer_a: &str,
        a: &CelestialPosition,
        layer_b: &str,
        b: &CelestialPosition,
        orb_settings: &OrbSettings,
    ) -> Option<AspectPair> {
        let found = self.best_aspect(a.longitude_deg, b.longitude_deg, orb_settings)?;
        log::trace!(
            "{}:{} {} {}:{} (orb {:.3})",
            layer_a,
            a.object_id,
            found.definition.name,
            layer_b,
            b.object_id,
            found.delta
        );

        Some(AspectPair {
            object_a: AspectObjectRef::new(layer_a, a.object_id.as_str()),
            object_b: AspectObjectRef::new(layer_b, b.object_id.as_str()),
            aspect_type: found.definition.name.clone(),
            exact_angle_deg: found.definition.exact_angle_deg,
            separation_deg: found.separation,
            orb_delta_deg: found.delta,
            applying: is_applying(a, b, found.definition.exact_angle_deg, found.separation),
            is_exact: found.delta < EXACT_THRESHOLD_DEG,
        })
    }

    /// Smallest-delta eligible aspect between two longitudes
    fn best_aspect(&self, lon_a: f64, lon_b: f64, orb_settings: &OrbSettings) -> Option<AspectMatch<'_>> {
        let separation = angular_separation(lon_a, lon_b);
        let mut best: Option<AspectMatch<'_>> = None;

        // Catalog iterates in name order, so strict `<` keeps the smaller name on ties
        for definition in self.catalog.iter() {
            let Some(&orb) = orb_settings.get(&definition.name) else {
                continue;
            };
            let delta = (separation - definition.exact_angle_deg).abs();
            if delta > orb || orb.is_nan() {
                continue;
            }
            if best.as_ref().map_or(true, |current| delta < current.delta) {
                best = Some(AspectMatch {
                    definition,
                    separation,
                    delta,
                });
            }
        }

        best
    }
}

/// Whether the pair is moving toward the exact aspect angle.
///
/// Returns None when either speed is unknown. An exact aspect, or a pair with
/// no relative motion, is not applying.
fn is_applying(
    a: &CelestialPosition,
    b: &CelestialPosition,
    exact_angle: f64,
    separation: f64,
) -> Option<bool> {
    let relative_speed = a.speed_deg_per_day? - b.speed_deg_per_day?;

    // Rate of change of the separation, in degrees per day
    let separation_rate = if separation == 0.0 {
        relative_speed.abs()
    } else if separation == 180.0 {
        -relative_speed.abs()
    } else {
        signed_difference(a.longitude_deg, b.longitude_deg).signum() * relative_speed
    };

    let offset = separation - exact_angle;
    Some((offset > 0.0 && separation_rate < 0.0) || (offset < 0.0 && separation_rate > 0.0))
}

/// Sort positions by object id, rejecting duplicates
fn sorted_unique<'a, I>(layer_id: &str, positions: I) -> Result<Vec<&'a CelestialPosition>>
where
    I: IntoIterator<Item = &'a CelestialPosition>,
{
    let mut seen = HashSet::new();
    let mut sorted = Vec::new();
    for position in positions {
        if !seen.insert(position.object_id.as_str()) {
            return Err(RenderError::DuplicateObjectId {
                layer_id: layer_id.to_string(),
                object_id: position.object_id.clone(),
            });
        }
        sorted.push(position);
    }
    sorted.sort_by(|x, y| x.object_id.cmp(&y.object_id));
    Ok(sorted)
}

/// Capitalize first letter of a string
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
