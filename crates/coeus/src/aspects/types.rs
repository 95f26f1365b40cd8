use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum allowed orb in degrees, per aspect type name
pub type OrbSettings = BTreeMap<String, f64>;

/// A named angular relationship from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectDefinition {
    pub name: String,
    /// Exact angle in [0, 180]
    pub exact_angle_deg: f64,
    #[serde(default)]
    pub major: bool,
}

impl AspectDefinition {
    pub fn new(name: impl Into<String>, exact_angle_deg: f64, major: bool) -> Self {
        Self {
            name: name.into(),
            exact_angle_deg,
            major,
        }
    }
}

/// Standard aspect angles
const STANDARD_ASPECTS: &[(&str, f64, bool)] = &[
    ("conjunction", 0.0, true),
    ("semisextile", 30.0, false),
    ("semisquare", 45.0, false),
    ("sextile", 60.0, true),
    ("quintile", 72.0, false),
    ("square", 90.0, true),
    ("trine", 120.0, true),
    ("sesquiquadrate", 135.0, false),
    ("quincunx", 150.0, false),
    ("opposition", 180.0, true),
];

lazy_static::lazy_static! {
    static ref STANDARD_CATALOG: AspectCatalog = AspectCatalog::new(
        STANDARD_ASPECTS
            .iter()
            .map(|(name, angle, major)| AspectDefinition::new(*name, *angle, *major))
            .collect(),
    );
}

/// Catalog of aspect definitions, keyed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectCatalog {
    definitions: BTreeMap<String, AspectDefinition>,
}

impl AspectCatalog {
    pub fn new(definitions: Vec<AspectDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|d| (d.name.clone(), d))
                .collect(),
        }
    }

    /// Major and common minor aspects
    pub fn standard() -> &'static AspectCatalog {
        &STANDARD_CATALOG
    }

    pub fn get(&self, name: &str) -> Option<&AspectDefinition> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Definitions in name order
    pub fn iter(&self) -> impl Iterator<Item = &AspectDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for AspectCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Reference to an object in an aspect
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectObjectRef {
    pub layer_id: String,
    pub object_id: String,
}

impl AspectObjectRef {
    pub fn new(layer_id: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            layer_id: layer_id.into(),
            object_id: object_id.into(),
        }
    }
}

/// An aspect between two objects.
///
/// Within a single layer `object_a` sorts before `object_b` by object id. In a
/// cross-layer set `object_a` always belongs to the first layer of the
/// combination, so the two ids may appear in either order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectPair {
    pub object_a: AspectObjectRef,
    pub object_b: AspectObjectRef,
    pub aspect_type: String,
    pub exact_angle_deg: f64,
    /// Shortest angular distance between the two objects, in [0, 180]
    pub separation_deg: f64,
    /// |separation - exact angle|
    pub orb_delta_deg: f64,
    /// None when either object's speed is unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applying: Option<bool>,
    pub is_exact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectSetKind {
    IntraLayer,
    InterLayer,
}

/// Aspects produced by one layer combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectSet {
    pub source_key: String,
    pub label: String,
    pub kind: AspectSetKind,
    pub layer_ids: Vec<String>,
    /// Sorted by object A, then object B
    pub pairs: Vec<AspectPair>,
}
