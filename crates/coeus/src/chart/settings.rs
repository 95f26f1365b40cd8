use crate::aspects::OrbSettings;
use crate::coordinates::CoordinateSystem;
use serde::{Deserialize, Serialize};

/// Two layers whose objects are matched against each other for aspects
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerCombination(pub String, pub String);

impl LayerCombination {
    pub fn new(layer_a: impl Into<String>, layer_b: impl Into<String>) -> Self {
        Self(layer_a.into(), layer_b.into())
    }
}

/// Standard orbs in degrees
pub const DEFAULT_ORBS: &[(&str, f64)] = &[
    ("conjunction", 8.0),
    ("opposition", 8.0),
    ("trine", 7.0),
    ("square", 6.0),
    ("sextile", 4.0),
];

pub fn default_orb_settings() -> OrbSettings {
    DEFAULT_ORBS
        .iter()
        .map(|(name, orb)| (name.to_string(), *orb))
        .collect()
}

fn default_true() -> bool {
    true
}

/// Settings a render runs with: chart defaults with instance overrides applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub zodiac_type: String,
    pub house_system: String,
    pub orb_settings: OrbSettings,
    /// Objects considered for aspects; empty means all
    #[serde(default)]
    pub include_objects: Vec<String>,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
    /// Compute an aspect set within each layer
    #[serde(default = "default_true")]
    pub intra_layer_aspects: bool,
    /// Additional cross-layer combinations, e.g. transit against natal
    #[serde(default)]
    pub cross_layer_aspects: Vec<LayerCombination>,
    /// Start wheel rings from the template's rings rather than overrides alone
    #[serde(default = "default_true")]
    pub include_system_defaults: bool,
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self {
            zodiac_type: "tropical".to_string(),
            house_system: "placidus".to_string(),
            orb_settings: default_orb_settings(),
            include_objects: Vec::new(),
            coordinate_system: CoordinateSystem::default(),
            intra_layer_aspects: true,
            cross_layer_aspects: Vec::new(),
            include_system_defaults: true,
        }
    }
}

/// Per-instance changes to chart settings. Unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_system: Option<String>,
    /// Merged into the base orbs key by key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orb_settings: Option<OrbSettings>,
    /// Replaces the base list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_objects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<CoordinateSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intra_layer_aspects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_layer_aspects: Option<Vec<LayerCombination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_system_defaults: Option<bool>,
}

impl EffectiveSettings {
    /// Apply an instance override on top of these settings
    pub fn with_override(&self, overrides: &SettingsOverride) -> EffectiveSettings {
        let mut orb_settings = self.orb_settings.clone();
        if let Some(orbs) = &overrides.orb_settings {
            orb_settings.extend(orbs.iter().map(|(k, v)| (k.clone(), *v)));
        }

        EffectiveSettings {
            zodiac_type: overrides
                .zodiac_type
                .clone()
                .unwrap_or_else(|| self.zodiac_type.clone()),
            house_system: overrides
                .house_system
                .clone()
                .unwrap_or_else(|| self.house_system.clone()),
            orb_settings,
            include_objects: overrides
                .include_objects
                .clone()
                .unwrap_or_else(|| self.include_objects.clone()),
            coordinate_system: overrides
                .coordinate_system
                .clone()
                .unwrap_or_else(|| self.coordinate_system.clone()),
            intra_layer_aspects: overrides
                .intra_layer_aspects
                .unwrap_or(self.intra_layer_aspects),
            cross_layer_aspects: overrides
                .cross_layer_aspects
                .clone()
                .unwrap_or_else(|| self.cross_layer_aspects.clone()),
            include_system_defaults: overrides
                .include_system_defaults
                .unwrap_or(self.include_system_defaults),
        }
    }
}
