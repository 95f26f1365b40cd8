//! Render defaults read from TOML.
//!
//! ```toml
//! [render]
//! zodiac_type = "tropical"
//! house_system = "placidus"
//! include_objects = ["sun", "moon"]
//! cross_layer_aspects = [["transit", "natal"]]
//!
//! [render.orbs]
//! conjunction = 8.0
//! square = 6.0
//!
//! [render.coordinates]
//! direction = "ccw"
//! offset_degrees = 0.0
//! ```

use crate::aspects::OrbSettings;
use crate::chart::{default_orb_settings, EffectiveSettings, LayerCombination};
use crate::coordinates::{CoordinateSystem, Direction, ZeroPoint};
use crate::zodiac::Sign;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct CoordinatesToml {
    #[serde(default)]
    direction: Direction,
    #[serde(default)]
    sign_start: Sign,
    #[serde(default)]
    offset_degrees: f64,
    #[serde(default)]
    angle_range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
struct RenderToml {
    #[serde(default)]
    zodiac_type: Option<String>,
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    orbs: Option<OrbSettings>,
    #[serde(default)]
    include_objects: Vec<String>,
    #[serde(default)]
    coordinates: Option<CoordinatesToml>,
    #[serde(default = "default_true")]
    intra_layer_aspects: bool,
    #[serde(default)]
    cross_layer_aspects: Vec<LayerCombination>,
    #[serde(default = "default_true")]
    include_system_defaults: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    render: Option<RenderToml>,
}

/// Defaults applied to every render before instance overrides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderDefaults {
    pub settings: EffectiveSettings,
}

impl From<RenderToml> for RenderDefaults {
    fn from(cfg: RenderToml) -> Self {
        let base = EffectiveSettings::default();
        let coordinate_system = match cfg.coordinates {
            Some(c) => CoordinateSystem {
                direction: c.direction,
                angle_range: c.angle_range.unwrap_or(base.coordinate_system.angle_range),
                zero_point: ZeroPoint {
                    sign_start: c.sign_start,
                    offset_degrees: c.offset_degrees,
                    ..ZeroPoint::default()
                },
                ..CoordinateSystem::default()
            },
            None => base.coordinate_system,
        };

        Self {
            settings: EffectiveSettings {
                zodiac_type: cfg.zodiac_type.unwrap_or(base.zodiac_type),
                house_system: cfg.house_system.unwrap_or(base.house_system),
                orb_settings: cfg.orbs.unwrap_or_else(default_orb_settings),
                include_objects: cfg.include_objects,
                coordinate_system,
                intra_layer_aspects: cfg.intra_layer_aspects,
                cross_layer_aspects: cfg.cross_layer_aspects,
                include_system_defaults: cfg.include_system_defaults,
            },
        }
    }
}

/// Parse render defaults from TOML text. A missing `[render]` table yields
/// the built-in defaults.
pub fn load_render_defaults_from_str(text: &str) -> anyhow::Result<RenderDefaults> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse render config: {e}"))?;
    let defaults = root.render.map(RenderDefaults::from).unwrap_or_default();

    if let Some((name, orb)) = defaults
        .settings
        .orb_settings
        .iter()
        .find(|(_, orb)| !orb.is_finite() || **orb < 0.0)
    {
        anyhow::bail!("render.orbs.{} must be a non-negative number, got {}", name, orb);
    }

    let [low, high] = defaults.settings.coordinate_system.angle_range;
    if !(low.is_finite() && high.is_finite() && 0.0 <= low && low <= high && high <= 360.0) {
        anyhow::bail!(
            "render.coordinates.angle_range must lie within [0, 360], got [{}, {}]",
            low,
            high
        );
    }
    Ok(defaults)
}

pub fn load_render_defaults(path: &Path) -> anyhow::Result<RenderDefaults> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read render config {}", path.display()))?;
    load_render_defaults_from_str(&text)
}
