use crate::zodiac::{self, Sign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw sample from the ephemeris collaborator.
///
/// Values are untrusted: longitude may be missing or non-finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPositionSample {
    pub object_id: String,
    /// Ecliptic longitude in degrees, any range
    pub longitude: Option<f64>,
    /// Speed in longitude (degrees per day), if known
    #[serde(default)]
    pub speed: Option<f64>,
}

impl RawPositionSample {
    pub fn new(object_id: impl Into<String>, longitude: f64, speed: Option<f64>) -> Self {
        Self {
            object_id: object_id.into(),
            longitude: Some(longitude),
            speed,
        }
    }
}

/// Raw samples for one layer, as fetched for the layer's date-time source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLayerPositions {
    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,
    pub samples: Vec<RawPositionSample>,
}

impl RawLayerPositions {
    pub fn new(samples: Vec<RawPositionSample>) -> Self {
        Self {
            date_time: None,
            samples,
        }
    }
}

/// Normalized position of one object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialPosition {
    pub object_id: String,
    /// Longitude in the chart's coordinate system, always in [0, 360)
    pub longitude_deg: f64,
    /// Signed speed in degrees per day, in the chart's angular direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_deg_per_day: Option<f64>,
    /// True when the object moves backwards along the ecliptic
    pub retrograde: bool,
}

impl CelestialPosition {
    pub fn sign(&self) -> Sign {
        zodiac::sign_of(self.longitude_deg)
    }

    pub fn degree_in_sign(&self) -> f64 {
        zodiac::degree_in_sign(self.longitude_deg)
    }
}

/// Purpose of a layer within a chart instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    #[default]
    Natal,
    Transit,
    Progressed,
    SolarArc,
    Composite,
    #[serde(other)]
    Custom,
}

/// A named snapshot of normalized object positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderLayer {
    pub kind: LayerKind,
    /// Positions sorted by object id, unique per layer
    pub positions: Vec<CelestialPosition>,
}

impl RenderLayer {
    pub fn new(kind: LayerKind, positions: Vec<CelestialPosition>) -> Self {
        Self { kind, positions }
    }

    pub fn get(&self, object_id: &str) -> Option<&CelestialPosition> {
        self.positions.iter().find(|p| p.object_id == object_id)
    }
}
