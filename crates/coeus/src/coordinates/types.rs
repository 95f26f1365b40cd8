use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

/// Angle unit. Only degrees are produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
}

/// Direction in which longitudes increase around the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "cw", alias = "clockwise")]
    Clockwise,
    #[serde(rename = "ccw", alias = "counterclockwise")]
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroPointKind {
    #[default]
    Zodiac,
}

/// Angular reference from which longitudes are measured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroPoint {
    #[serde(rename = "type", default)]
    pub kind: ZeroPointKind,
    /// Reference sign label for the front end
    #[serde(default)]
    pub sign_start: Sign,
    /// Offset in degrees subtracted from raw longitudes
    #[serde(default)]
    pub offset_degrees: f64,
}

impl Default for ZeroPoint {
    fn default() -> Self {
        Self {
            kind: ZeroPointKind::Zodiac,
            sign_start: Sign::Aries,
            offset_degrees: 0.0,
        }
    }
}

/// Angular convention every position in a render response is expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    #[serde(default)]
    pub angle_unit: AngleUnit,
    #[serde(default = "default_angle_range")]
    pub angle_range: [f64; 2],
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub zero_point: ZeroPoint,
}

fn default_angle_range() -> [f64; 2] {
    [0.0, 360.0]
}

impl CoordinateSystem {
    pub fn with_offset(offset_degrees: f64) -> Self {
        Self {
            zero_point: ZeroPoint {
                offset_degrees,
                ..ZeroPoint::default()
            },
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            angle_range: default_angle_range(),
            direction: Direction::Clockwise,
            zero_point: ZeroPoint::default(),
        }
    }
}
