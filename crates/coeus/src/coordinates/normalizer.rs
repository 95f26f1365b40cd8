use crate::coordinates::types::{CoordinateSystem, Direction};
use crate::ephemeris::types::{CelestialPosition, RawPositionSample};
use crate::error::{RenderError, Result};

const FULL_CIRCLE: f64 = 360.0;

/// Wrap any finite angle into [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if wrapped >= FULL_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Signed difference `a - b` folded into (-180, 180]
pub fn signed_difference(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    if diff > 180.0 {
        diff - FULL_CIRCLE
    } else {
        diff
    }
}

/// Shortest angular distance between two longitudes, in [0, 180]
pub fn angular_separation(a: f64, b: f64) -> f64 {
    // Wrap the operands, not the difference, so the result is exactly symmetric
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(FULL_CIRCLE - diff)
}

/// Maps raw ecliptic longitudes into a chart's coordinate system
#[derive(Debug, Clone)]
pub struct CoordinateNormalizer {
    system: CoordinateSystem,
}

impl CoordinateNormalizer {
    pub fn new(system: CoordinateSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> &CoordinateSystem {
        &self.system
    }

    /// Normalize a raw longitude into the coordinate system.
    pub fn normalize(&self, raw_longitude: f64) -> Result<f64> {
        self.normalize_for("longitude", raw_longitude)
    }

    /// Inverse of [`normalize`](Self::normalize): recovers the raw longitude modulo 360.
    pub fn denormalize(&self, angle: f64) -> Result<f64> {
        if !angle.is_finite() {
            return Err(RenderError::InvalidEphemerisData {
                object_id: "angle".to_string(),
                message: format!("angle is not a finite number: {}", angle),
            });
        }
        self.check_angle_range("angle")?;
        let unmirrored = match self.system.direction {
            Direction::Clockwise => normalize_degrees(angle),
            Direction::CounterClockwise => normalize_degrees(FULL_CIRCLE - angle),
        };
        Ok(normalize_degrees(unmirrored + self.system.zero_point.offset_degrees))
    }

    /// Normalize one raw ephemeris sample into a position.
    ///
    /// Speed is re-expressed in the system's direction so angular motion stays
    /// consistent with the normalized longitude; `retrograde` keeps the sign of
    /// the raw ecliptic speed.
    pub fn normalize_sample(&self, sample: &RawPositionSample) -> Result<CelestialPosition> {
        let raw_longitude = sample.longitude.ok_or_else(|| RenderError::InvalidEphemerisData {
            object_id: sample.object_id.clone(),
            message: "longitude is missing".to_string(),
        })?;
        let longitude_deg = self.normalize_for(&sample.object_id, raw_longitude)?;

        let speed = match sample.speed {
            Some(speed) if !speed.is_finite() => {
                return Err(RenderError::InvalidEphemerisData {
                    object_id: sample.object_id.clone(),
                    message: format!("speed is not a finite number: {}", speed),
                });
            }
            other => other,
        };

        let speed_deg_per_day = speed.map(|s| match self.system.direction {
            Direction::Clockwise => s,
            Direction::CounterClockwise => -s,
        });

        Ok(CelestialPosition {
            object_id: sample.object_id.clone(),
            longitude_deg,
            speed_deg_per_day,
            retrograde: speed.map(|s| s < 0.0).unwrap_or(false),
        })
    }

    fn normalize_for(&self, object_id: &str, raw_longitude: f64) -> Result<f64> {
        if !raw_longitude.is_finite() {
            return Err(RenderError::InvalidEphemerisData {
                object_id: object_id.to_string(),
                message: format!("longitude is not a finite number: {}", raw_longitude),
            });
        }

        self.check_angle_range(object_id)?;

        let mut angle = normalize_degrees(raw_longitude - self.system.zero_point.offset_degrees);
        if self.system.direction == Direction::CounterClockwise {
            angle = normalize_degrees(FULL_CIRCLE - angle);
        }

        let [low, high] = self.system.angle_range;
        Ok(angle.clamp(low, high))
    }

    /// The angle range must be a finite, ordered sub-range of [0, 360].
    fn check_angle_range(&self, object_id: &str) -> Result<()> {
        let [low, high] = self.system.angle_range;
        if low.is_finite() && high.is_finite() && 0.0 <= low && low <= high && high <= FULL_CIRCLE {
            return Ok(());
        }
        Err(RenderError::InvalidEphemerisData {
            object_id: object_id.to_string(),
            message: format!("angle range [{}, {}] is not within [0, 360]", low, high),
        })
    }
}

impl Default for CoordinateNormalizer {
    fn default() -> Self {
        Self::new(CoordinateSystem::default())
    }
}
