pub mod normalizer;
pub mod types;

pub use normalizer::{angular_separation, normalize_degrees, signed_difference, CoordinateNormalizer};
pub use types::{AngleUnit, CoordinateSystem, Direction, ZeroPoint, ZeroPointKind};
