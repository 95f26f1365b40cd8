pub mod types;

pub use types::{CelestialPosition, LayerKind, RawLayerPositions, RawPositionSample, RenderLayer};
