//! Coeus: the render-assembly core of the Gaia charting backend.
//!
//! Turns stored chart configuration plus raw ephemeris samples into a fully
//! resolved render model: positions normalized into the chart's coordinate
//! system, aspect sets per layer combination and validated wheel geometry.
//! Everything here is a pure, synchronous transformation over in-memory inputs.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod coordinates;
pub mod ephemeris;
pub mod error;
pub mod index;
pub mod layout;
pub mod render;
pub mod zodiac;

pub use aspects::{AspectCatalog, AspectDefinition, AspectMatcher, AspectPair, AspectSet, OrbSettings};
pub use chart::{ChartInstanceRecord, ChartInstanceSummary, EffectiveSettings, SettingsOverride};
pub use coordinates::{CoordinateNormalizer, CoordinateSystem, Direction, ZeroPoint};
pub use ephemeris::{CelestialPosition, LayerKind, RawLayerPositions, RawPositionSample, RenderLayer};
pub use error::{RenderError, Result};
pub use index::PositionIndex;
pub use layout::{RingDefinition, RingKind, RingOverride, WheelAssembler, WheelDefinition, WheelTemplate};
pub use render::{RenderAssembler, RenderResponse};
pub use zodiac::Sign;
