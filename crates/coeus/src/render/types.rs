use crate::aspects::AspectSet;
use crate::chart::{ChartInstanceSummary, EffectiveSettings};
use crate::coordinates::CoordinateSystem;
use crate::ephemeris::RenderLayer;
use crate::layout::WheelDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully resolved render model handed to the rendering front end.
///
/// `layers` and `aspects` share layer names: an aspect set is keyed by its
/// layer name, or `"<a>-<b>"` for a cross-layer combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub chart_instance: ChartInstanceSummary,
    pub settings: EffectiveSettings,
    pub coordinate_system: CoordinateSystem,
    pub layers: BTreeMap<String, RenderLayer>,
    pub aspects: BTreeMap<String, AspectSet>,
    pub wheel: WheelDefinition,
}
