use crate::aspects::{AspectCatalog, AspectMatcher, AspectSet};
use crate::chart::{ChartInstanceRecord, ChartInstanceSummary, EffectiveSettings};
use crate::coordinates::CoordinateNormalizer;
use crate::ephemeris::{RawLayerPositions, RenderLayer};
use crate::error::Result;
use crate::index::PositionIndex;
use crate::layout::{RingOverride, WheelAssembler, WheelTemplate};
use crate::render::types::RenderResponse;
use std::collections::BTreeMap;

/// Orchestrates a render: normalize positions, index them, match aspects per
/// layer combination, lay out the wheel and merge the result.
///
/// Either the whole response is produced or the first error is returned.
#[derive(Debug, Clone, Default)]
pub struct RenderAssembler {
    matcher: AspectMatcher,
}

impl RenderAssembler {
    pub fn new(catalog: AspectCatalog) -> Self {
        Self {
            matcher: AspectMatcher::new(catalog),
        }
    }

    /// Render an instance using chart-level settings with the instance's own
    /// settings override applied.
    pub fn assemble_instance(
        &self,
        chart_instance: &ChartInstanceRecord,
        chart_settings: &EffectiveSettings,
        raw_layers: &BTreeMap<String, RawLayerPositions>,
        wheel_template: &WheelTemplate,
        wheel_overrides: &[RingOverride],
    ) -> Result<RenderResponse> {
        let settings = chart_settings.with_override(&chart_instance.settings_override);
        self.assemble(chart_instance, &settings, raw_layers, wheel_template, wheel_overrides)
    }

    pub fn assemble(
        &self,
        chart_instance: &ChartInstanceRecord,
        settings: &EffectiveSettings,
        raw_layers: &BTreeMap<String, RawLayerPositions>,
        wheel_template: &WheelTemplate,
        wheel_overrides: &[RingOverride],
    ) -> Result<RenderResponse> {
        log::debug!(
            "Rendering instance '{}' with {} layers",
            chart_instance.id,
            raw_layers.len()
        );

        let layers = self.normalize_layers(chart_instance, settings, raw_layers)?;
        let aspects = self.compute_aspect_sets(&layers, settings)?;
        let wheel = WheelAssembler::assemble(
            wheel_template,
            wheel_overrides,
            settings.include_system_defaults,
        )?;

        Ok(RenderResponse {
            chart_instance: ChartInstanceSummary::from_record(chart_instance, raw_layers),
            settings: settings.clone(),
            coordinate_system: settings.coordinate_system.clone(),
            layers,
            aspects,
            wheel,
        })
    }

    fn normalize_layers(
        &self,
        chart_instance: &ChartInstanceRecord,
        settings: &EffectiveSettings,
        raw_layers: &BTreeMap<String, RawLayerPositions>,
    ) -> Result<BTreeMap<String, RenderLayer>> {
        let normalizer = CoordinateNormalizer::new(settings.coordinate_system.clone());

        let mut layers = BTreeMap::new();
        for (layer_id, raw) in raw_layers {
            let mut positions = raw
                .samples
                .iter()
                .map(|sample| normalizer.normalize_sample(sample))
                .collect::<Result<Vec<_>>>()?;
            positions.sort_by(|a, b| a.object_id.cmp(&b.object_id));

            let kind = chart_instance.layer_kind(layer_id);
            log::trace!("Layer '{}' ({:?}): {} positions", layer_id, kind, positions.len());
            layers.insert(layer_id.clone(), RenderLayer::new(kind, positions));
        }
        Ok(layers)
    }

    fn compute_aspect_sets(
        &self,
        layers: &BTreeMap<String, RenderLayer>,
        settings: &EffectiveSettings,
    ) -> Result<BTreeMap<String, AspectSet>> {
        let index = PositionIndex::build(layers)?;
        let orbs = &settings.orb_settings;
        let include = &settings.include_objects;
        self.matcher.validate_orbs(orbs)?;

        let mut aspect_sets = BTreeMap::new();

        if settings.intra_layer_aspects {
            for layer_id in layers.keys() {
                let set = self.matcher.compute_intra_layer_aspects(
                    layer_id,
                    index.select(layer_id, include),
                    orbs,
                )?;
                aspect_sets.insert(set.source_key.clone(), set);
            }
        }

        for combination in &settings.cross_layer_aspects {
            let (layer_a, layer_b) = (&combination.0, &combination.1);
            if !index.contains_layer(layer_a) || !index.contains_layer(layer_b) {
                log::warn!(
                    "Skipping aspect combination {}/{}: layer not present",
                    layer_a,
                    layer_b
                );
                continue;
            }
            let set = self.matcher.compute_inter_layer_aspects(
                layer_a,
                index.select(layer_a, include),
                layer_b,
                index.select(layer_b, include),
                orbs,
            )?;
            aspect_sets.insert(set.source_key.clone(), set);
        }

        log::debug!(
            "Computed {} aspect sets over {} positions",
            aspect_sets.len(),
            index.len()
        );
        Ok(aspect_sets)
    }
}
