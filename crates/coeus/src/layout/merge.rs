//! Structural merge of a base ring template with per-chart overrides.

use crate::error::{RenderError, Result};
use crate::layout::types::{RingOverride, RingTemplate};

/// Apply an override to a ring: every field the override sets replaces the
/// ring's, every unset field is inherited.
pub fn merge_ring(base: &RingTemplate, ring_override: &RingOverride) -> RingTemplate {
    let RingOverride {
        key: _,
        kind,
        label,
        width,
        segment_count,
    } = ring_override;

    RingTemplate {
        key: base.key.clone(),
        kind: kind.unwrap_or(base.kind),
        label: label.clone().or_else(|| base.label.clone()),
        width: width.or(base.width),
        segment_count: segment_count.or(base.segment_count),
    }
}

/// Turn an override with no matching base ring into a ring of its own.
pub fn ring_from_override(ring_override: &RingOverride) -> Result<RingTemplate> {
    let kind = ring_override.kind.ok_or_else(|| RenderError::WheelOverlap {
        message: format!("ring '{}' does not declare a kind", ring_override.key),
    })?;
    Ok(RingTemplate {
        key: ring_override.key.clone(),
        kind,
        label: ring_override.label.clone(),
        width: ring_override.width,
        segment_count: ring_override.segment_count,
    })
}

/// Resolve the ring list for a wheel.
///
/// With `include_system_defaults`, overrides are applied to the base rings by
/// key and overrides for unknown keys are appended in order. Without it, the
/// overrides alone define the rings. Repeated override keys apply in sequence.
pub fn merge_rings(
    base: &[RingTemplate],
    overrides: &[RingOverride],
    include_system_defaults: bool,
) -> Result<Vec<RingTemplate>> {
    let mut rings: Vec<RingTemplate> = if include_system_defaults {
        base.to_vec()
    } else {
        Vec::new()
    };

    for ring_override in overrides {
        match rings.iter_mut().find(|r| r.key == ring_override.key) {
            Some(existing) => *existing = merge_ring(existing, ring_override),
            None => rings.push(ring_from_override(ring_override)?),
        }
    }

    Ok(rings)
}
