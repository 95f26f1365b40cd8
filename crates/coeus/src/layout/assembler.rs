use crate::error::{RenderError, Result};
use crate::layout::merge::merge_rings;
use crate::layout::types::{
    RingDefinition, RingOverride, RingTemplate, WheelDefinition, WheelRadius, WheelTemplate,
};

/// Tolerance for floating point drift when comparing ring bounds
const RADIUS_EPSILON: f64 = 1e-9;

/// Wheel assembler
pub struct WheelAssembler;

impl WheelAssembler {
    /// Build concrete ring geometry from a template and per-chart overrides.
    ///
    /// Rings are laid out from the inner radius outward in declaration order.
    pub fn assemble(
        template: &WheelTemplate,
        overrides: &[RingOverride],
        include_system_defaults: bool,
    ) -> Result<WheelDefinition> {
        validate_radius(&template.radius)?;
        let rings = merge_rings(&template.rings, overrides, include_system_defaults)?;
        let laid_out = layout_rings(&rings, &template.radius)?;

        let wheel = WheelDefinition {
            id: template.id.clone(),
            name: template.name.clone(),
            radius: template.radius,
            rings: laid_out,
        };
        validate_wheel(&wheel)?;

        log::debug!(
            "Assembled wheel '{}' with {} rings in [{}, {}]",
            wheel.id,
            wheel.rings.len(),
            wheel.radius.inner,
            wheel.radius.outer
        );
        Ok(wheel)
    }
}

/// Assign radius spans. Rings with an explicit width take it; the remaining
/// span is split equally among the rest.
fn layout_rings(rings: &[RingTemplate], radius: &WheelRadius) -> Result<Vec<RingDefinition>> {
    let span = radius.outer - radius.inner;

    let mut explicit_total = 0.0;
    let mut auto_count = 0usize;
    for ring in rings {
        match ring.width {
            Some(width) if !(width.is_finite() && width > 0.0) => {
                return Err(RenderError::WheelOverlap {
                    message: format!("ring '{}' has non-positive width {}", ring.key, width),
                });
            }
            Some(width) => explicit_total += width,
            None => auto_count += 1,
        }
    }

    let remaining = span - explicit_total;
    if remaining < -RADIUS_EPSILON {
        return Err(RenderError::WheelOverlap {
            message: format!(
                "explicit ring widths total {} but the wheel span is only {}",
                explicit_total, span
            ),
        });
    }
    let auto_width = if auto_count > 0 {
        if remaining <= RADIUS_EPSILON {
            return Err(RenderError::WheelOverlap {
                message: format!("no radius left for {} rings without a width", auto_count),
            });
        }
        remaining / auto_count as f64
    } else {
        0.0
    };

    let mut cursor = radius.inner;
    let mut laid_out = Vec::with_capacity(rings.len());
    for ring in rings {
        let width = ring.width.unwrap_or(auto_width);
        let mut end = cursor + width;
        if (end - radius.outer).abs() <= RADIUS_EPSILON {
            end = radius.outer;
        }
        log::trace!("Ring '{}' -> [{}, {}]", ring.key, cursor, end);

        laid_out.push(RingDefinition {
            key: ring.key.clone(),
            kind: ring.kind,
            label: ring
                .label
                .clone()
                .unwrap_or_else(|| ring.kind.default_label().to_string()),
            radius_start: cursor,
            radius_end: end,
            segment_count: ring
                .segment_count
                .unwrap_or_else(|| ring.kind.default_segment_count()),
        });
        cursor = end;
    }

    Ok(laid_out)
}

fn validate_radius(radius: &WheelRadius) -> Result<()> {
    if !(radius.inner.is_finite() && radius.outer.is_finite()) || radius.inner < 0.0 {
        return Err(RenderError::WheelOverlap {
            message: format!("invalid wheel radius [{}, {}]", radius.inner, radius.outer),
        });
    }
    if radius.inner >= radius.outer {
        return Err(RenderError::WheelOverlap {
            message: format!(
                "inner radius {} must be less than outer radius {}",
                radius.inner, radius.outer
            ),
        });
    }
    Ok(())
}

/// Check ring ordering and containment for a wheel.
///
/// Every ring must have start < end, rings must ascend strictly by start
/// without overlapping, and all spans must lie within the wheel radius.
pub fn validate_wheel(wheel: &WheelDefinition) -> Result<()> {
    validate_radius(&wheel.radius)?;
    let WheelRadius { inner, outer } = wheel.radius;

    let mut previous: Option<&RingDefinition> = None;
    for ring in &wheel.rings {
        if !(ring.radius_start < ring.radius_end) {
            return Err(RenderError::WheelOverlap {
                message: format!(
                    "ring '{}' has empty span [{}, {}]",
                    ring.key, ring.radius_start, ring.radius_end
                ),
            });
        }
        if ring.radius_start < inner - RADIUS_EPSILON || ring.radius_end > outer + RADIUS_EPSILON {
            return Err(RenderError::WheelOverlap {
                message: format!(
                    "ring '{}' [{}, {}] lies outside wheel [{}, {}]",
                    ring.key, ring.radius_start, ring.radius_end, inner, outer
                ),
            });
        }
        if let Some(prev) = previous {
            if ring.radius_start <= prev.radius_start
                || ring.radius_start < prev.radius_end - RADIUS_EPSILON
            {
                return Err(RenderError::WheelOverlap {
                    message: format!(
                        "ring '{}' [{}, {}] overlaps ring '{}' [{}, {}]",
                        ring.key,
                        ring.radius_start,
                        ring.radius_end,
                        prev.key,
                        prev.radius_start,
                        prev.radius_end
                    ),
                });
            }
        }
        previous = Some(ring);
    }

    Ok(())
}
