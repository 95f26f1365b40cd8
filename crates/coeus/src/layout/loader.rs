use crate::layout::types::{RingKind, WheelTemplate};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur when loading wheel templates
#[derive(Error, Debug)]
pub enum WheelDefinitionError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

lazy_static::lazy_static! {
    static ref VERSION_RE: regex::Regex =
        regex::Regex::new(r"^\d+\.\d+\.\d+$").expect("version pattern is valid");
}

/// Load a wheel template from JSON string
pub fn load_wheel_template_from_json(json: &str) -> Result<WheelTemplate, WheelDefinitionError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| WheelDefinitionError::InvalidJson(e.to_string()))?;

    validate_wheel_template(&parsed)?;

    serde_json::from_value(parsed).map_err(|e| WheelDefinitionError::ValidationError(e.to_string()))
}

fn non_empty_string(obj: &Map<String, Value>, field: &str, path: &str) -> Result<(), WheelDefinitionError> {
    match obj.get(field) {
        None => Err(WheelDefinitionError::MissingField(path.to_string())),
        Some(Value::String(s)) if !s.is_empty() => Ok(()),
        Some(_) => Err(WheelDefinitionError::InvalidFieldValue(format!(
            "{} must be a non-empty string",
            path
        ))),
    }
}

fn optional_string(obj: &Map<String, Value>, field: &str, path: &str) -> Result<(), WheelDefinitionError> {
    match obj.get(field) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(WheelDefinitionError::InvalidFieldValue(format!(
            "{} must be a string",
            path
        ))),
    }
}

/// Validate a wheel template
fn validate_wheel_template(definition: &Value) -> Result<(), WheelDefinitionError> {
    let Some(obj) = definition.as_object() else {
        return Err(WheelDefinitionError::ValidationError(
            "Wheel template must be an object".to_string(),
        ));
    };

    non_empty_string(obj, "id", "id")?;
    non_empty_string(obj, "name", "name")?;
    optional_string(obj, "description", "description")?;
    optional_string(obj, "author", "author")?;

    if let Some(radius) = obj.get("radius") {
        validate_radius(radius)?;
    }

    if let Some(rings) = obj.get("rings") {
        let Some(rings_array) = rings.as_array() else {
            return Err(WheelDefinitionError::InvalidFieldValue(
                "rings must be an array".to_string(),
            ));
        };
        let mut keys = HashSet::new();
        for (index, ring) in rings_array.iter().enumerate() {
            validate_ring_template(ring, index)?;
            if let Some(key) = ring.get("key").and_then(Value::as_str) {
                if !keys.insert(key) {
                    return Err(WheelDefinitionError::InvalidFieldValue(format!(
                        "rings[{}].key '{}' is used by more than one ring",
                        index, key
                    )));
                }
            }
        }
    }

    if let Some(version) = obj.get("version") {
        match version {
            Value::Null => {}
            Value::String(version_str) => {
                // Validate version format (semver-like: major.minor.patch)
                if !VERSION_RE.is_match(version_str) {
                    return Err(WheelDefinitionError::InvalidFieldValue(format!(
                        "version must be in format major.minor.patch (e.g., \"1.0.0\"), got: {}",
                        version_str
                    )));
                }
            }
            _ => {
                return Err(WheelDefinitionError::InvalidFieldValue(
                    "version must be a string".to_string(),
                ))
            }
        }
    }

    if let Some(tags) = obj.get("tags") {
        match tags {
            Value::Null => {}
            Value::Array(items) if items.iter().all(Value::is_string) => {}
            _ => {
                return Err(WheelDefinitionError::InvalidFieldValue(
                    "tags must be an array of strings".to_string(),
                ))
            }
        }
    }

    Ok(())
}

fn validate_radius(radius: &Value) -> Result<(), WheelDefinitionError> {
    let Some(radius_obj) = radius.as_object() else {
        return Err(WheelDefinitionError::InvalidFieldValue(
            "radius must be an object".to_string(),
        ));
    };

    let mut bounds = [0.0; 2];
    for (slot, field) in bounds.iter_mut().zip(["inner", "outer"]) {
        let value = radius_obj
            .get(field)
            .ok_or_else(|| WheelDefinitionError::MissingField(format!("radius.{}", field)))?;
        *slot = value.as_f64().ok_or_else(|| {
            WheelDefinitionError::InvalidFieldValue(format!("radius.{} must be a number", field))
        })?;
    }

    let [inner, outer] = bounds;
    if inner < 0.0 {
        return Err(WheelDefinitionError::InvalidFieldValue(
            "radius.inner must not be negative".to_string(),
        ));
    }
    if inner >= outer {
        return Err(WheelDefinitionError::InvalidFieldValue(
            "radius.inner must be less than radius.outer".to_string(),
        ));
    }
    Ok(())
}

/// Validate a ring template
fn validate_ring_template(ring: &Value, index: usize) -> Result<(), WheelDefinitionError> {
    let Some(ring_obj) = ring.as_object() else {
        return Err(WheelDefinitionError::InvalidFieldValue(format!(
            "Ring at index {} must be an object",
            index
        )));
    };

    non_empty_string(ring_obj, "key", &format!("rings[{}].key", index))?;
    optional_string(ring_obj, "label", &format!("rings[{}].label", index))?;

    match ring_obj.get("kind") {
        None => {
            return Err(WheelDefinitionError::MissingField(format!(
                "rings[{}].kind",
                index
            )))
        }
        Some(kind) => {
            let valid = kind
                .as_str()
                .map(|k| RingKind::ALL.iter().any(|rk| rk.as_str() == k))
                .unwrap_or(false);
            if !valid {
                let names: Vec<&str> = RingKind::ALL.iter().map(|rk| rk.as_str()).collect();
                return Err(WheelDefinitionError::InvalidFieldValue(format!(
                    "rings[{}].kind must be one of: {}",
                    index,
                    names.join(", ")
                )));
            }
        }
    }

    if let Some(width) = ring_obj.get("width") {
        if !width.is_null() {
            let positive = width.as_f64().map(|w| w > 0.0).unwrap_or(false);
            if !positive {
                return Err(WheelDefinitionError::InvalidFieldValue(format!(
                    "rings[{}].width must be a positive number",
                    index
                )));
            }
        }
    }

    if let Some(segments) = ring_obj.get("segmentCount") {
        if !segments.is_null() && segments.as_u64().map_or(true, |s| s > u32::MAX as u64) {
            return Err(WheelDefinitionError::InvalidFieldValue(format!(
                "rings[{}].segmentCount must be a non-negative integer",
                index
            )));
        }
    }

    Ok(())
}
