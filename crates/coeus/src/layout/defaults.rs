use crate::layout::types::{RingKind, RingTemplate, WheelRadius, WheelTemplate};

pub const SYSTEM_DEFAULT_WHEEL_ID: &str = "system-default";

impl WheelTemplate {
    /// Built-in wheel: aspect lines in the middle, then planets, houses,
    /// signs and a degree ruler on the rim.
    pub fn system_default() -> Self {
        Self {
            id: SYSTEM_DEFAULT_WHEEL_ID.to_string(),
            name: "Default Wheel".to_string(),
            description: Some("Standard natal wheel".to_string()),
            radius: WheelRadius::default(),
            rings: vec![
                RingTemplate::new("ring_aspects", RingKind::Aspects),
                RingTemplate::new("ring_planets", RingKind::Planets),
                RingTemplate::new("ring_houses", RingKind::Houses).with_width(0.1),
                RingTemplate::new("ring_signs", RingKind::Signs).with_width(0.15),
                RingTemplate::new("ring_degrees", RingKind::Degrees).with_width(0.05),
            ],
            version: Some("1.0.0".to_string()),
            author: None,
            tags: None,
        }
    }

    /// Template carrying only identity and radius; rings come from overrides
    pub fn empty(id: impl Into<String>, name: impl Into<String>, inner: f64, outer: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            radius: WheelRadius { inner, outer },
            rings: Vec::new(),
            version: None,
            author: None,
            tags: None,
        }
    }
}
