use serde::{Deserialize, Serialize};

/// Ring type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingKind {
    Signs,
    Houses,
    Planets,
    Aspects,
    Degrees,
}

impl RingKind {
    pub const ALL: [RingKind; 5] = [
        RingKind::Signs,
        RingKind::Houses,
        RingKind::Planets,
        RingKind::Aspects,
        RingKind::Degrees,
    ];

    /// Segment count used when a ring does not set one
    pub fn default_segment_count(self) -> u32 {
        match self {
            RingKind::Signs | RingKind::Houses => 12,
            RingKind::Degrees => 360,
            RingKind::Planets | RingKind::Aspects => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RingKind::Signs => "signs",
            RingKind::Houses => "houses",
            RingKind::Planets => "planets",
            RingKind::Aspects => "aspects",
            RingKind::Degrees => "degrees",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            RingKind::Signs => "Zodiac Signs",
            RingKind::Houses => "Houses",
            RingKind::Planets => "Planets",
            RingKind::Aspects => "Aspects",
            RingKind::Degrees => "Degrees",
        }
    }
}

/// Inner and outer radius of a wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelRadius {
    pub inner: f64,
    pub outer: f64,
}

impl Default for WheelRadius {
    fn default() -> Self {
        Self {
            inner: 0.0,
            outer: 1.0,
        }
    }
}

/// A ring as declared by a template, before radius layout.
///
/// Rings without a width share the radius left over by rings that have one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingTemplate {
    pub key: String,
    pub kind: RingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_count: Option<u32>,
}

impl RingTemplate {
    pub fn new(key: impl Into<String>, kind: RingKind) -> Self {
        Self {
            key: key.into(),
            kind,
            label: None,
            width: None,
            segment_count: None,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_segments(mut self, segment_count: u32) -> Self {
        self.segment_count = Some(segment_count);
        self
    }
}

/// Per-chart change to one ring, matched by key. Unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingOverride {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RingKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_count: Option<u32>,
}

impl RingOverride {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: RingKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn segments(mut self, segment_count: u32) -> Self {
        self.segment_count = Some(segment_count);
        self
    }
}

/// Stored wheel record: radius bounds and the base ring template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub radius: WheelRadius,
    #[serde(default)]
    pub rings: Vec<RingTemplate>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// A laid-out ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingDefinition {
    pub key: String,
    pub kind: RingKind,
    pub label: String,
    pub radius_start: f64,
    pub radius_end: f64,
    pub segment_count: u32,
}

/// Concrete wheel geometry. Rings ascend by radius, do not overlap and
/// stay within `radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelDefinition {
    pub id: String,
    pub name: String,
    pub radius: WheelRadius,
    pub rings: Vec<RingDefinition>,
}
