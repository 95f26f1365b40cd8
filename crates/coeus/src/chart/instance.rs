use crate::chart::settings::SettingsOverride;
use crate::ephemeris::types::{LayerKind, RawLayerPositions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How one layer of an instance is sourced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    pub kind: LayerKind,
    #[serde(default)]
    pub subject_id: Option<String>,
    /// e.g. "birth", "now"
    #[serde(default)]
    pub date_time_source: Option<String>,
}

/// Chart instance as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInstanceRecord {
    pub id: String,
    pub chart_id: String,
    #[serde(default)]
    pub owner_user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub wheel_id: Option<String>,
    #[serde(default)]
    pub layer_config: BTreeMap<String, LayerConfig>,
    #[serde(default)]
    pub settings_override: SettingsOverride,
}

impl ChartInstanceRecord {
    /// Kind configured for a layer; unconfigured layers are custom
    pub fn layer_kind(&self, layer_id: &str) -> LayerKind {
        self.layer_config
            .get(layer_id)
            .map(|c| c.kind)
            .unwrap_or(LayerKind::Custom)
    }
}

/// Instance summary returned with a render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInstanceSummary {
    pub id: String,
    pub chart_definition_id: String,
    pub title: String,
    pub owner_user_id: Option<String>,
    /// Distinct subject ids across layers, sorted
    pub subjects: Vec<String>,
    pub effective_date_times: BTreeMap<String, DateTime<Utc>>,
}

impl ChartInstanceSummary {
    pub fn from_record(
        record: &ChartInstanceRecord,
        raw_layers: &BTreeMap<String, RawLayerPositions>,
    ) -> Self {
        let mut subjects: Vec<String> = record
            .layer_config
            .values()
            .filter_map(|c| c.subject_id.clone())
            .collect();
        subjects.sort();
        subjects.dedup();

        let effective_date_times = raw_layers
            .iter()
            .filter_map(|(layer_id, raw)| raw.date_time.map(|dt| (layer_id.clone(), dt)))
            .collect();

        Self {
            id: record.id.clone(),
            chart_definition_id: record.chart_id.clone(),
            title: record.title.clone(),
            owner_user_id: record.owner_user_id.clone(),
            subjects,
            effective_date_times,
        }
    }
}
