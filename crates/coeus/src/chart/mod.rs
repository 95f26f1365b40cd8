pub mod instance;
pub mod settings;

pub use instance::{ChartInstanceRecord, ChartInstanceSummary, LayerConfig};
pub use settings::{default_orb_settings, EffectiveSettings, LayerCombination, SettingsOverride};
