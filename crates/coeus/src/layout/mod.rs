pub mod assembler;
pub mod defaults;
pub mod loader;
pub mod merge;
pub mod types;

pub use assembler::{validate_wheel, WheelAssembler};
pub use defaults::SYSTEM_DEFAULT_WHEEL_ID;
pub use loader::{load_wheel_template_from_json, WheelDefinitionError};
pub use merge::{merge_ring, merge_rings};
pub use types::{
    RingDefinition, RingKind, RingOverride, RingTemplate, WheelDefinition, WheelRadius,
    WheelTemplate,
};
