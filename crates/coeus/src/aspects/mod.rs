pub mod matcher;
pub mod types;

pub use matcher::{aspect_set_key, AspectMatcher};
pub use types::{
    AspectCatalog, AspectDefinition, AspectObjectRef, AspectPair, AspectSet, AspectSetKind,
    OrbSettings,
};
