use thiserror::Error;

/// Errors raised by the render-assembly pipeline.
///
/// All of these are validation failures on caller-supplied data; none are
/// transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid ephemeris data for {object_id}: {message}")]
    InvalidEphemerisData { object_id: String, message: String },
    #[error("Unknown aspect definition: {name}")]
    UnknownAspectDefinition { name: String },
    #[error("Duplicate object id {object_id} in layer {layer_id}")]
    DuplicateObjectId { layer_id: String, object_id: String },
    #[error("Wheel geometry invalid: {message}")]
    WheelOverlap { message: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
