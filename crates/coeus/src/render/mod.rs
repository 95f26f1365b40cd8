pub mod assembler;
pub mod types;

pub use assembler::RenderAssembler;
pub use types::RenderResponse;
