pub mod extraction;
pub mod notam;

pub use notam::{FieldMapping, FieldOutcome, NotamField, NOT_AVAILABLE, SURFACE_LEVEL};

// Re-export extraction types
pub use extraction::*;
