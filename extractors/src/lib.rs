//! Extractors Crate
//!
//! This crate turns raw NOTAM text into a fixed-schema [`shared_types::FieldMapping`]
//! and renders that mapping for people or machines.
//!
//! # Architecture
//!
//! - **Types**: The field schema, mapping and `Extractor` trait live in the `shared-types` crate
//! - **Implementations**: The pattern-based extractor and the formatter are implemented here
//!
//! # Example
//!
//! ```rust
//! use extractors::{translation, NotamExtractor};
//! use shared_types::Extractor;
//!
//! let extractor = NotamExtractor::with_defaults();
//! let fields = extractor.extract("Q) KXYZ/ABC E) RUNWAY CLOSED F) G) 1000FT");
//! assert!(translation::format(&fields).contains("Location: KXYZ"));
//! ```

pub mod notam;
pub mod translation;

// Re-export commonly used types
pub use notam::{CenturyRule, NotamExtractor, NotamExtractorConfig};

// Re-export the Extractor trait from shared-types for convenience
pub use shared_types::Extractor;
