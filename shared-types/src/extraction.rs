use crate::notam::FieldMapping;

/// Core trait that all NOTAM extractors must implement
pub trait Extractor {
    /// Extract every schema field from raw notice text.
    ///
    /// Never fails: fields that cannot be located keep their defaults.
    fn extract(&self, text: &str) -> FieldMapping;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid timestamp '{raw}': {reason}")]
    InvalidTimestamp { raw: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
