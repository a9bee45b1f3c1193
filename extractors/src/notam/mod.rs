mod rules;
pub mod timestamp;

pub use rules::{FieldRule, ValueTransform};
pub use timestamp::{normalize, normalize_with, parse_compact, CenturyRule, CANONICAL_FORMAT};

use rules::create_notam_rules;
use shared_types::{Extractor, FieldMapping, FieldOutcome, NotamField};

#[derive(Debug, Clone, Default)]
pub struct NotamExtractorConfig {
    pub century: CenturyRule,
}

/// Pattern-based extractor for single NOTAM text blocks.
///
/// Each field rule runs against the full input on its own, so rules neither
/// depend on marker order nor on each other succeeding.
pub struct NotamExtractor {
    config: NotamExtractorConfig,
    rules: Vec<FieldRule>,
}

impl NotamExtractor {
    pub fn new(config: NotamExtractorConfig) -> Self {
        Self {
            config,
            rules: create_notam_rules(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(NotamExtractorConfig::default())
    }

    /// Per-field outcomes in rule order, for diagnostics
    pub fn outcomes(&self, text: &str) -> Vec<(NotamField, FieldOutcome)> {
        self.rules
            .iter()
            .map(|rule| (rule.field, rule.apply(text, self.config.century)))
            .collect()
    }
}

impl Default for NotamExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Extractor for NotamExtractor {
    fn extract(&self, text: &str) -> FieldMapping {
        let mut mapping = FieldMapping::new();

        for (field, outcome) in self.outcomes(text) {
            match &outcome {
                FieldOutcome::Found(_) => {}
                FieldOutcome::Missing => {
                    tracing::debug!(field = field.key(), "field not present, keeping default");
                }
                FieldOutcome::Invalid { raw, reason } => {
                    tracing::warn!(
                        field = field.key(),
                        raw = %raw,
                        "ignoring unparseable value: {}",
                        reason
                    );
                }
            }
            mapping.apply(field, outcome);
        }

        mapping
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
