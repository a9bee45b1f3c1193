use crate::notam::timestamp::{normalize_with, CenturyRule};
use regex::Regex;
use shared_types::{FieldOutcome, NotamField};

/// Post-processing applied to a captured value before it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    Verbatim,
    Trimmed,
    CompactTimestamp,
}

/// A single field rule: one marker pattern, one capture group
pub struct FieldRule {
    pub field: NotamField,
    pub regex: Regex,
    pub value_group: usize,
    pub transform: ValueTransform,
}

impl FieldRule {
    /// Run this rule against the complete notice text
    pub fn apply(&self, text: &str, century: CenturyRule) -> FieldOutcome {
        let Some(raw) = self
            .regex
            .captures(text)
            .and_then(|caps| caps.get(self.value_group))
            .map(|m| m.as_str())
        else {
            return FieldOutcome::Missing;
        };

        let value = match self.transform {
            ValueTransform::Verbatim => raw,
            ValueTransform::Trimmed => raw.trim(),
            ValueTransform::CompactTimestamp => {
                return match normalize_with(raw, century) {
                    Ok(normalized) => FieldOutcome::Found(normalized),
                    Err(e) => FieldOutcome::Invalid {
                        raw: raw.to_string(),
                        reason: e.to_string(),
                    },
                };
            }
        };

        if value.is_empty() {
            FieldOutcome::Missing
        } else {
            FieldOutcome::Found(value.to_string())
        }
    }
}

fn rule(field: NotamField, pattern: &str, transform: ValueTransform) -> FieldRule {
    FieldRule {
        field,
        regex: Regex::new(pattern).expect("NOTAM field patterns are valid regexes"),
        value_group: 1,
        transform,
    }
}

/// Rules for every extracted field. `Surface` has no rule and keeps its default.
pub(crate) fn create_notam_rules() -> Vec<FieldRule> {
    vec![
        rule(NotamField::Location, r"Q\) (\w+)", ValueTransform::Verbatim),
        // Free text up to the F) marker, possibly over several lines
        rule(
            NotamField::Activity,
            r"(?s)E\) (.*?)(?:F\)|\z)",
            ValueTransform::Trimmed,
        ),
        rule(
            NotamField::OperationalArea,
            r"Q\) \w+/(\w+)",
            ValueTransform::Verbatim,
        ),
        // Whole digit run, so a token of the wrong length fails normalization
        rule(
            NotamField::StartTime,
            r"B\) ([0-9]+)",
            ValueTransform::CompactTimestamp,
        ),
        rule(
            NotamField::EndTime,
            r"C\) ([0-9]+)",
            ValueTransform::CompactTimestamp,
        ),
        rule(NotamField::Altitude, r"G\) ([0-9]+)FT", ValueTransform::Verbatim),
        rule(
            NotamField::CreatedTime,
            r"CREATED: (.*?) SOURCE:",
            ValueTransform::Verbatim,
        ),
        rule(NotamField::Source, r"SOURCE: (\w+)", ValueTransform::Verbatim),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(field: NotamField) -> FieldRule {
        create_notam_rules()
            .into_iter()
            .find(|r| r.field == field)
            .unwrap()
    }

    #[test]
    fn test_every_field_except_surface_has_a_rule() {
        let rules = create_notam_rules();

        for field in NotamField::ALL {
            let count = rules.iter().filter(|r| r.field == field).count();
            let expected = if field == NotamField::Surface { 0 } else { 1 };
            assert_eq!(count, expected, "rule count for {:?}", field);
        }
    }

    #[test]
    fn test_activity_stops_at_f_marker() {
        let outcome = rule_for(NotamField::Activity)
            .apply("E)   TWY A CLSD  F) SFC", CenturyRule::default());

        assert_eq!(outcome, FieldOutcome::Found("TWY A CLSD".to_string()));
    }

    #[test]
    fn test_activity_runs_to_end_without_f_marker() {
        let outcome = rule_for(NotamField::Activity)
            .apply("E) OBST CRANE ERECTED\n", CenturyRule::default());

        assert_eq!(outcome, FieldOutcome::Found("OBST CRANE ERECTED".to_string()));
    }

    #[test]
    fn test_blank_activity_is_missing() {
        let outcome = rule_for(NotamField::Activity).apply("E)    F) SFC", CenturyRule::default());

        assert_eq!(outcome, FieldOutcome::Missing);
    }

    #[test]
    fn test_bad_timestamp_is_invalid() {
        let outcome = rule_for(NotamField::StartTime).apply("B) 9913159999", CenturyRule::default());

        match outcome {
            FieldOutcome::Invalid { raw, .. } => assert_eq!(raw, "9913159999"),
            other => panic!("Expected Invalid outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_altitude_requires_ft_suffix() {
        let altitude = rule_for(NotamField::Altitude);

        assert_eq!(
            altitude.apply("G) 5000FT AMSL", CenturyRule::default()),
            FieldOutcome::Found("5000".to_string())
        );
        assert_eq!(
            altitude.apply("G) FL120", CenturyRule::default()),
            FieldOutcome::Missing
        );
    }

    #[test]
    fn test_created_time_does_not_cross_lines() {
        let created = rule_for(NotamField::CreatedTime);

        assert_eq!(
            created.apply("CREATED: 01 JAN 24\n SOURCE: FAA", CenturyRule::default()),
            FieldOutcome::Missing
        );
    }
}
