//! Human-readable rendering of an extracted [`FieldMapping`].

use shared_types::FieldMapping;

pub const HEADER: &str = "NOTAM Translation:";

/// Render the header plus one `Key: value` line per field, each newline-terminated
pub fn format(fields: &FieldMapping) -> String {
    let mut message = format!("{}\n", HEADER);
    for (field, value) in fields.iter() {
        message.push_str(&format!("{}: {}\n", display_key(field.key()), value));
    }
    message
}

/// Pretty-printed JSON object keyed by canonical field key
pub fn format_json(fields: &FieldMapping) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(fields)
}

/// Turn a canonical key into a label: underscores become spaces, words are title-cased
pub fn display_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut in_word = false;

    for c in key.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            label.push(c);
            in_word = false;
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{FieldOutcome, NotamField};

    #[test]
    fn test_format_defaults() {
        let output = format(&FieldMapping::new());

        let expected = "NOTAM Translation:\n\
                        Location: N/A\n\
                        Activity: N/A\n\
                        Operational Area: N/A\n\
                        Start Time: N/A\n\
                        End Time: N/A\n\
                        Surface: SFC\n\
                        Altitude: N/A\n\
                        Created Time: N/A\n\
                        Source: N/A\n";
        assert_eq!(output, expected);
        assert_eq!(output.lines().count(), 10);
    }

    #[test]
    fn test_format_extracted_values() {
        let mut mapping = FieldMapping::new();
        mapping.apply(NotamField::Location, FieldOutcome::Found("KXYZ".to_string()));
        mapping.apply(
            NotamField::StartTime,
            FieldOutcome::Found("2024-01-01 08:00 UTC".to_string()),
        );

        let output = format(&mapping);

        assert!(output.contains("\nLocation: KXYZ\n"));
        assert!(output.contains("\nStart Time: 2024-01-01 08:00 UTC\n"));
        assert!(output.ends_with("Source: N/A\n"));
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("Operational Area"), "Operational Area");
        assert_eq!(display_key("created_time"), "Created Time");
        assert_eq!(display_key("START TIME"), "Start Time");
        assert_eq!(display_key("flight_level2x"), "Flight Level2X");
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&FieldMapping::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["Surface"], "SFC");
        assert_eq!(value["Created Time"], "N/A");
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
}
