use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Value stored for any field the notice did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Surface-level lower limit, the fixed default for `Surface`
pub const SURFACE_LEVEL: &str = "SFC";

const FIELD_COUNT: usize = 9;

/// Fields read from a single NOTAM, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotamField {
    Location,
    Activity,
    OperationalArea,
    StartTime,
    EndTime,
    Surface,
    Altitude,
    CreatedTime,
    Source,
}

impl NotamField {
    /// The complete schema, in declaration order
    pub const ALL: [NotamField; FIELD_COUNT] = [
        NotamField::Location,
        NotamField::Activity,
        NotamField::OperationalArea,
        NotamField::StartTime,
        NotamField::EndTime,
        NotamField::Surface,
        NotamField::Altitude,
        NotamField::CreatedTime,
        NotamField::Source,
    ];

    pub fn key(self) -> &'static str {
        match self {
            NotamField::Location => "Location",
            NotamField::Activity => "Activity",
            NotamField::OperationalArea => "Operational Area",
            NotamField::StartTime => "Start Time",
            NotamField::EndTime => "End Time",
            NotamField::Surface => "Surface",
            NotamField::Altitude => "Altitude",
            NotamField::CreatedTime => "Created Time",
            NotamField::Source => "Source",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            NotamField::Surface => SURFACE_LEVEL,
            _ => NOT_AVAILABLE,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of one independent field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Found(String),
    /// Marker or token not present in the notice
    Missing,
    /// Token present but rejected during normalization
    Invalid { raw: String, reason: String },
}

impl FieldOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, FieldOutcome::Found(_))
    }
}

/// Ordered field values for one parsed notice.
///
/// Every field of [`NotamField::ALL`] always holds a value: either what was
/// extracted or the field's default. Values are only ever replaced by a
/// successful extraction, never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    values: [String; FIELD_COUNT],
}

impl FieldMapping {
    pub fn new() -> Self {
        Self {
            values: NotamField::ALL.map(|field| field.default_value().to_string()),
        }
    }

    pub fn get(&self, field: NotamField) -> &str {
        &self.values[field.index()]
    }

    pub fn apply(&mut self, field: NotamField, outcome: FieldOutcome) {
        if let FieldOutcome::Found(value) = outcome {
            self.values[field.index()] = value;
        }
    }

    pub fn is_default(&self, field: NotamField) -> bool {
        self.get(field) == field.default_value()
    }

    /// Number of fields holding something other than their default
    pub fn extracted_count(&self) -> usize {
        NotamField::ALL
            .iter()
            .filter(|field| !self.is_default(**field))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NotamField, &str)> + '_ {
        NotamField::ALL
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mapping_holds_defaults() {
        let mapping = FieldMapping::new();

        assert_eq!(mapping.iter().count(), 9);
        assert_eq!(mapping.get(NotamField::Surface), "SFC");
        assert_eq!(mapping.get(NotamField::Location), "N/A");
        assert_eq!(mapping.extracted_count(), 0);
    }

    #[test]
    fn test_apply_only_overwrites_on_found() {
        let mut mapping = FieldMapping::new();

        mapping.apply(NotamField::Source, FieldOutcome::Found("FAA".to_string()));
        mapping.apply(NotamField::Source, FieldOutcome::Missing);
        mapping.apply(
            NotamField::Source,
            FieldOutcome::Invalid {
                raw: "??".to_string(),
                reason: "bad".to_string(),
            },
        );

        assert_eq!(mapping.get(NotamField::Source), "FAA");
        assert_eq!(mapping.extracted_count(), 1);
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let keys: Vec<&str> = FieldMapping::new().iter().map(|(f, _)| f.key()).collect();

        assert_eq!(
            keys,
            vec![
                "Location",
                "Activity",
                "Operational Area",
                "Start Time",
                "End Time",
                "Surface",
                "Altitude",
                "Created Time",
                "Source",
            ]
        );
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut mapping = FieldMapping::new();
        mapping.apply(NotamField::Location, FieldOutcome::Found("KXYZ".to_string()));

        let json = serde_json::to_string(&mapping).unwrap();

        assert!(json.starts_with(r#"{"Location":"KXYZ","Activity":"N/A","Operational Area":"N/A""#));
        assert!(json.ends_with(r#""Source":"N/A"}"#));
    }
}
