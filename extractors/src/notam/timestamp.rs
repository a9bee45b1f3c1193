use chrono::{NaiveDate, NaiveDateTime};
use shared_types::ExtractionError;

/// Display format for normalized B) / C) times
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

const COMPACT_LEN: usize = 10;

/// How a two-digit NOTAM year is placed in a century
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenturyRule {
    /// Years below the pivot land in 20xx, the rest in 19xx
    Pivot(u8),
    /// Every year lands in 20xx
    TwentyFirst,
}

impl CenturyRule {
    pub const DEFAULT_PIVOT: u8 = 69;

    pub fn validate(self) -> Result<Self, ExtractionError> {
        match self {
            CenturyRule::Pivot(pivot) if pivot > 100 => Err(ExtractionError::ConfigError(format!(
                "century pivot must be between 0 and 100, got {pivot}"
            ))),
            rule => Ok(rule),
        }
    }

    pub fn resolve(self, two_digit_year: u32) -> i32 {
        let yy = two_digit_year as i32;
        match self {
            CenturyRule::Pivot(pivot) if two_digit_year >= u32::from(pivot) => 1900 + yy,
            _ => 2000 + yy,
        }
    }
}

impl Default for CenturyRule {
    fn default() -> Self {
        CenturyRule::Pivot(Self::DEFAULT_PIVOT)
    }
}

/// Parse a `YYMMDDhhmm` token into a calendar date-time
pub fn parse_compact(raw: &str, rule: CenturyRule) -> Result<NaiveDateTime, ExtractionError> {
    let invalid = |reason: &str| ExtractionError::InvalidTimestamp {
        raw: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.len() != COMPACT_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected exactly 10 digits (YYMMDDhhmm)"));
    }

    let pair = |at: usize| -> u32 {
        raw[at..at + 2]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };

    let year = rule.resolve(pair(0));
    let date = NaiveDate::from_ymd_opt(year, pair(2), pair(4))
        .ok_or_else(|| invalid("not a calendar date"))?;

    date.and_hms_opt(pair(6), pair(8), 0)
        .ok_or_else(|| invalid("not a valid time of day"))
}

/// Normalize a compact timestamp using the default century rule
pub fn normalize(raw: &str) -> Result<String, ExtractionError> {
    normalize_with(raw, CenturyRule::default())
}

pub fn normalize_with(raw: &str, rule: CenturyRule) -> Result<String, ExtractionError> {
    Ok(parse_compact(raw, rule)?.format(CANONICAL_FORMAT).to_string())
}
