//! Request row cleansing.

use crate::config::{MISSING, NA_MARKERS};
use crate::models::{InputRecord, RawRecord};

/// Normalize one request row.
///
/// The four script-driving fields lose all whitespace and are upper-cased.
/// Absent, blank, or NA-marker values become [`MISSING`]. The display name is
/// only trimmed, and extra columns pass through trimmed.
pub fn normalize_record(raw: &RawRecord) -> InputRecord {
    InputRecord {
        display_name: passthrough(raw.display_name.as_deref()),
        user_id: normalize_field(raw.user_id.as_deref()),
        target_database: normalize_field(raw.target_database.as_deref()),
        target_schema_expr: normalize_field(raw.target_schema_expr.as_deref()),
        authority_expr: normalize_field(raw.authority_expr.as_deref()),
        extra: raw.extra.iter().map(|v| passthrough(v.as_deref())).collect(),
    }
}

/// Strip whitespace and upper-case `value`, or return the sentinel.
pub fn normalize_field(value: Option<&str>) -> String {
    match value.filter(|v| !is_absent(v)) {
        Some(v) => {
            let compact: String = v.chars().filter(|c| !c.is_whitespace()).collect();
            compact.to_uppercase()
        }
        None => MISSING.to_string(),
    }
}

/// True for values that count as "no data".
pub fn is_absent(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || NA_MARKERS.contains(&trimmed)
}

fn passthrough(value: Option<&str>) -> String {
    value
        .filter(|v| !is_absent(v))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(user_id: Option<&str>, db: Option<&str>, schema: Option<&str>, auth: Option<&str>) -> RawRecord {
        RawRecord {
            display_name: Some(" Kim ".to_string()),
            user_id: user_id.map(str::to_string),
            target_database: db.map(str::to_string),
            target_schema_expr: schema.map(str::to_string),
            authority_expr: auth.map(str::to_string),
            extra: vec![Some(" note ".to_string()), None],
        }
    }

    #[test]
    fn strips_internal_whitespace_and_uppercases() {
        let record = normalize_record(&raw(
            Some(" p 123 "),
            Some("ssp ord"),
            Some("sch1 / sch2"),
            Some("c / r"),
        ));
        assert_eq!(record.user_id, "P123");
        assert_eq!(record.target_database, "SSPORD");
        assert_eq!(record.target_schema_expr, "SCH1/SCH2");
        assert_eq!(record.authority_expr, "C/R");
        assert_eq!(record.display_name, "Kim");
        assert_eq!(record.extra, vec!["note".to_string(), String::new()]);
    }

    #[test]
    fn absent_fields_become_missing() {
        let record = normalize_record(&raw(None, None, Some("   "), Some("#N/A")));
        assert_eq!(record.user_id, MISSING);
        assert_eq!(record.target_database, MISSING);
        assert_eq!(record.target_schema_expr, MISSING);
        assert_eq!(record.authority_expr, MISSING);
    }

    #[test]
    fn tabs_and_newlines_are_stripped() {
        assert_eq!(normalize_field(Some("a\tb\nc")), "ABC");
    }

    #[test]
    fn wildcard_hangul_survives_uppercasing() {
        assert_eq!(normalize_field(Some(" 전체 ")), "전체");
    }

    #[test]
    fn missing_display_name_renders_empty() {
        let mut input = raw(Some("1"), None, None, None);
        input.display_name = None;
        assert_eq!(normalize_record(&input).display_name, "");
    }
}
