//! Tolerant decoding of notation batches.
//!
//! A bad record never poisons the batch: it is logged and skipped.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, warn};

use crate::event::{WorkoutEvent, WorkoutNotation};

/// Decode a notation list response body.
///
/// An empty body, invalid JSON, or a root that is not an array yields an
/// empty list. Array elements that are not notation objects are skipped.
pub fn decode_notations(body: &str) -> Vec<WorkoutNotation> {
    if body.trim().is_empty() {
        error!("empty notation response body");
        return Vec::new();
    }

    let root: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "notation response is not valid JSON");
            return Vec::new();
        }
    };

    let items = match root {
        Value::Array(items) => items,
        other => {
            error!(kind = json_kind(&other), "expected a JSON array of notations");
            return Vec::new();
        }
    };

    let total = items.len();
    let notations: Vec<WorkoutNotation> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(n) => Some(n),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed notation record");
                None
            }
        })
        .collect();

    debug!(total, kept = notations.len(), "decoded notation batch");
    notations
}

/// Parse every notation, dropping the ones whose timestamp cannot be read.
pub fn events_from_notations(notations: &[WorkoutNotation]) -> Vec<WorkoutEvent> {
    notations
        .iter()
        .filter_map(|n| match n.to_event() {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(timestamp = %n.timestamp, error = %e, "discarding unparseable notation");
                None
            }
        })
        .collect()
}

/// Read a notation list from a JSON file.
///
/// I/O failures are errors; the content itself is decoded tolerantly.
pub fn read_notations(path: impl AsRef<Path>) -> Result<Vec<WorkoutNotation>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
    Ok(decode_notations(&text))
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn decodes_array_of_notations() {
        let body = r#"[
            {"timestamp": "2024-03-01T07:30:00.000000"},
            {"timestamp": "2024-03-02T07:30:00.000000", "user": {"id": 3}}
        ]"#;
        let notations = decode_notations(body);
        assert_eq!(notations.len(), 2);
        assert_eq!(notations[1].timestamp, "2024-03-02T07:30:00.000000");
    }

    #[test]
    fn empty_or_invalid_bodies_yield_nothing() {
        assert!(decode_notations("").is_empty());
        assert!(decode_notations("   ").is_empty());
        assert!(decode_notations("[{").is_empty());
        assert!(decode_notations("Failed with response code 401, message: ").is_empty());
    }

    #[test]
    fn non_array_root_yields_nothing() {
        assert!(decode_notations(r#"{"timestamp": "2024-03-01T07:30:00.000000"}"#).is_empty());
        assert!(decode_notations("null").is_empty());
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let body = r#"[
            {"timestamp": "2024-03-01T07:30:00.000000"},
            {"timestamp": null},
            42,
            {"when": "2024-03-01"},
            {"timestamp": "2024-03-05T07:30:00.000000"}
        ]"#;
        let notations = decode_notations(body);
        assert_eq!(notations.len(), 2);
    }

    #[test]
    fn unparseable_timestamps_are_discarded() {
        let notations = vec![
            WorkoutNotation::new("2024-03-01T07:30:00.000000"),
            WorkoutNotation::new("garbage"),
            WorkoutNotation::new("2024-03-02T07:30:00.000000"),
        ];
        let events = events_from_notations(&notations);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date().to_string(), "2024-03-01");
        assert_eq!(events[1].date().to_string(), "2024-03-02");
    }

    #[test]
    fn read_notations_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"timestamp": "2024-03-01T07:30:00.000000"}}]"#).unwrap();

        let notations = read_notations(file.path()).unwrap();
        assert_eq!(notations.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_notations(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
