use crate::models::predict_types::PredictionEntry;
use serde_json::Value;

/// Converts a decoded response body into a sorted probability list. Total
/// over any `Value`: shape mismatches degrade to an empty list instead of
/// failing, since this feeds a display-only pipeline.
///
/// Two top-level shapes are accepted: `{"predictions": {label: p, ...}}`
/// and the flat `{label: p, ...}`. The dual handling mirrors the server's
/// historical behavior and should not be extended further.
pub fn normalize_predictions(body: &Value) -> Vec<PredictionEntry> {
    let map = match locate_predictions(body) {
        Some(map) => map,
        None => return Vec::new(),
    };

    let mut entries: Vec<PredictionEntry> = map
        .iter()
        .map(|(label, value)| PredictionEntry {
            label: label.clone(),
            probability: parse_probability(value),
        })
        .collect();

    // Stable sort: ties keep encounter order.
    entries.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}

/// Picks the mapping to iterate: a `predictions` sub-object when present,
/// otherwise the top-level object itself.
fn locate_predictions(body: &Value) -> Option<&serde_json::Map<String, Value>> {
    let top = body.as_object()?;
    match top.get("predictions").and_then(Value::as_object) {
        Some(inner) => Some(inner),
        None => Some(top),
    }
}

/// Best-effort numeric parse: JSON numbers pass through, anything else is
/// parsed from its string representation, defaulting to 0.0.
fn parse_probability(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        other => other.to_string().parse().unwrap_or(0.0),
    }
}

/// Formats a probability for display: value x 100, two decimals, percent
/// sign. `0.8765` renders as `"87.65%"`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(entries: &[PredictionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_wrapped_shape() {
        let body = json!({"predictions": {"cat": 0.9, "dog": 0.1}});
        let entries = normalize_predictions(&body);
        assert_eq!(
            entries,
            vec![
                PredictionEntry {
                    label: "cat".to_string(),
                    probability: 0.9
                },
                PredictionEntry {
                    label: "dog".to_string(),
                    probability: 0.1
                },
            ]
        );
    }

    #[test]
    fn test_flat_shape() {
        let body = json!({"cat": 0.2, "dog": 0.8});
        let entries = normalize_predictions(&body);
        assert_eq!(labels(&entries), vec!["dog", "cat"]);
        assert_eq!(entries[0].probability, 0.8);
    }

    #[test]
    fn test_string_encoded_probability() {
        let body = json!({"predictions": {"cat": "0.5"}});
        let entries = normalize_predictions(&body);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "cat");
        assert_eq!(entries[0].probability, 0.5);
    }

    #[test]
    fn test_unparsable_values_default_to_zero() {
        let body = json!({"predictions": {"cat": "high", "dog": null, "rose": 0.3}});
        let entries = normalize_predictions(&body);
        assert_eq!(labels(&entries), vec!["rose", "cat", "dog"]);
        assert_eq!(entries[1].probability, 0.0);
        assert_eq!(entries[2].probability, 0.0);
    }

    #[test]
    fn test_non_object_top_level_yields_empty() {
        assert!(normalize_predictions(&json!([0.1, 0.9])).is_empty());
        assert!(normalize_predictions(&json!(0.5)).is_empty());
        assert!(normalize_predictions(&json!("oops")).is_empty());
        assert!(normalize_predictions(&json!(null)).is_empty());
    }

    #[test]
    fn test_non_object_predictions_value_falls_back_to_top_level() {
        // "predictions" exists but is not an object, so the top-level map is
        // used and the value fails numeric parsing.
        let body = json!({"predictions": [0.1, 0.9]});
        let entries = normalize_predictions(&body);
        assert_eq!(labels(&entries), vec!["predictions"]);
        assert_eq!(entries[0].probability, 0.0);
    }

    #[test]
    fn test_output_is_sorted_descending() {
        let body = json!({
            "daisy": 0.07,
            "dandelion": 0.55,
            "roses": 0.01,
            "sunflowers": 0.12,
            "tulips": 0.25
        });
        let entries = normalize_predictions(&body);
        assert_eq!(entries.len(), 5);
        for pair in entries.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let body = json!({"predictions": {"cat": 0.4, "dog": 0.4, "bird": 0.2}});
        assert_eq!(normalize_predictions(&body), normalize_predictions(&body));
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.8765), "87.65%");
        assert_eq!(format_probability(0.0), "0.00%");
        assert_eq!(format_probability(1.0), "100.00%");
        assert_eq!(format_probability(0.005), "0.50%");
    }
}
