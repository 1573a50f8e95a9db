//! Extraction of suggestion values from raw endpoint responses.
//!
//! The response shape is arbitrary and externally controlled, so extraction
//! is total: every structural mismatch degrades to an empty sequence rather
//! than an error. What counts as a value, where the list of items lives, and
//! whether the response is trusted at all are driven by [`ExtractPaths`].

use crate::path::{is_truthy, resolve};
use serde_json::Value;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// One suggestable value, with an optional display label.
///
/// Equality and hashing are defined solely on `value`; the label never
/// participates in de-duplication or diffing.
#[derive(Debug, Clone, Eq)]
pub struct Suggestion {
    /// The value surfaced to the input when this suggestion is chosen.
    pub value: String,
    /// Optional human-facing text displayed alongside the value.
    pub label: Option<String>,
}

impl Suggestion {
    /// Creates a suggestion without a label.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// Attaches a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Hash for Suggestion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Where to find suggestion values inside a response.
///
/// All fields are dot-separated paths per [`crate::path::resolve`]. `check`
/// and `list_path` are resolved against the response root; `value_path` and
/// `label_path` against each list item. `label_path` is meaningful only when
/// `value_path` is set — without a value path, items are used as raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractPaths {
    /// Path to a value gating the response as successful; falsy means "no
    /// options", regardless of the rest of the body.
    pub check: Option<String>,
    /// Path to the array of items. When unset, the response itself is the
    /// array.
    pub list_path: Option<String>,
    /// Path within each item to its value.
    pub value_path: Option<String>,
    /// Path within each item to its label.
    pub label_path: Option<String>,
}

/// Extracts a de-duplicated, ordered sequence of suggestions from `data`.
///
/// Never fails: a non-object response, a failed success check, a missing or
/// non-array item list, and items without a usable value all degrade to
/// fewer (or zero) suggestions. De-duplication is by value, first occurrence
/// wins, order preserved.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fetchlist::extract::{extract, ExtractPaths};
/// use serde_json::json;
///
/// let paths = ExtractPaths {
///     list_path: Some("results".into()),
///     value_path: Some("name".into()),
///     ..Default::default()
/// };
/// let data = json!({"results": [{"name": "Paris"}, {"name": "Lyon"}]});
/// let suggestions = extract(&paths, &data);
/// assert_eq!(suggestions.len(), 2);
/// assert_eq!(suggestions[0].value, "Paris");
/// ```
pub fn extract(paths: &ExtractPaths, data: &Value) -> Vec<Suggestion> {
    if !data.is_object() && !data.is_array() {
        return Vec::new();
    }

    if let Some(check) = &paths.check {
        if !is_truthy(resolve(data, check).unwrap_or(&Value::Null)) {
            return Vec::new();
        }
    }

    let items = match &paths.list_path {
        Some(list_path) => match resolve(data, list_path) {
            Some(items) => items,
            None => return Vec::new(),
        },
        None => data,
    };
    let items = match items.as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let suggestion = match &paths.value_path {
            Some(value_path) => {
                let value = match resolve(item, value_path).and_then(scalar_text) {
                    Some(value) => value,
                    None => continue,
                };
                let label = paths
                    .label_path
                    .as_deref()
                    .and_then(|label_path| resolve(item, label_path))
                    .and_then(scalar_text);
                Suggestion { value, label }
            }
            None => match scalar_text(item) {
                Some(value) => Suggestion::new(value),
                None => continue,
            },
        };
        if seen.insert(suggestion.value.clone()) {
            out.push(suggestion);
        }
    }
    out
}

/// Text form of a scalar JSON value; objects, arrays and `null` have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_paths() -> ExtractPaths {
        ExtractPaths::default()
    }

    #[test]
    fn test_raw_values_are_deduplicated_in_order() {
        let data = json!(["x", "x", "y"]);
        let out = extract(&raw_paths(), &data);
        assert_eq!(out, vec![Suggestion::new("x"), Suggestion::new("y")]);
    }

    #[test]
    fn test_non_object_response_yields_empty() {
        assert!(extract(&raw_paths(), &json!("nope")).is_empty());
        assert!(extract(&raw_paths(), &json!(12)).is_empty());
        assert!(extract(&raw_paths(), &Value::Null).is_empty());
    }

    #[test]
    fn test_success_check_gates_extraction() {
        let paths = ExtractPaths {
            check: Some("ok".into()),
            list_path: Some("items".into()),
            ..Default::default()
        };

        let failed = json!({"ok": false, "items": ["a", "b"]});
        assert!(extract(&paths, &failed).is_empty());

        let succeeded = json!({"ok": true, "items": ["a", "b"]});
        let out = extract(&paths, &succeeded);
        assert_eq!(out, vec![Suggestion::new("a"), Suggestion::new("b")]);
    }

    #[test]
    fn test_missing_check_path_counts_as_failure() {
        let paths = ExtractPaths {
            check: Some("ok".into()),
            ..Default::default()
        };
        assert!(extract(&paths, &json!({"items": ["a"]})).is_empty());
    }

    #[test]
    fn test_value_and_label_paths() {
        let paths = ExtractPaths {
            list_path: Some("results".into()),
            value_path: Some("id".into()),
            label_path: Some("name".into()),
            ..Default::default()
        };
        let data = json!({"results": [
            {"id": "75", "name": "Paris"},
            {"id": "69", "name": "Lyon"},
        ]});

        let out = extract(&paths, &data);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].value, "75");
        assert_eq!(out[0].label.as_deref(), Some("Paris"));
        assert_eq!(out[1].value, "69");
        assert_eq!(out[1].label.as_deref(), Some("Lyon"));
    }

    #[test]
    fn test_item_without_value_is_skipped() {
        let paths = ExtractPaths {
            value_path: Some("name".into()),
            ..Default::default()
        };
        let data = json!([{"name": "Paris"}, {"other": 1}, {"name": null}]);
        let out = extract(&paths, &data);
        assert_eq!(out, vec![Suggestion::new("Paris")]);
    }

    #[test]
    fn test_numbers_and_booleans_stringify() {
        let data = json!([1, 2.5, true]);
        let out = extract(&raw_paths(), &data);
        let values: Vec<&str> = out.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2.5", "true"]);
    }

    #[test]
    fn test_non_array_items_yield_empty() {
        let paths = ExtractPaths {
            list_path: Some("items".into()),
            ..Default::default()
        };
        assert!(extract(&paths, &json!({"items": "not a list"})).is_empty());
        assert!(extract(&paths, &json!({"other": []})).is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let paths = ExtractPaths {
            list_path: Some("items".into()),
            ..Default::default()
        };
        let data = json!({"items": ["b", "a", "b", "c", "a"]});
        let first = extract(&paths, &data);
        let second = extract(&paths, &data);
        assert_eq!(first, second);
        let values: Vec<&str> = first.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_equality_ignores_label() {
        let plain = Suggestion::new("x");
        let labeled = Suggestion::new("x").with_label("The X");
        assert_eq!(plain, labeled);
    }
}
