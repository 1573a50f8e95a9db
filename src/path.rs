//! Dotted-path lookup into untyped JSON values.
//!
//! Remote endpoints return arbitrarily shaped JSON, so every structural
//! assumption the widget makes is mediated by [`resolve`]. The contract is
//! total: any root/path pair yields a result, and a missing or unexpected
//! segment resolves to `None` instead of failing. A malformed response must
//! never crash the input the user is actively typing into.

use serde_json::Value;

/// Resolves a dot-separated path (e.g. `"data.items"`) against a JSON value.
///
/// Traversal proceeds segment by segment. An empty path yields `None` without
/// inspecting `root`; a `null` root, a `null` intermediate value, or a segment
/// that does not exist short-circuits to `None`. A numeric segment indexes
/// into an array, so `"items.0.name"` reaches into the first item. Indexing
/// into non-container primitives (strings, numbers) is a safe no-op that also
/// resolves to `None`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_fetchlist::path::resolve;
/// use serde_json::json;
///
/// let data = json!({"a": {"b": 3}, "items": [{"name": "x"}]});
/// assert_eq!(resolve(&data, "a.b"), Some(&json!(3)));
/// assert_eq!(resolve(&data, "items.0.name"), Some(&json!("x")));
/// assert_eq!(resolve(&data, "a.c"), None);
/// assert_eq!(resolve(&data, ""), None);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Null => return None,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => current.get(segment)?,
        };
    }
    Some(current)
}

/// Whether a resolved value gates a response as successful.
///
/// Follows loose truthiness: `null`, `false`, `0` and the empty string are
/// falsy; everything else, including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_path_yields_default() {
        let data = json!({"a": 1});
        assert_eq!(resolve(&data, ""), None);
    }

    #[test]
    fn test_null_root_yields_default() {
        assert_eq!(resolve(&Value::Null, "a.b"), None);
    }

    #[test]
    fn test_nested_hit() {
        let data = json!({"a": {"b": 3}});
        assert_eq!(resolve(&data, "a.b"), Some(&json!(3)));
    }

    #[test]
    fn test_missing_leaf_yields_default() {
        let data = json!({"a": {}});
        assert_eq!(resolve(&data, "a.b"), None);
    }

    #[test]
    fn test_primitive_root_is_safe() {
        assert_eq!(resolve(&json!("hello"), "a"), None);
        assert_eq!(resolve(&json!(42), "a.b"), None);
    }

    #[test]
    fn test_null_intermediate_short_circuits() {
        let data = json!({"a": null});
        assert_eq!(resolve(&data, "a.b"), None);
    }

    #[test]
    fn test_numeric_segments_index_arrays() {
        let data = json!({"a": [{"b": 1}, {"b": 2}]});
        assert_eq!(resolve(&data, "a.0.b"), Some(&json!(1)));
        assert_eq!(resolve(&data, "a.1.b"), Some(&json!(2)));
        assert_eq!(resolve(&data, "a.2.b"), None);
    }

    #[test]
    fn test_array_segments_are_not_indexed_by_name() {
        let data = json!({"a": [1, 2, 3]});
        assert_eq!(resolve(&data, "a.b"), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("ok")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
