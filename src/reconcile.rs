//! Incremental reconciliation of the tracked option set.
//!
//! Every successful fetch cycle logically replaces the option set, but the
//! rendered sink is updated via a minimal add/remove diff instead of a
//! wholesale rebuild. This is the only place duplicate or orphaned entries
//! could leak into the UI, so the contract is held exactly: additions are
//! values new to the tracked set, removals are tracked values missing from
//! the new set (and only when stale removal is enabled), and the tracked set
//! always becomes the new values afterwards.

use crate::extract::Suggestion;
use std::collections::HashSet;

/// The minimal change between two fetch cycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    /// Suggestions to create in the sink, in new-set order.
    pub to_add: Vec<Suggestion>,
    /// Values to remove from the sink, in previous-set order.
    pub to_remove: Vec<String>,
}

impl Diff {
    /// Whether this diff changes nothing.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// The ordered, value-unique set of option values tracked by one widget.
///
/// Starts empty at widget creation and is discarded with it; never shared
/// across instances. When stale removal is disabled, this tracked state and
/// the rendered sink may diverge: the tracked set always reflects the latest
/// fetch while the sink keeps its unremoved stale entries.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    values: Vec<String>,
}

impl OptionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tracked values, in order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of tracked values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` is currently tracked.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Discards all tracked values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Diffs `new` against the tracked values and commits `new` as the
    /// tracked state.
    ///
    /// `to_add` holds suggestions whose value was not tracked before, in the
    /// order they appear in `new`. `to_remove` holds previously tracked
    /// values absent from `new`, computed only when `remove_stale` is set;
    /// otherwise it stays empty and stale sink entries accumulate. Duplicate
    /// values in `new` are collapsed to their first occurrence.
    pub fn reconcile(&mut self, new: &[Suggestion], remove_stale: bool) -> Diff {
        let mut seen: HashSet<&str> = HashSet::with_capacity(new.len());
        let mut next = Vec::with_capacity(new.len());
        let mut to_add = Vec::new();
        for suggestion in new {
            if !seen.insert(suggestion.value.as_str()) {
                continue;
            }
            if !self.contains(&suggestion.value) {
                to_add.push(suggestion.clone());
            }
            next.push(suggestion.value.clone());
        }

        let to_remove = if remove_stale {
            self.values
                .iter()
                .filter(|value| !seen.contains(value.as_str()))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        self.values = next;
        Diff { to_add, to_remove }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(values: &[&str]) -> Vec<Suggestion> {
        values.iter().copied().map(Suggestion::new).collect()
    }

    #[test]
    fn test_reconcile_with_stale_removal() {
        let mut set = OptionSet::new();
        set.reconcile(&suggestions(&["a", "b"]), true);

        let diff = set.reconcile(&suggestions(&["b", "c"]), true);
        assert_eq!(diff.to_add, suggestions(&["c"]));
        assert_eq!(diff.to_remove, vec!["a".to_string()]);
        assert_eq!(set.values(), ["b", "c"]);
    }

    #[test]
    fn test_reconcile_without_stale_removal() {
        let mut set = OptionSet::new();
        set.reconcile(&suggestions(&["a", "b"]), false);

        let diff = set.reconcile(&suggestions(&["b", "c"]), false);
        assert_eq!(diff.to_add, suggestions(&["c"]));
        assert!(diff.to_remove.is_empty());
        // Tracked state drops "a" even though it was not ordered removed.
        assert_eq!(set.values(), ["b", "c"]);
    }

    #[test]
    fn test_first_cycle_adds_everything() {
        let mut set = OptionSet::new();
        let diff = set.reconcile(&suggestions(&["a", "b"]), true);
        assert_eq!(diff.to_add, suggestions(&["a", "b"]));
        assert!(diff.to_remove.is_empty());
    }

    #[test]
    fn test_identical_cycle_is_a_noop() {
        let mut set = OptionSet::new();
        set.reconcile(&suggestions(&["a", "b"]), true);
        let diff = set.reconcile(&suggestions(&["a", "b"]), true);
        assert!(diff.is_empty());
        assert_eq!(set.values(), ["a", "b"]);
    }

    #[test]
    fn test_empty_new_set_removes_all_when_stale_removal_enabled() {
        let mut set = OptionSet::new();
        set.reconcile(&suggestions(&["a", "b"]), true);
        let diff = set.reconcile(&[], true);
        assert!(diff.to_add.is_empty());
        assert_eq!(diff.to_remove, vec!["a".to_string(), "b".to_string()]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicate_input_collapses_to_first_occurrence() {
        let mut set = OptionSet::new();
        let diff = set.reconcile(&suggestions(&["x", "x", "y"]), true);
        assert_eq!(diff.to_add, suggestions(&["x", "y"]));
        assert_eq!(set.values(), ["x", "y"]);
    }

    #[test]
    fn test_labels_do_not_affect_diffing() {
        let mut set = OptionSet::new();
        set.reconcile(&[Suggestion::new("a")], true);
        let relabeled = vec![Suggestion::new("a").with_label("The A")];
        let diff = set.reconcile(&relabeled, true);
        assert!(diff.is_empty());
    }
}
