//! The suggestion sink: where reconciled options are materialized.

use crate::extract::Suggestion;
use crate::reconcile::Diff;

/// The rendering seam consumed by the widget core.
///
/// The core never reads a sink's state back; it trusts its own tracked
/// option set as the source of truth and only pushes diffs here.
pub trait SuggestionSink {
    /// Adds an entry. Must be a no-op if an entry with the same value
    /// already exists.
    fn create_option(&mut self, value: &str, label: Option<&str>);

    /// Removes every entry matching `value`.
    fn remove_option(&mut self, value: &str);
}

/// Applies a reconciliation diff to a sink: removals first, then additions.
pub fn apply_diff(sink: &mut impl SuggestionSink, diff: &Diff) {
    for value in &diff.to_remove {
        sink.remove_option(value);
    }
    for suggestion in &diff.to_add {
        sink.create_option(&suggestion.value, suggestion.label.as_deref());
    }
}

/// The widget-owned default sink: an ordered list of suggestion entries.
#[derive(Debug, Clone, Default)]
pub struct Datalist {
    entries: Vec<Suggestion>,
}

impl Datalist {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered entries, in insertion order.
    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    /// Number of rendered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with `value` exists.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e.value == value)
    }

    /// First entry whose value contains `text`. An empty `text` matches the
    /// first entry.
    pub fn first_containing(&self, text: &str) -> Option<&Suggestion> {
        self.entries.iter().find(|e| e.value.contains(text))
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl SuggestionSink for Datalist {
    fn create_option(&mut self, value: &str, label: Option<&str>) {
        if self.contains(value) {
            return;
        }
        self.entries.push(Suggestion {
            value: value.to_string(),
            label: label.map(str::to_string),
        });
    }

    fn remove_option(&mut self, value: &str) {
        self.entries.retain(|e| e.value != value);
    }
}
