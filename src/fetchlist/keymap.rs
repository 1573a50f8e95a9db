//! Key bindings for the fetchlist widget.

use crate::key::Binding;
use crossterm::event::KeyCode;

/// Key bindings for widget actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Select the best-matching suggestion (auto-select only).
    pub select: Binding,
}

/// Default bindings: Enter selects.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        select: Binding::new(vec![KeyCode::Enter])
            .with_help("enter")
            .with_description("Select the best suggestion"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}
