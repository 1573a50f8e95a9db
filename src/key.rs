//! Type-safe key bindings for widget actions.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A named key binding with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Short help text, e.g. `"enter"`.
    pub help: String,
    /// Longer description for help displays.
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the short help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the longer description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether `key_msg` triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_its_keys() {
        let binding = Binding::new(vec![KeyCode::Enter, KeyCode::Tab]);
        assert!(binding.matches(&key(KeyCode::Enter)));
        assert!(binding.matches(&key(KeyCode::Tab)));
        assert!(!binding.matches(&key(KeyCode::Esc)));
    }

    #[test]
    fn test_help_builder() {
        let binding = Binding::new(vec![KeyCode::Enter])
            .with_help("enter")
            .with_description("Select the best suggestion");
        assert_eq!(binding.help, "enter");
        assert_eq!(binding.description, "Select the best suggestion");
    }
}
