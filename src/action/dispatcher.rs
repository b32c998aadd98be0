use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            bindings: config.key_bindings(),
        }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        // First, check configured bindings
        for binding in &self.bindings {
            if self.matches(binding, &key, mode) {
                return self.to_action(binding);
            }
        }

        // Handle character input in the prompt
        if let Mode::Insert = mode {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return Some(Action::InsertChar(c));
                }
            }
            if key.code == KeyCode::Backspace {
                return Some(Action::DeleteChar);
            }
        }

        None
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        if binding_key != key.code {
            return false;
        }

        // Shift is already reflected in the character itself ('R', '#', '?')
        let mut binding_mods = parse_modifiers(binding.mods.as_deref());
        let mut key_mods = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            binding_mods.remove(KeyModifiers::SHIFT);
            key_mods.remove(KeyModifiers::SHIFT);
        }
        if binding_mods != key_mods {
            return false;
        }

        if let Some(mode_str) = &binding.mode {
            if !self.mode_matches(mode_str, mode) {
                return false;
            }
        }

        true
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_name_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m.trim(), current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    /// Check if a mode name matches
    fn mode_name_matches(&self, name: &str, current_mode: &Mode) -> bool {
        match name.to_lowercase().as_str() {
            "normal" => matches!(current_mode, Mode::Normal),
            "insert" => matches!(current_mode, Mode::Insert),
            _ => false,
        }
    }

    /// Convert a binding to an action
    fn to_action(&self, binding: &KeyBinding) -> Option<Action> {
        binding.action.as_deref().and_then(Action::from_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> ActionDispatcher {
        ActionDispatcher::new(&Config::default())
    }

    #[test]
    fn test_dispatch_r_is_random() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(
            dispatcher().dispatch(key, &Mode::Normal),
            Some(Action::RandomColor)
        );
    }

    #[test]
    fn test_dispatch_shifted_chars() {
        let dispatcher = dispatcher();
        let reset = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(dispatcher.dispatch(reset, &Mode::Normal), Some(Action::Reset));

        let hash = KeyEvent::new(KeyCode::Char('#'), KeyModifiers::SHIFT);
        assert_eq!(
            dispatcher.dispatch(hash, &Mode::Normal),
            Some(Action::EnterColor)
        );
    }

    #[test]
    fn test_insert_mode_types_characters() {
        let dispatcher = dispatcher();
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(
            dispatcher.dispatch(key, &Mode::Insert),
            Some(Action::InsertChar('r'))
        );

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(
            dispatcher.dispatch(backspace, &Mode::Insert),
            Some(Action::DeleteChar)
        );
    }

    #[test]
    fn test_mode_restriction() {
        let dispatcher = dispatcher();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(dispatcher.dispatch(esc, &Mode::Insert), Some(Action::Cancel));
        assert_eq!(dispatcher.dispatch(esc, &Mode::Normal), Some(Action::Back));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let dispatcher = dispatcher();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            dispatcher.dispatch(key, &Mode::Normal),
            Some(Action::ForceQuit)
        );
        assert_eq!(
            dispatcher.dispatch(key, &Mode::Insert),
            Some(Action::ForceQuit)
        );
    }

    #[test]
    fn test_user_binding_overrides_default() {
        let config = Config {
            bindings: vec![KeyBinding::new("r")
                .with_mode("Normal")
                .with_action("Undo")],
            ..Default::default()
        };
        let dispatcher = ActionDispatcher::new(&config);
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(dispatcher.dispatch(key, &Mode::Normal), Some(Action::Undo));
    }

    #[test]
    fn test_disabled_binding_swallows_key() {
        let config = Config {
            bindings: vec![KeyBinding::new("r").with_action("None")],
            ..Default::default()
        };
        let dispatcher = ActionDispatcher::new(&config);
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(dispatcher.dispatch(key, &Mode::Normal), None);
    }
}
