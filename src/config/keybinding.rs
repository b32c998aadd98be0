use crossterm::event::{KeyCode, KeyModifiers};

use crate::error::{Error, Result};

use super::KeyBinding;

/// Parse a key string into KeyCode
pub fn parse_key(key: &str) -> Result<KeyCode> {
    let key = key.trim();

    // Single character
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    // Named keys
    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Esc),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "space" => Ok(KeyCode::Char(' ')),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "delete" | "del" => Ok(KeyCode::Delete),
        "plus" => Ok(KeyCode::Char('+')),
        "minus" => Ok(KeyCode::Char('-')),
        name => name
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| Error::InvalidKeyBinding(format!("Unknown key: {}", key))),
    }
}

/// Parse modifier string into KeyModifiers
pub fn parse_modifiers(mods: Option<&str>) -> KeyModifiers {
    let Some(mods) = mods else {
        return KeyModifiers::NONE;
    };

    let mut result = KeyModifiers::NONE;

    for part in mods.split('|') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "control" | "ctrl" => result |= KeyModifiers::CONTROL,
            "shift" => result |= KeyModifiers::SHIFT,
            "alt" | "option" => result |= KeyModifiers::ALT,
            "super" | "command" | "cmd" => result |= KeyModifiers::SUPER,
            _ => {}
        }
    }

    result
}

fn normal(key: &str, action: &str) -> KeyBinding {
    KeyBinding::new(key).with_action(action).with_mode("Normal")
}

fn insert(key: &str, action: &str) -> KeyBinding {
    KeyBinding::new(key).with_action(action).with_mode("Insert")
}

/// Built-in key bindings
pub fn default_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // Navigation
        normal("j", "MoveDown"),
        normal("Down", "MoveDown"),
        normal("k", "MoveUp"),
        normal("Up", "MoveUp"),
        normal("Home", "MoveTop"),
        normal("End", "MoveBottom"),
        normal("Tab", "FocusNext"),
        normal("Enter", "Select"),
        normal("Esc", "Back"),
        // Color
        normal("r", "RandomColor"),
        normal("u", "Undo"),
        normal("R", "Reset"),
        normal("y", "CopyColor"),
        normal("f", "ToggleFavorite"),
        normal("x", "RemoveFavorite"),
        normal("e", "ExportFavorites"),
        normal("+", "BrightnessUp"),
        normal("=", "BrightnessUp"),
        normal("-", "BrightnessDown"),
        normal("g", "ToggleGradient"),
        normal("[", "RotateGradientLeft"),
        normal("]", "RotateGradientRight"),
        normal("s", "CycleSecondary"),
        // Prompts
        normal("o", "OpenImage"),
        normal("#", "EnterColor"),
        insert("Enter", "Confirm"),
        insert("Esc", "Cancel"),
        KeyBinding::new("w")
            .with_mods("Control")
            .with_mode("Insert")
            .with_action("DeleteWord"),
        // Other
        normal("?", "ToggleHelp"),
        normal("q", "Quit"),
        KeyBinding::new("c")
            .with_mods("Control")
            .with_action("ForceQuit"),
    ];

    for n in 1..=9 {
        bindings.push(normal(&n.to_string(), &format!("ApplyPreset{}", n)));
    }

    bindings
}
