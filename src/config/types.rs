use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

use crate::color::{parse_color, Color};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::theme::{Theme, ThemeColorsConfig};

use super::default_bindings;

/// Preset buttons shown when none are configured
const DEFAULT_PRESETS: [&str; 5] = ["red", "green", "blue", "pink", "white"];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Theme preset name ("default" or "classic")
    #[serde(default)]
    pub theme: Option<String>,

    /// Per-color theme overrides
    #[serde(default)]
    pub colors: Option<ThemeColorsConfig>,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

/// Palette configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PaletteConfig {
    /// Number of recent colors to keep
    #[serde(default)]
    pub history_capacity: Option<usize>,

    /// Preset colors, as hex strings or CSS names
    #[serde(default)]
    pub presets: Option<Vec<String>>,

    /// Directory exported files are written to
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        Config {
            palette: PaletteConfig {
                history_capacity: other
                    .palette
                    .history_capacity
                    .or(self.palette.history_capacity),
                presets: other.palette.presets.or(self.palette.presets),
                export_dir: other.palette.export_dir.or(self.palette.export_dir),
            },
            theme: other.theme.or(self.theme),
            colors: other.colors.or(self.colors),
            bindings,
        }
    }

    /// History capacity, at least 1
    pub fn history_capacity(&self) -> usize {
        self.palette
            .history_capacity
            .unwrap_or(DEFAULT_HISTORY_CAPACITY)
            .max(1)
    }

    /// Configured presets; entries that do not parse are skipped
    pub fn presets(&self) -> Vec<Color> {
        let Some(presets) = &self.palette.presets else {
            return default_presets();
        };

        presets
            .iter()
            .filter_map(|s| {
                parse_color(s)
                    .inspect_err(|err| warn!(preset = %s, error = %err, "skipping preset"))
                    .ok()
            })
            .collect()
    }

    /// Directory for exported files, defaulting to the working directory
    pub fn export_dir(&self) -> PathBuf {
        self.palette
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// User bindings followed by the built-in defaults
    pub fn key_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.bindings.clone();
        bindings.extend(default_bindings());
        bindings
    }

    pub fn theme(&self) -> Theme {
        Theme::from_config(self.theme.as_deref(), self.colors.as_ref())
    }
}

/// Preset colors used when none are configured
pub fn default_presets() -> Vec<Color> {
    DEFAULT_PRESETS
        .iter()
        .filter_map(|s| parse_color(s).ok())
        .collect()
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Alt", "Control|Alt")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Insert", "~Insert")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    #[serde(default)]
    pub action: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}
