mod keybinding;
mod loader;
mod types;

pub use keybinding::{default_bindings, parse_key, parse_modifiers};
pub use loader::{load_file, load_local_config};
pub use types::{default_presets, Config, KeyBinding, PaletteConfig};
