mod color_list;
mod help_dialog;
mod help_footer;
mod image_preview;
mod prompt;
mod swatch;

pub use color_list::{render_color_list, render_presets};
pub use help_dialog::render_help_dialog;
pub use help_footer::render_help_footer;
pub use image_preview::render_image_preview;
pub use prompt::render_prompt;
pub use swatch::render_swatch;
