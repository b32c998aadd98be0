use std::path::PathBuf;

use tracing::{debug, warn};

use crate::app::{App, Focus, Mode, Prompt};
use crate::error::Result;

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action
    pub async fn handle(app: &mut App, action: Action) -> Result<()> {
        debug!(?action, "handle action");

        match action {
            // Navigation
            Action::MoveUp => app.move_up(),
            Action::MoveDown => app.move_down(),
            Action::MoveTop => app.move_top(),
            Action::MoveBottom => app.move_bottom(),
            Action::FocusNext => app.focus_next(),
            Action::Select => Self::handle_select(app),
            Action::Back => {
                app.show_help = false;
            }

            // Color
            Action::ApplyPreset(idx) => {
                app.session.apply_preset(idx);
            }
            Action::RandomColor => {
                app.session.apply_random();
            }
            Action::Undo => app.session.undo(),
            Action::Reset => app.session.reset_to_default(),
            Action::CopyColor => app.session.copy_current(),
            Action::ToggleFavorite => app.session.toggle_favorite(),
            Action::RemoveFavorite => Self::handle_remove_favorite(app),
            Action::ExportFavorites => {
                if let Err(err) = app.session.export_favorites() {
                    warn!(error = %err, "export failed");
                    app.show_error(err.to_string());
                }
            }
            Action::BrightnessUp => app.adjust_brightness(true),
            Action::BrightnessDown => app.adjust_brightness(false),
            Action::ToggleGradient => app.session.toggle_gradient(),
            Action::RotateGradientLeft => app.rotate_gradient(false),
            Action::RotateGradientRight => app.rotate_gradient(true),
            Action::CycleSecondary => app.cycle_secondary(),

            // Prompts
            Action::OpenImage => app.start_prompt(Prompt::ImagePath),
            Action::EnterColor => app.start_prompt(Prompt::HexColor),
            Action::Confirm => Self::handle_confirm(app).await,
            Action::Cancel => {
                app.finish_prompt();
            }

            // Input
            Action::InsertChar(c) => {
                if app.mode == Mode::Insert {
                    app.input_buffer.push(c);
                }
            }
            Action::DeleteChar => {
                app.input_buffer.pop();
            }
            Action::DeleteWord => {
                // Delete word backwards
                let trimmed = app.input_buffer.trim_end();
                if let Some(pos) = trimmed.rfind(char::is_whitespace) {
                    app.input_buffer.truncate(pos + 1);
                } else {
                    app.input_buffer.clear();
                }
            }

            // Mouse
            Action::Click { column, row } => Self::handle_click(app, column, row),

            // Other
            Action::ToggleHelp => {
                app.show_help = !app.show_help;
            }
            Action::Quit => {
                if app.show_help {
                    app.show_help = false;
                } else {
                    app.should_quit = true;
                }
            }
            Action::ForceQuit => {
                app.should_quit = true;
            }
        }

        app.process_effects();
        app.clamp_selections();
        Ok(())
    }

    /// Apply the color selected in the focused list
    fn handle_select(app: &mut App) {
        let Some(idx) = app.selected_index() else {
            return;
        };
        match app.focus {
            Focus::History => app.session.apply_history(idx),
            Focus::Favorites => app.session.apply_favorite(idx),
        };
    }

    /// Remove the selected favorite, or the current color when history has focus
    fn handle_remove_favorite(app: &mut App) {
        let target = match (app.focus, app.selected_index()) {
            (Focus::Favorites, Some(idx)) => app.session.favorites().get(idx),
            _ => Some(app.session.current_color()),
        };
        if let Some(color) = target {
            app.session.remove_favorite(color);
        }
    }

    async fn handle_confirm(app: &mut App) {
        let (prompt, input) = app.finish_prompt();
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        match prompt {
            Prompt::ImagePath => {
                let path = expand_home(input);
                app.open_image(&path).await;
            }
            Prompt::HexColor => {
                if let Err(err) = app.session.apply_color_str(input) {
                    app.show_error(err.to_string());
                }
            }
            Prompt::None => {}
        }
    }

    fn handle_click(app: &mut App, column: u16, row: u16) {
        if app.mode != Mode::Normal {
            return;
        }
        if app.is_on_image(column, row) {
            app.sample_cell(column, row);
        } else if app.is_on_swatch(column, row) {
            app.session.copy_current();
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
