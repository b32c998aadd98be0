//! Color session controller
//!
//! Every color change funnels through [`Session::apply_color`]. Side effects
//! (notices, clipboard writes, file saves) are queued as [`Effect`]s for the
//! front end to carry out; the session never performs I/O itself.

use tracing::{debug, warn};

use crate::color::{
    self, compose_gradient, contrast_text_color, wrap_angle, Color, GradientSpec, TextContrast,
};
use crate::error::Result;
use crate::favorites::{Favorites, FAVORITES_FILE_NAME};
use crate::history::ColorHistory;

pub const MIN_BRIGHTNESS: u16 = 50;
pub const MAX_BRIGHTNESS: u16 = 150;
pub const DEFAULT_BRIGHTNESS: u16 = 100;
pub const DEFAULT_GRADIENT_ANGLE: u16 = 90;

/// Mutable per-session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub current_color: Color,
    pub previous_color: Color,
    pub brightness_percent: u16,
    pub gradient_angle: u16,
    pub gradient_enabled: bool,
    pub secondary_color: Color,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_color: Color::OLIVE,
            previous_color: Color::OLIVE,
            brightness_percent: DEFAULT_BRIGHTNESS,
            gradient_angle: DEFAULT_GRADIENT_ANGLE,
            gradient_enabled: false,
            secondary_color: Color::BLUE,
        }
    }
}

/// Short human-readable status messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied(Color),
    FavoriteSaved,
    FavoriteRemoved,
    PaletteExported,
    Picked(Color),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Copied(color) => write!(f, "Copied: {}", color),
            Notice::FavoriteSaved => write!(f, "Color saved to favorites!"),
            Notice::FavoriteRemoved => write!(f, "Color removed from favorites."),
            Notice::PaletteExported => write!(f, "Palette exported successfully!"),
            Notice::Picked(color) => write!(f, "Picked color: {}", color),
        }
    }
}

/// Requests for the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notice),
    CopyToClipboard(String),
    SaveFile { name: String, contents: Vec<u8> },
}

/// Owns the session state, history and favorites
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    history: ColorHistory,
    favorites: Favorites,
    presets: Vec<Color>,
    outbox: Vec<Effect>,
}

impl Session {
    pub fn new(history_capacity: usize, presets: Vec<Color>) -> Self {
        Self {
            state: SessionState::default(),
            history: ColorHistory::new(history_capacity),
            favorites: Favorites::new(),
            presets,
            outbox: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_color(&self) -> Color {
        self.state.current_color
    }

    pub fn previous_color(&self) -> Color {
        self.state.previous_color
    }

    pub fn history(&self) -> &ColorHistory {
        &self.history
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn presets(&self) -> &[Color] {
        &self.presets
    }

    /// Take all queued effects
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }

    fn notify(&mut self, notice: Notice) {
        self.outbox.push(Effect::Notify(notice));
    }

    /// Make `color` current and record it in history
    pub fn apply_color(&mut self, color: Color) {
        debug!(from = %self.state.current_color, to = %color, "apply color");
        self.state.previous_color = self.state.current_color;
        self.state.current_color = color;
        self.history.push(color);
    }

    /// Parse and apply a color string. State is untouched on error.
    pub fn apply_color_str(&mut self, input: &str) -> Result<Color> {
        let color = color::parse_color(input).inspect_err(|err| {
            warn!(input, error = %err, "rejected color input");
        })?;
        self.apply_color(color);
        Ok(color)
    }

    /// Swap back to the previous color (single level)
    pub fn undo(&mut self) {
        self.apply_color(self.state.previous_color);
    }

    /// Apply the preset at `idx`. Returns false if there is none.
    pub fn apply_preset(&mut self, idx: usize) -> bool {
        match self.presets.get(idx).copied() {
            Some(color) => {
                self.apply_color(color);
                true
            }
            None => false,
        }
    }

    pub fn apply_random(&mut self) -> Color {
        let color = color::random_color();
        self.apply_color(color);
        color
    }

    pub fn apply_history(&mut self, idx: usize) -> bool {
        match self.history.get(idx) {
            Some(color) => {
                self.apply_color(color);
                true
            }
            None => false,
        }
    }

    pub fn apply_favorite(&mut self, idx: usize) -> bool {
        match self.favorites.get(idx) {
            Some(color) => {
                self.apply_color(color);
                true
            }
            None => false,
        }
    }

    /// Apply a color sampled from an image
    pub fn apply_sampled(&mut self, color: Color) {
        self.apply_color(color);
        self.notify(Notice::Picked(color));
    }

    /// Clamp into 50..=150 and store; returns the stored value
    pub fn set_brightness(&mut self, percent: i32) -> u16 {
        let clamped = percent.clamp(i32::from(MIN_BRIGHTNESS), i32::from(MAX_BRIGHTNESS)) as u16;
        self.state.brightness_percent = clamped;
        clamped
    }

    pub fn adjust_brightness(&mut self, delta: i32) -> u16 {
        self.set_brightness(i32::from(self.state.brightness_percent) + delta)
    }

    pub fn set_gradient(&mut self, enabled: bool, angle: i32, secondary: Color) {
        self.state.gradient_enabled = enabled;
        self.state.gradient_angle = wrap_angle(angle);
        self.state.secondary_color = secondary;
    }

    pub fn toggle_gradient(&mut self) {
        let state = self.state;
        self.set_gradient(
            !state.gradient_enabled,
            i32::from(state.gradient_angle),
            state.secondary_color,
        );
    }

    pub fn rotate_gradient(&mut self, delta: i32) {
        let state = self.state;
        self.set_gradient(
            state.gradient_enabled,
            i32::from(state.gradient_angle) + delta,
            state.secondary_color,
        );
    }

    /// Restore the initial state; history and favorites are kept
    pub fn reset_to_default(&mut self) {
        self.state = SessionState::default();
    }

    /// Queue a clipboard write of the current color
    pub fn copy_current(&mut self) {
        let color = self.state.current_color;
        self.outbox.push(Effect::CopyToClipboard(color.hex()));
        self.notify(Notice::Copied(color));
    }

    /// Save the current color. Returns false if it was already saved.
    pub fn add_favorite(&mut self) -> bool {
        let added = self.favorites.add(self.state.current_color);
        if added {
            self.notify(Notice::FavoriteSaved);
        }
        added
    }

    pub fn remove_favorite(&mut self, color: Color) -> bool {
        let removed = self.favorites.remove(color);
        if removed {
            self.notify(Notice::FavoriteRemoved);
        }
        removed
    }

    /// Save the current color, or remove it if already saved
    pub fn toggle_favorite(&mut self) {
        let color = self.state.current_color;
        if self.favorites.contains(color) {
            self.remove_favorite(color);
        } else {
            self.add_favorite();
        }
    }

    /// Queue a save of the favorites document
    pub fn export_favorites(&mut self) -> Result<()> {
        let contents = self.favorites.export_document()?;
        self.outbox.push(Effect::SaveFile {
            name: FAVORITES_FILE_NAME.to_string(),
            contents,
        });
        self.notify(Notice::PaletteExported);
        Ok(())
    }

    pub fn text_contrast(&self) -> TextContrast {
        contrast_text_color(self.state.current_color)
    }

    /// Gradient from the current to the secondary color, if enabled
    pub fn gradient(&self) -> Option<GradientSpec> {
        self.state.gradient_enabled.then(|| {
            compose_gradient(
                i32::from(self.state.gradient_angle),
                self.state.current_color,
                self.state.secondary_color,
            )
        })
    }

    /// Current color with the brightness filter applied, for rendering only
    pub fn display_color(&self) -> Color {
        self.state
            .current_color
            .with_brightness(self.state.brightness_percent)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            crate::history::DEFAULT_HISTORY_CAPACITY,
            crate::config::default_presets(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0)
    }

    fn notices(session: &mut Session) -> Vec<String> {
        session
            .drain_effects()
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Notify(notice) => Some(notice.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_state() {
        let state = SessionState::default();
        assert_eq!(state.current_color.to_string(), "#808000");
        assert_eq!(state.brightness_percent, 100);
        assert_eq!(state.gradient_angle, 90);
        assert!(!state.gradient_enabled);
        assert_eq!(state.secondary_color, Color::BLUE);
    }

    #[test]
    fn test_apply_color_tracks_previous_and_history() {
        let mut session = Session::default();
        session.apply_color(red());

        assert_eq!(session.current_color(), red());
        assert_eq!(session.previous_color(), Color::OLIVE);
        assert_eq!(session.history().all(), &[red()]);
    }

    #[test]
    fn test_apply_then_undo_restores() {
        let mut session = Session::default();
        session.apply_color(Color::BLUE);
        let before = session.current_color();

        session.apply_color(red());
        session.undo();
        assert_eq!(session.current_color(), before);
    }

    #[test]
    fn test_undo_twice_swaps_back() {
        let mut session = Session::default();
        session.apply_color(red());
        session.undo();
        session.undo();
        assert_eq!(session.current_color(), red());
    }

    #[test]
    fn test_apply_color_str_normalizes() {
        let mut session = Session::default();
        let color = session.apply_color_str("#FF0000").unwrap();
        assert_eq!(color.to_string(), "#ff0000");
        assert_eq!(session.current_color(), red());
    }

    #[test]
    fn test_apply_color_str_error_leaves_state() {
        let mut session = Session::default();
        session.apply_color(red());
        let before = *session.state();

        assert!(session.apply_color_str("not-a-color").is_err());
        assert_eq!(*session.state(), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_brightness_clamped() {
        let mut session = Session::default();
        assert_eq!(session.set_brightness(10), 50);
        assert_eq!(session.set_brightness(500), 150);
        assert_eq!(session.set_brightness(120), 120);
        assert_eq!(session.adjust_brightness(100), 150);
        assert_eq!(session.state().current_color, Color::OLIVE);
    }

    #[test]
    fn test_display_color_applies_brightness() {
        let mut session = Session::default();
        session.apply_color(Color::new(100, 100, 100));
        session.set_brightness(50);
        assert_eq!(session.display_color(), Color::new(50, 50, 50));
        assert_eq!(session.current_color(), Color::new(100, 100, 100));
    }

    #[test]
    fn test_set_gradient_wraps_angle() {
        let mut session = Session::default();
        session.set_gradient(true, 370, red());
        assert!(session.state().gradient_enabled);
        assert_eq!(session.state().gradient_angle, 10);
        assert_eq!(session.state().secondary_color, red());

        session.rotate_gradient(-20);
        assert_eq!(session.state().gradient_angle, 350);
    }

    #[test]
    fn test_gradient_view() {
        let mut session = Session::default();
        assert!(session.gradient().is_none());

        session.toggle_gradient();
        let gradient = session.gradient().unwrap();
        assert_eq!(gradient.angle, 90);
        assert_eq!(gradient.primary, Color::OLIVE);
        assert_eq!(gradient.secondary, Color::BLUE);
    }

    #[test]
    fn test_reset_keeps_history_and_favorites() {
        let mut session = Session::default();
        session.apply_color(red());
        session.add_favorite();
        session.set_brightness(70);
        session.set_gradient(true, 45, red());

        session.reset_to_default();
        assert_eq!(*session.state(), SessionState::default());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.favorites().len(), 1);
    }

    #[test]
    fn test_copy_current_effects() {
        let mut session = Session::default();
        session.apply_color(red());
        session.copy_current();

        let effects = session.drain_effects();
        assert_eq!(
            effects,
            vec![
                Effect::CopyToClipboard("#ff0000".to_string()),
                Effect::Notify(Notice::Copied(red())),
            ]
        );
        assert_eq!(Notice::Copied(red()).to_string(), "Copied: #ff0000");
        assert!(session.drain_effects().is_empty());
    }

    #[test]
    fn test_toggle_favorite_notices() {
        let mut session = Session::default();
        session.toggle_favorite();
        assert_eq!(session.favorites().list(), &[Color::OLIVE]);
        session.toggle_favorite();
        assert!(session.favorites().is_empty());

        assert_eq!(
            notices(&mut session),
            vec!["Color saved to favorites!", "Color removed from favorites."]
        );
    }

    #[test]
    fn test_add_favorite_twice_notifies_once() {
        let mut session = Session::default();
        assert!(session.add_favorite());
        assert!(!session.add_favorite());
        assert_eq!(notices(&mut session).len(), 1);
    }

    #[test]
    fn test_export_favorites_effect() {
        let mut session = Session::default();
        session.apply_color(red());
        session.add_favorite();
        session.drain_effects();

        session.export_favorites().unwrap();
        let effects = session.drain_effects();
        assert_eq!(
            effects[0],
            Effect::SaveFile {
                name: "favorite-colors.json".to_string(),
                contents: b"[\n  \"#ff0000\"\n]".to_vec(),
            }
        );
        assert_eq!(effects[1], Effect::Notify(Notice::PaletteExported));
    }

    #[test]
    fn test_apply_sampled_notice() {
        let mut session = Session::default();
        session.apply_sampled(red());
        assert_eq!(session.current_color(), red());
        assert_eq!(notices(&mut session), vec!["Picked color: #ff0000"]);
    }

    #[test]
    fn test_apply_indexed_sources() {
        let mut session = Session::new(5, vec![red(), Color::BLUE]);
        assert!(session.apply_preset(1));
        assert_eq!(session.current_color(), Color::BLUE);
        assert!(!session.apply_preset(2));

        session.apply_color(red());
        assert!(session.apply_history(1));
        assert_eq!(session.current_color(), Color::BLUE);
        assert!(!session.apply_history(9));

        session.add_favorite();
        session.apply_color(Color::WHITE);
        assert!(session.apply_favorite(0));
        assert_eq!(session.current_color(), Color::BLUE);
        assert!(!session.apply_favorite(1));
    }

    #[test]
    fn test_apply_random_recorded() {
        let mut session = Session::default();
        let color = session.apply_random();
        assert_eq!(session.current_color(), color);
        assert_eq!(session.history().get(0), Some(color));
    }

    #[test]
    fn test_text_contrast_follows_current() {
        let mut session = Session::default();
        session.apply_color(Color::WHITE);
        assert_eq!(session.text_contrast(), TextContrast::Dark);
        session.apply_color(Color::BLACK);
        assert_eq!(session.text_contrast(), TextContrast::Light);
    }
}
