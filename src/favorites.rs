use tracing::debug;

use crate::color::Color;
use crate::error::Result;

/// File name used when exporting favorites
pub const FAVORITES_FILE_NAME: &str = "favorite-colors.json";

/// Saved colors, in insertion order, without duplicates
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    colors: Vec<Color>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a color. Returns false if it was already saved.
    pub fn add(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }
        self.colors.push(color);
        debug!(%color, len = self.colors.len(), "favorite added");
        true
    }

    /// Remove a color. Returns false if it was not saved.
    pub fn remove(&mut self, color: Color) -> bool {
        let Some(pos) = self.colors.iter().position(|c| *c == color) else {
            return false;
        };
        self.colors.remove(pos);
        debug!(%color, len = self.colors.len(), "favorite removed");
        true
    }

    /// Snapshot in insertion order
    pub fn list(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, idx: usize) -> Option<Color> {
        self.colors.get(idx).copied()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Serialize as a pretty-printed JSON array of hex strings (UTF-8)
    pub fn export_document(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.colors)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0)
    }

    fn green() -> Color {
        Color::new(0, 255, 0)
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.add(red()));
        assert!(!favorites.add(red()));
        assert_eq!(favorites.list(), &[red()]);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut favorites = Favorites::new();
        favorites.add(green());
        favorites.add(red());
        assert_eq!(favorites.list(), &[green(), red()]);
    }

    #[test]
    fn test_remove_restores_previous_state() {
        let mut favorites = Favorites::new();
        favorites.add(red());
        favorites.add(Color::BLUE);
        let before = favorites.list().to_vec();

        favorites.add(green());
        assert!(favorites.remove(green()));
        assert_eq!(favorites.list(), before.as_slice());
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut favorites = Favorites::new();
        favorites.add(red());
        favorites.add(green());
        favorites.add(Color::BLUE);
        favorites.remove(green());
        assert_eq!(favorites.list(), &[red(), Color::BLUE]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = Favorites::new();
        favorites.add(red());
        assert!(!favorites.remove(green()));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_export_document_format() {
        let mut favorites = Favorites::new();
        favorites.add(red());
        favorites.add(green());

        let bytes = favorites.export_document().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "[\n  \"#ff0000\",\n  \"#00ff00\"\n]");
    }

    #[test]
    fn test_export_document_parses_back() {
        let mut favorites = Favorites::new();
        favorites.add(Color::OLIVE);
        favorites.add(red());

        let bytes = favorites.export_document().unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, vec!["#808000", "#ff0000"]);
    }

    #[test]
    fn test_export_empty() {
        let favorites = Favorites::new();
        assert_eq!(favorites.export_document().unwrap(), b"[]");
    }
}
