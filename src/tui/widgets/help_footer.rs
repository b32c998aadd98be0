use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

/// Render the help footer widget
pub fn render_help_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme.colors;
    let help_text = match app.mode {
        Mode::Normal => get_normal_mode_help(),
        Mode::Insert => get_insert_mode_help(),
    };

    let spans: Vec<Span> = help_text
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default().fg(theme.key).add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(theme.description)),
                Span::raw("  "),
            ]
        })
        .collect();

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bar_bg));

    frame.render_widget(paragraph, area);
}

fn get_normal_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1-9", "Preset"),
        ("r", "Random"),
        ("u", "Undo"),
        ("y", "Copy"),
        ("f", "Fav"),
        ("e", "Export"),
        ("o", "Image"),
        ("?", "Help"),
        ("q", "Quit"),
    ]
}

fn get_insert_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![("Esc", "Cancel"), ("Enter", "Confirm"), ("C-w", "Del Word")]
}
