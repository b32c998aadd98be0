use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::tui::ui::centered_rect;

const HELP: &[(&str, &str)] = &[
    ("1-9", "Apply preset"),
    ("r", "Random color"),
    ("u", "Undo"),
    ("R", "Reset"),
    ("#", "Type a color"),
    ("y", "Copy hex"),
    ("f", "Toggle favorite"),
    ("x", "Remove favorite"),
    ("e", "Export favorites"),
    ("+/-", "Brightness"),
    ("g", "Toggle gradient"),
    ("[/]", "Gradient angle"),
    ("s", "Gradient end color"),
    ("Tab", "History/Favorites"),
    ("j/k", "Move"),
    ("Enter", "Apply selected"),
    ("o", "Open image"),
    ("click", "Pick pixel / copy"),
    ("q", "Quit"),
];

/// Render the key reference overlay
pub fn render_help_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme.colors;
    let dialog_area = centered_rect(50, 80, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>6}  ", key),
                    Style::default().fg(theme.key).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(theme.description)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}
