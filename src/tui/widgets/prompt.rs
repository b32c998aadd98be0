use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Prompt};
use crate::tui::ui::centered_rect;

/// Render the input prompt dialog
pub fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme.colors;
    let dialog_area = centered_rect(60, 20, area);
    let [dialog_area] = Layout::vertical([Constraint::Length(4)]).areas(dialog_area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {} ", app.prompt.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let [input_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    // Input line: "> {text}│"
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.accent)),
        Span::raw(app.input_buffer.as_str()),
        Span::styled("│", Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let hint = match app.prompt {
        Prompt::ImagePath => "PNG, JPEG, GIF, BMP, ...",
        Prompt::HexColor => "#RRGGBB, #RGB or a CSS name",
        Prompt::None => "",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(theme.text_muted)),
        hint_area,
    );
}
