use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::color::Color;
use crate::theme::ThemeColors;
use crate::tui::colors::to_term;

/// Render a selectable list of colors
pub fn render_color_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    colors: &[Color],
    state: &mut ListState,
    focused: bool,
    theme: &ThemeColors,
) {
    let border = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if colors.is_empty() {
        let empty = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(theme.text_muted));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = colors
        .iter()
        .map(|color| ListItem::new(swatch_line(*color, theme)))
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list
            .highlight_style(
                Style::default()
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
    }

    frame.render_stateful_widget(list, area, state);
}

/// Render the numbered preset colors
pub fn render_presets(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme.colors;
    let block = Block::default()
        .title(" Presets ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let current = app.session.current_color();
    let lines: Vec<Line> = app
        .session
        .presets()
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, color)| {
            let mut spans = vec![Span::styled(
                format!("{} ", i + 1),
                Style::default().fg(theme.key).add_modifier(Modifier::BOLD),
            )];
            spans.extend(swatch_line(*color, theme).spans);
            if *color == current {
                spans.push(Span::styled(" *", Style::default().fg(theme.accent)));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// "██ #rrggbb"
fn swatch_line(color: Color, theme: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled("██", Style::default().fg(to_term(color))),
        Span::raw(" "),
        Span::styled(color.hex(), Style::default().fg(theme.text)),
    ])
}
