use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus, Mode, NotificationLevel};

use super::widgets::{
    render_color_list, render_help_dialog, render_help_footer, render_image_preview,
    render_presets, render_prompt, render_swatch,
};

/// Width of the right-hand column with presets, history and favorites
const SIDEBAR_WIDTH: u16 = 26;

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header_area);

    // Body layout: swatch and image on the left, lists on the right
    let [main_area, side_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDEBAR_WIDTH)])
            .areas(body_area);

    let [swatch_area, image_area] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Fill(1)]).areas(main_area);

    render_swatch(frame, app, swatch_area);
    render_image_preview(frame, app, image_area);

    let preset_height = app.session.presets().len().min(9) as u16 + 2;
    let [presets_area, history_area, favorites_area] = Layout::vertical([
        Constraint::Length(preset_height),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(side_area);

    render_presets(frame, app, presets_area);

    let theme = app.theme.colors.clone();
    let history = app.session.history().all().to_vec();
    render_color_list(
        frame,
        history_area,
        " History ",
        &history,
        &mut app.history_state,
        app.focus == Focus::History,
        &theme,
    );

    let favorites = app.session.favorites().list().to_vec();
    render_color_list(
        frame,
        favorites_area,
        " Favorites ",
        &favorites,
        &mut app.favorites_state,
        app.focus == Focus::Favorites,
        &theme,
    );

    render_help_footer(frame, app, footer_area);

    if app.mode == Mode::Insert {
        render_prompt(frame, app, area);
    }

    if app.show_help {
        render_help_dialog(frame, app, area);
    }

    // Render notifications (stacked popups in bottom-right)
    if !app.notifications.is_empty() {
        render_notifications(frame, app, area);
    }
}

/// Render header bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let mode_str = format!("[{}]", app.mode);
    let title = "swatch - Color Picker";

    let header_text = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(colors.header)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(
            " ".repeat(
                area.width
                    .saturating_sub(title.len() as u16 + mode_str.len() as u16)
                    as usize,
            ),
        ),
        Span::styled(mode_str, Style::default().fg(colors.accent)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors.bar_bg));

    frame.render_widget(header, area);
}

/// Render notifications as stacked popups in bottom-right
/// Oldest at top, newest at bottom
fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    const POPUP_WIDTH: u16 = 40;
    const POPUP_HEIGHT: u16 = 3;
    const MAX_VISIBLE: usize = 5;

    let colors = &app.theme.colors;
    let start_idx = app.notifications.len().saturating_sub(MAX_VISIBLE);
    let count = app.notifications.len() - start_idx;

    for (i, notification) in app.notifications[start_idx..].iter().enumerate() {
        let (label, border_color) = match notification.level {
            NotificationLevel::Info => ("INFO", colors.success),
            NotificationLevel::Error => ("ERROR", colors.error),
        };

        let slide_offset = notification.slide_offset(POPUP_WIDTH + 2);

        // i=0 is oldest (top), i=count-1 is newest (bottom)
        let y_offset = (count - 1 - i) as u16 * POPUP_HEIGHT;
        let base_x = area.width.saturating_sub(POPUP_WIDTH + 1);
        let popup_x = base_x + slide_offset;
        let popup_y = area.height.saturating_sub(POPUP_HEIGHT + 1 + y_offset);

        if popup_x >= area.width {
            continue;
        }

        let visible_width = area.width.saturating_sub(popup_x).min(POPUP_WIDTH);
        if visible_width == 0 {
            continue;
        }

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: visible_width,
            height: POPUP_HEIGHT,
        };

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", label))
            .title_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            );

        let max_msg_width = visible_width.saturating_sub(4) as usize;
        let msg = truncate_to_width(&notification.message, max_msg_width);

        let paragraph = Paragraph::new(msg).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Truncate to a display width, ending with "..." when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center);

    center
}
