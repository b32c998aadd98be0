use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::color::GradientSpec;
use crate::tui::colors::to_term;

/// Render the large color swatch
pub fn render_swatch(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme.colors;
    let block = Block::default()
        .title(" Color ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.swatch_area = Some(inner);
    if inner.is_empty() {
        return;
    }

    let session = &app.session;
    let state = session.state();
    let brightness = state.brightness_percent;

    match session.gradient() {
        Some(gradient) => paint_gradient(frame, inner, &gradient, brightness),
        None => paint_solid(frame, inner, to_term(session.display_color())),
    }

    let text_color = to_term(session.text_contrast().color());
    let mut lines = vec![
        Line::from(state.current_color.hex()).style(
            Style::default()
                .fg(text_color)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("brightness {}%", brightness)).style(Style::default().fg(text_color)),
    ];
    if let Some(gradient) = session.gradient() {
        lines.push(Line::from(gradient.to_string()).style(Style::default().fg(text_color)));
    }

    let [_, label_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let label = Paragraph::new(lines).centered();
    frame.render_widget(label, label_area);
}

fn paint_solid(frame: &mut Frame, area: Rect, color: ratatui::style::Color) {
    frame.render_widget(Block::default().style(Style::default().bg(color)), area);
}

/// Paint cell backgrounds along the gradient axis
///
/// 0deg points up and angles turn clockwise. Cells are treated as twice as
/// tall as they are wide.
fn paint_gradient(frame: &mut Frame, area: Rect, gradient: &GradientSpec, brightness: u16) {
    let radians = f32::from(gradient.angle).to_radians();
    let (dx, dy) = (radians.sin(), -radians.cos());

    let half_w = f32::from(area.width) / 2.0;
    let half_h = f32::from(area.height);
    let extent = (half_w * dx.abs() + half_h * dy.abs()).max(f32::EPSILON);

    let buf = frame.buffer_mut();
    for row in 0..area.height {
        for col in 0..area.width {
            let px = f32::from(col) + 0.5 - half_w;
            let py = (f32::from(row) + 0.5) * 2.0 - half_h;
            let t = ((px * dx + py * dy) / extent + 1.0) / 2.0;
            let color = gradient.color_at(t).with_brightness(brightness);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_bg(to_term(color));
            }
        }
    }
}
