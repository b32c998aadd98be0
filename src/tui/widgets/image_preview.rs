use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::sampler::{RasterSurface, Viewport};
use crate::tui::colors::to_term;

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";

/// Render the uploaded image with half-block cells
///
/// Records the drawn viewport on the app so clicks can be mapped back to pixels.
pub fn render_image_preview(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme.colors;
    let title = match &app.image_name {
        Some(name) => format!(" Image: {} ", name),
        None => " Image ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.image_viewport = None;

    if app.sampler.is_decoding() {
        let message = Paragraph::new("Decoding...").style(Style::default().fg(theme.text_muted));
        frame.render_widget(message, inner);
        return;
    }

    let Some(surface) = app.sampler.surface() else {
        let message = Paragraph::new("Press o to open an image, then click a pixel to pick it")
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.text_muted));
        frame.render_widget(message, inner);
        return;
    };

    // Display space: one unit per column, two per row
    let bounds = Viewport::new(
        u32::from(inner.x),
        u32::from(inner.y) * 2,
        u32::from(inner.width),
        u32::from(inner.height) * 2,
    );
    let viewport = Viewport::fit(bounds, surface.dimensions());
    paint_surface(frame, surface, &viewport, inner);

    app.image_viewport = Some(viewport);
}

fn paint_surface(frame: &mut Frame, surface: &RasterSurface, viewport: &Viewport, inner: Rect) {
    let natural = surface.dimensions();
    let sample = |x: u32, y: u32| {
        viewport
            .to_surface(natural, x, y)
            .ok()
            .and_then(|(sx, sy)| surface.pixel(sx as u32, sy as u32))
    };

    let buf = frame.buffer_mut();
    for row in inner.top()..inner.bottom() {
        for col in inner.left()..inner.right() {
            let (x, y) = (u32::from(col), u32::from(row) * 2);
            let top = sample(x, y);
            let bottom = sample(x, y + 1);

            let Some(cell) = buf.cell_mut((col, row)) else {
                continue;
            };
            match (top, bottom) {
                (Some(top), Some(bottom)) => {
                    cell.set_symbol(UPPER_HALF)
                        .set_fg(to_term(top))
                        .set_bg(to_term(bottom));
                }
                (Some(top), None) => {
                    cell.set_symbol(UPPER_HALF).set_fg(to_term(top));
                }
                (None, Some(bottom)) => {
                    cell.set_symbol(LOWER_HALF).set_fg(to_term(bottom));
                }
                (None, None) => {}
            }
        }
    }
}
