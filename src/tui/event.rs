use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::error::Result;

/// Poll interval; short enough for the toast slide-out and decode polling
const DEFAULT_TICK_MS: u64 = 16;

/// Terminal input the app reacts to
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    /// Left button pressed on a cell
    Click { column: u16, row: u16 },
    Resize,
    /// Nothing arrived within the tick
    Tick,
}

impl Event {
    /// Keep only left-button presses; drags, scrolls and releases are dropped
    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        }
    }
}

/// Reads crossterm events with a timeout
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    pub fn poll(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Event::Tick));
        }

        let event = match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            event::Event::Mouse(mouse) => Event::from_mouse(mouse),
            event::Event::Resize(_, _) => Some(Event::Resize),
            _ => None,
        };
        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS)
    }
}
