use std::io::{stdout, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::Result;

pub type CrosstermTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Owns the alternate screen with mouse capture for the life of the app
pub struct Terminal {
    terminal: CrosstermTerminal,
}

impl Terminal {
    /// Enter raw mode and the alternate screen
    ///
    /// A panic hook is chained in so a panic leaves the shell usable before
    /// the report is printed.
    pub fn new() -> Result<Self> {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = Self::restore();
            previous_hook(info);
        }));

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }

    fn restore() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}
