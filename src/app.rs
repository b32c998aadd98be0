use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tachyonfx::Interpolation;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::action::{Action, ActionDispatcher, ActionHandler};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::sampler::{DecodeCompletion, DecodeOutcome, PixelSampler, Viewport};
use crate::session::{Effect, Session};
use crate::theme::Theme;
use crate::tui::{render, Event, EventHandler, Terminal};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Insert => write!(f, "Insert"),
        }
    }
}

/// What the input line is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prompt {
    #[default]
    None,
    ImagePath,
    HexColor,
}

impl Prompt {
    pub fn label(&self) -> &'static str {
        match self {
            Prompt::None => "",
            Prompt::ImagePath => "Image path",
            Prompt::HexColor => "Color",
        }
    }
}

/// Which side list receives navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    History,
    Favorites,
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Notification duration
const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Slide-out animation duration
const SLIDE_OUT_DURATION_MS: u128 = 300;

/// Brightness step per key press (percent)
const BRIGHTNESS_STEP: i32 = 10;

/// Gradient rotation per key press (degrees)
const ANGLE_STEP: i32 = 15;

/// Notification with slide-out animation
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + NOTIFICATION_DURATION,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Calculate slide-out offset (0 to popup_width) for the last 300ms
    /// Returns 0 when not sliding, increases as it slides out
    pub fn slide_offset(&self, popup_width: u16) -> u16 {
        let now = Instant::now();
        if now >= self.expires_at {
            return popup_width;
        }
        let remaining_ms = self.expires_at.duration_since(now).as_millis();

        if remaining_ms >= SLIDE_OUT_DURATION_MS {
            return 0;
        }

        let progress = 1.0 - (remaining_ms as f32 / SLIDE_OUT_DURATION_MS as f32);

        // QuadOut: 1 - (1-t)^2
        let eased = Interpolation::QuadOut.alpha(progress);

        (popup_width as f32 * eased) as u16
    }
}

/// Main application state
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub mode: Mode,
    pub prompt: Prompt,
    pub focus: Focus,

    // Side lists
    pub history_state: ListState,
    pub favorites_state: ListState,

    // Input state
    pub input_buffer: String,
    pub show_help: bool,

    // Notifications (stacked, newest at end)
    pub notifications: Vec<Notification>,

    // Exit flag
    pub should_quit: bool,

    // Core
    pub session: Session,
    pub sampler: PixelSampler,
    pub image_name: Option<String>,
    pending_image_name: Option<String>,

    // Last drawn geometry, for mouse hit-testing
    pub image_viewport: Option<Viewport>,
    pub swatch_area: Option<Rect>,

    action_dispatcher: ActionDispatcher,
    decode_tx: UnboundedSender<DecodeCompletion>,
    decode_rx: UnboundedReceiver<DecodeCompletion>,
    clipboard: Option<arboard::Clipboard>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let action_dispatcher = ActionDispatcher::new(&config);
        let session = Session::new(config.history_capacity(), config.presets());
        let theme = config.theme();
        let (decode_tx, decode_rx) = unbounded_channel();

        Ok(Self {
            config,
            theme,
            mode: Mode::Normal,
            prompt: Prompt::None,
            focus: Focus::History,
            history_state: ListState::default(),
            favorites_state: ListState::default(),
            input_buffer: String::new(),
            show_help: false,
            notifications: Vec::new(),
            should_quit: false,
            session,
            sampler: PixelSampler::new(),
            image_name: None,
            pending_image_name: None,
            image_viewport: None,
            swatch_area: None,
            action_dispatcher,
            decode_tx,
            decode_rx,
            clipboard: None,
        })
    }

    /// Run the application main loop
    pub async fn run(&mut self, mut terminal: Terminal, initial_image: Option<PathBuf>) -> Result<()> {
        let event_handler = EventHandler::default();

        if let Some(path) = initial_image {
            self.open_image(&path).await;
        }

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            if let Some(event) = event_handler.poll()? {
                self.handle_event(event).await?;
            }

            self.poll_decodes();

            // Clear expired notifications
            self.notifications.retain(|n| !n.is_expired());
        }

        Ok(())
    }

    /// Handle an event
    async fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Key(key) => self.action_dispatcher.dispatch(key, &self.mode),
            Event::Click { column, row } => Some(Action::Click { column, row }),
            Event::Resize | Event::Tick => None,
        };

        if let Some(action) = action {
            ActionHandler::handle(self, action).await?;
        }
        Ok(())
    }

    /// Read an image file and start decoding it off the event loop
    pub async fn open_image(&mut self, path: &Path) {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                info!(path = %path.display(), size = bytes.len(), "image upload");
                let job = self.sampler.begin_upload(bytes);
                job.spawn(self.decode_tx.clone());
                // Shown only once this upload installs
                self.pending_image_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read image");
                self.show_error(format!("{}: {}", path.display(), err));
            }
        }
    }

    /// Install any finished decodes
    pub fn poll_decodes(&mut self) {
        while let Ok(completion) = self.decode_rx.try_recv() {
            self.handle_decode(completion);
        }
    }

    /// Deliver one decode completion to the sampler
    pub fn handle_decode(&mut self, completion: DecodeCompletion) {
        match self.sampler.finish(completion) {
            Ok(DecodeOutcome::Installed { width, height }) => {
                self.image_name = self.pending_image_name.take();
                self.notify(Notification::info(format!(
                    "Image loaded ({}x{})",
                    width, height
                )));
            }
            Ok(DecodeOutcome::Stale) => {}
            Err(err) => {
                self.pending_image_name = None;
                self.show_error(err.to_string());
            }
        }
    }

    /// Display-space point on the image for a cell, if any
    ///
    /// A half-block cell covers display rows `row * 2` and `row * 2 + 1`; the
    /// viewport may start on either, so the top one is tried first.
    fn image_point(&self, column: u16, row: u16) -> Option<(Viewport, u32, u32)> {
        let viewport = self.image_viewport?;
        let x = u32::from(column);
        let top = u32::from(row) * 2;
        [top, top + 1]
            .into_iter()
            .find(|y| viewport.contains(x, *y))
            .map(|y| (viewport, x, y))
    }

    /// Sample the image at a terminal cell
    pub fn sample_cell(&mut self, column: u16, row: u16) {
        let Some((viewport, x, y)) = self.image_point(column, row) else {
            let err = match self.image_viewport {
                Some(viewport) => Error::OutOfBounds {
                    x: i64::from(column),
                    y: i64::from(row) * 2,
                    width: viewport.width,
                    height: viewport.height,
                },
                None => Error::NoImage,
            };
            self.show_error(err.to_string());
            return;
        };

        match self.sampler.sample_display(&viewport, x, y) {
            Ok(color) => self.session.apply_sampled(color),
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Whether a cell lies on the drawn image preview
    pub fn is_on_image(&self, column: u16, row: u16) -> bool {
        self.image_point(column, row).is_some()
    }

    /// Whether a cell lies on the color swatch
    pub fn is_on_swatch(&self, column: u16, row: u16) -> bool {
        self.swatch_area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    /// Carry out the effects queued by the session
    ///
    /// When a clipboard write or file save fails, its success notice is dropped
    /// and an error is shown instead.
    pub fn process_effects(&mut self) {
        let mut skip_notice = false;

        for effect in self.session.drain_effects() {
            match effect {
                Effect::Notify(notice) => {
                    if !std::mem::take(&mut skip_notice) {
                        self.notify(Notification::info(notice.to_string()));
                    }
                }
                Effect::CopyToClipboard(text) => {
                    if let Err(err) = self.write_clipboard(&text) {
                        warn!(error = %err, "clipboard write failed");
                        self.show_error(err.to_string());
                        skip_notice = true;
                    }
                }
                Effect::SaveFile { name, contents } => {
                    let path = self.config.export_dir().join(&name);
                    match std::fs::write(&path, contents) {
                        Ok(()) => info!(path = %path.display(), "exported file"),
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "export failed");
                            self.show_error(format!("{}: {}", path.display(), err));
                            skip_notice = true;
                        }
                    }
                }
            }
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }

    /// Show error notification
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    /// Show notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Open the input line for `prompt`
    pub fn start_prompt(&mut self, prompt: Prompt) {
        self.prompt = prompt;
        self.mode = Mode::Insert;
        self.input_buffer.clear();
    }

    /// Close the input line, returning what was typed
    pub fn finish_prompt(&mut self) -> (Prompt, String) {
        self.mode = Mode::Normal;
        let prompt = std::mem::take(&mut self.prompt);
        (prompt, std::mem::take(&mut self.input_buffer))
    }

    pub fn adjust_brightness(&mut self, up: bool) {
        let delta = if up { BRIGHTNESS_STEP } else { -BRIGHTNESS_STEP };
        self.session.adjust_brightness(delta);
    }

    pub fn rotate_gradient(&mut self, clockwise: bool) {
        let delta = if clockwise { ANGLE_STEP } else { -ANGLE_STEP };
        self.session.rotate_gradient(delta);
    }

    /// Step the gradient's secondary color to the next preset
    ///
    /// Starts from the preset after the current secondary color, or the first
    /// preset when the secondary color is not one of them.
    pub fn cycle_secondary(&mut self) {
        let state = *self.session.state();
        let presets = self.session.presets();
        if presets.is_empty() {
            return;
        }
        let next = presets
            .iter()
            .position(|c| *c == state.secondary_color)
            .map_or(0, |idx| (idx + 1) % presets.len());
        let secondary = presets[next];
        self.session.set_gradient(
            state.gradient_enabled,
            i32::from(state.gradient_angle),
            secondary,
        );
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::History => self.session.history().len(),
            Focus::Favorites => self.session.favorites().len(),
        }
    }

    fn focused_state(&mut self) -> &mut ListState {
        match self.focus {
            Focus::History => &mut self.history_state,
            Focus::Favorites => &mut self.favorites_state,
        }
    }

    /// Switch focus between history and favorites
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::History => Focus::Favorites,
            Focus::Favorites => Focus::History,
        };
        if self.focused_len() > 0 && self.focused_state().selected().is_none() {
            self.focused_state().select(Some(0));
        }
    }

    /// Index selected in the focused list, if it is in range
    pub fn selected_index(&self) -> Option<usize> {
        let state = match self.focus {
            Focus::History => &self.history_state,
            Focus::Favorites => &self.favorites_state,
        };
        state.selected().filter(|idx| *idx < self.focused_len())
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }

        let state = self.focused_state();
        let current = state.selected().unwrap_or(0).min(len - 1);
        let next = if current == 0 { len - 1 } else { current - 1 };
        state.select(Some(next));
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }

        let state = self.focused_state();
        let next = match state.selected() {
            Some(current) => (current + 1) % len,
            None => 0,
        };
        state.select(Some(next));
    }

    /// Move to top
    pub fn move_top(&mut self) {
        if self.focused_len() > 0 {
            self.focused_state().select(Some(0));
        }
    }

    /// Move to bottom
    pub fn move_bottom(&mut self) {
        let len = self.focused_len();
        if len > 0 {
            self.focused_state().select(Some(len - 1));
        }
    }

    /// Keep list selections inside their lists after they shrink
    pub fn clamp_selections(&mut self) {
        let history_len = self.session.history().len();
        let favorites_len = self.session.favorites().len();
        clamp_selection(&mut self.history_state, history_len);
        clamp_selection(&mut self.favorites_state, favorites_len);
    }
}

fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        Some(_) if len == 0 => state.select(None),
        Some(idx) if idx >= len => state.select(Some(len - 1)),
        _ => {}
    }
}
