pub mod action;
pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod favorites;
pub mod history;
pub mod logging;
pub mod sampler;
pub mod session;
pub mod theme;
pub mod tui;

pub use app::App;
pub use color::Color;
pub use config::Config;
pub use error::{Error, Result};
pub use sampler::PixelSampler;
pub use session::Session;
