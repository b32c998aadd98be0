use std::path::PathBuf;

use color_eyre::Result;
use tracing::info;

use swatch::tui::Terminal;
use swatch::{logging, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Some(path) = logging::init() {
        info!(log = %path.display(), version = env!("CARGO_PKG_VERSION"), "swatch starting");
    }

    // Optional image to open at startup
    let initial_image = std::env::args_os().nth(1).map(PathBuf::from);

    // Load configuration
    let config = Config::load()?;

    // Initialize terminal
    let terminal = Terminal::new()?;

    // Create and run application
    let mut app = App::new(config)?;
    app.run(terminal, initial_image).await?;

    Ok(())
}
