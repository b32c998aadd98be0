use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "swatch.log";
const DEFAULT_FILTER: &str = "swatch=info";

/// Path of the log file: `<cache_dir>/swatch/swatch.log`
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("swatch").join(LOG_FILE_NAME))
}

/// Build the filter from `RUST_LOG`, falling back to `swatch=info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the file logger at [`log_path`]
///
/// The terminal is owned by the UI, so nothing is logged to stdout or stderr.
pub fn init() -> Option<PathBuf> {
    init_at(log_path()?)
}

/// Install a file logger writing to `path`
///
/// Returns the path only when a subscriber was installed. Logging stays off
/// when the file cannot be opened or a global subscriber already exists.
pub fn init_at(path: PathBuf) -> Option<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}
