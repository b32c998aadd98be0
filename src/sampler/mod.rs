//! Image pixel sampling
//!
//! Decoding runs off the event loop. Every upload gets a generation number and
//! only the completion for the newest generation is installed; older ones are
//! dropped on arrival. Sampling is refused while a decode is outstanding.

mod raster;
mod viewport;

pub use raster::{load_image, sample_at, RasterSurface};
pub use viewport::Viewport;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::color::Color;
use crate::error::{Error, Result};

/// Image bytes waiting to be decoded, tagged with their upload generation
#[derive(Debug)]
pub struct DecodeJob {
    generation: u64,
    bytes: Vec<u8>,
}

impl DecodeJob {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Decode synchronously
    pub fn run(self) -> DecodeCompletion {
        DecodeCompletion {
            generation: self.generation,
            result: load_image(&self.bytes),
        }
    }

    /// Decode on the blocking pool and send the completion to `tx`
    pub fn spawn(self, tx: UnboundedSender<DecodeCompletion>) -> JoinHandle<()> {
        tokio::task::spawn_blocking(move || {
            let completion = self.run();
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(completion);
        })
    }
}

/// Result of decoding one upload
#[derive(Debug)]
pub struct DecodeCompletion {
    pub generation: u64,
    pub result: Result<RasterSurface>,
}

/// What happened when a completion was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The surface is now available for sampling
    Installed { width: u32, height: u32 },
    /// A newer upload started since; the completion was discarded
    Stale,
}

/// Owns the current raster surface and the in-flight decode, if any
#[derive(Debug, Default)]
pub struct PixelSampler {
    surface: Option<RasterSurface>,
    pending: Option<u64>,
    generation: u64,
}

impl PixelSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new upload, superseding any decode still in flight
    pub fn begin_upload(&mut self, bytes: Vec<u8>) -> DecodeJob {
        self.generation += 1;
        if let Some(previous) = self.pending.replace(self.generation) {
            debug!(previous, generation = self.generation, "superseding decode");
        }
        DecodeJob {
            generation: self.generation,
            bytes,
        }
    }

    /// Deliver a decode completion
    ///
    /// A failed decode of the newest upload is returned as an error and the
    /// previously loaded surface, if any, stays in place.
    pub fn finish(&mut self, completion: DecodeCompletion) -> Result<DecodeOutcome> {
        if self.pending != Some(completion.generation) {
            debug!(generation = completion.generation, "ignoring stale decode");
            return Ok(DecodeOutcome::Stale);
        }
        self.pending = None;

        match completion.result {
            Ok(surface) => {
                let (width, height) = surface.dimensions();
                info!(width, height, generation = completion.generation, "image decoded");
                self.surface = Some(surface);
                Ok(DecodeOutcome::Installed { width, height })
            }
            Err(err) => {
                warn!(error = %err, "image decode failed");
                Err(err)
            }
        }
    }

    /// Decode on the blocking pool and install the result
    pub async fn load(&mut self, bytes: Vec<u8>) -> Result<DecodeOutcome> {
        let job = self.begin_upload(bytes);
        let generation = job.generation();
        let completion = match tokio::task::spawn_blocking(move || job.run()).await {
            Ok(completion) => completion,
            Err(err) => DecodeCompletion {
                generation,
                result: Err(std::io::Error::other(err).into()),
            },
        };
        self.finish(completion)
    }

    pub fn is_decoding(&self) -> bool {
        self.pending.is_some()
    }

    /// Surface available for sampling, if any
    pub fn surface(&self) -> Option<&RasterSurface> {
        if self.is_decoding() {
            return None;
        }
        self.surface.as_ref()
    }

    fn ready_surface(&self) -> Result<&RasterSurface> {
        if self.is_decoding() {
            return Err(Error::ImageNotReady);
        }
        self.surface.as_ref().ok_or(Error::NoImage)
    }

    /// Sample at surface-local coordinates
    pub fn sample_at(&self, x: i64, y: i64) -> Result<Color> {
        sample_at(self.ready_surface()?, x, y)
    }

    /// Sample at a display-space point inside `viewport`
    pub fn sample_display(&self, viewport: &Viewport, x: u32, y: u32) -> Result<Color> {
        let surface = self.ready_surface()?;
        let (sx, sy) = viewport.to_surface(surface.dimensions(), x, y)?;
        sample_at(surface, sx, sy)
    }
}
