//! Common test utilities

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use image::{ImageFormat, Rgba, RgbaImage};
use swatch::app::App;
use swatch::config::{Config, PaletteConfig};
use tempfile::TempDir;

/// Encode an RGBA image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// A PNG of a single color
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let [r, g, b] = rgb;
    encode_png(&RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])))
}

/// A 2x2 PNG: red, green / blue, white
pub fn quad_png() -> Vec<u8> {
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    image.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
    image.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
    image.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
    encode_png(&image)
}

/// An app whose exports land in a temporary directory
pub struct TestApp {
    pub dir: TempDir,
    pub app: App,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config {
            palette: PaletteConfig {
                export_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        };
        let app = App::new(config).expect("Failed to create app");
        Self { dir, app }
    }

    /// Write `bytes` into the temp dir and return the path
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Wait for the in-flight decode to be delivered
    pub async fn wait_for_decode(&mut self) {
        for _ in 0..200 {
            self.app.poll_decodes();
            if !self.app.sampler.is_decoding() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("decode did not finish");
    }

    /// Messages of all notifications shown so far
    pub fn messages(&self) -> Vec<String> {
        self.app
            .notifications
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
