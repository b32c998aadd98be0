use image::{DynamicImage, RgbaImage};

use crate::color::{to_hex, Color};
use crate::error::{Error, Result};

/// Decoded pixel buffer of one uploaded image
///
/// Never mutated after decode; a new upload replaces it wholesale.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
}

impl RasterSurface {
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            pixels: image.into_rgba8(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Color at (x, y), alpha ignored
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, _] = p.0;
            Color::new(r, g, b)
        })
    }
}

/// Decode image bytes at their natural size
pub fn load_image(bytes: &[u8]) -> Result<RasterSurface> {
    let image = image::load_from_memory(bytes)?;
    Ok(RasterSurface::from_image(image))
}

/// Exact color of the pixel at surface-local (x, y)
///
/// Coordinates outside the surface are an error, never clamped.
pub fn sample_at(surface: &RasterSurface, x: i64, y: i64) -> Result<Color> {
    let (width, height) = surface.dimensions();
    let out_of_bounds = || Error::OutOfBounds {
        x,
        y,
        width,
        height,
    };

    let px = u32::try_from(x).map_err(|_| out_of_bounds())?;
    let py = u32::try_from(y).map_err(|_| out_of_bounds())?;
    if px >= width || py >= height {
        return Err(out_of_bounds());
    }

    let [r, g, b, _alpha] = surface.pixels.get_pixel(px, py).0;
    to_hex(i64::from(r), i64::from(g), i64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("Failed to encode PNG");
        bytes
    }

    #[test]
    fn test_sample_single_red_pixel() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let surface = load_image(&encode_png(&image)).unwrap();

        assert_eq!(surface.dimensions(), (1, 1));
        assert_eq!(sample_at(&surface, 0, 0).unwrap().to_string(), "#ff0000");
    }

    #[test]
    fn test_sample_ignores_alpha() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let surface = load_image(&encode_png(&image)).unwrap();
        assert_eq!(sample_at(&surface, 1, 1).unwrap(), Color::new(10, 20, 30));
    }

    #[test]
    fn test_sample_distinct_pixels() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(2, 1, Rgba([0, 0, 255, 255]));
        image.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
        let surface = RasterSurface::from_image(DynamicImage::ImageRgba8(image));

        assert_eq!(sample_at(&surface, 2, 1).unwrap(), Color::BLUE);
        assert_eq!(sample_at(&surface, 0, 1).unwrap(), Color::new(0, 255, 0));
        assert_eq!(sample_at(&surface, 0, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let surface = RasterSurface::from_image(DynamicImage::ImageRgba8(RgbaImage::new(4, 3)));

        for (x, y) in [(4, 0), (0, 3), (-1, 0), (0, -1), (100, 100)] {
            assert!(
                matches!(
                    sample_at(&surface, x, y),
                    Err(Error::OutOfBounds {
                        width: 4,
                        height: 3,
                        ..
                    })
                ),
                "({x}, {y})"
            );
        }
    }

    #[test]
    fn test_load_image_rejects_garbage() {
        assert!(matches!(
            load_image(b"definitely not an image"),
            Err(Error::Decode(_))
        ));
        assert!(matches!(load_image(&[]), Err(Error::Decode(_))));
    }

    #[test]
    fn test_pixel_checked() {
        let surface = RasterSurface::from_image(DynamicImage::ImageRgba8(RgbaImage::new(1, 1)));
        assert_eq!(surface.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(surface.pixel(1, 0), None);
    }
}
