use crate::error::{Error, Result};

/// Where a surface is drawn in display space
///
/// Display units are whatever the renderer paints with; the terminal front end
/// uses half-block cells, so one unit is a column wide and half a row tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Largest viewport with the surface's aspect ratio, centered in the bounds
    pub fn fit(bounds: Viewport, natural: (u32, u32)) -> Viewport {
        let (natural_w, natural_h) = natural;
        if natural_w == 0 || natural_h == 0 || bounds.width == 0 || bounds.height == 0 {
            return Viewport::new(bounds.x, bounds.y, 0, 0);
        }

        let (nw, nh) = (u64::from(natural_w), u64::from(natural_h));
        let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

        // Never upscale beyond the natural size
        let (width, height) = if bw * nh <= bh * nw {
            let width = bw.min(nw);
            (width, (width * nh / nw).max(1))
        } else {
            let height = bh.min(nh);
            ((height * nw / nh).max(1), height)
        };

        let x = bounds.x + ((bw - width) / 2) as u32;
        let y = bounds.y + ((bh - height) / 2) as u32;
        Viewport::new(x, y, width as u32, height as u32)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }

    /// Map a display-space point to surface-local pixel coordinates
    ///
    /// Divides by the display/natural scale factor and floors.
    pub fn to_surface(&self, natural: (u32, u32), x: u32, y: u32) -> Result<(i64, i64)> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            });
        }

        let (natural_w, natural_h) = natural;
        let local_x = u64::from(x - self.x);
        let local_y = u64::from(y - self.y);
        let sx = local_x * u64::from(natural_w) / u64::from(self.width);
        let sy = local_y * u64::from(natural_h) / u64::from(self.height);
        Ok((sx as i64, sy as i64))
    }
}
