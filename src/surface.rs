use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::{debug, info};

use crate::error::{PaintError, PaintResult};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The persistent pixel buffer of the drawing.
///
/// Dimensions are fixed at creation. Every mutation bumps `version` so
/// displays can tell when they are stale.
#[derive(Debug, Clone)]
pub struct Surface {
    image: RgbaImage,
    version: u64,
}

/// Immutable copy of a surface's pixels at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    image: RgbaImage,
}

impl Snapshot {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }
}

impl Surface {
    /// Create a fully transparent surface
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write a single pixel; coordinates outside the surface are ignored.
    pub(crate) fn put_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Apply `f` to every pixel of the clipped rectangle `[x0, x1] x [y0, y1]`,
    /// bumping the version once.
    pub(crate) fn update_region(
        &mut self,
        (x0, y0): (i64, i64),
        (x1, y1): (i64, i64),
        mut f: impl FnMut(u32, u32, Rgba<u8>) -> Option<Rgba<u8>>,
    ) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(i64::from(self.width()) - 1);
        let y1 = y1.min(i64::from(self.height()) - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        for y in y0 as u32..=y1 as u32 {
            for x in x0 as u32..=x1 as u32 {
                let current = *self.image.get_pixel(x, y);
                if let Some(color) = f(x, y, current) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
        self.mark_modified();
    }

    /// Replace the whole pixel buffer in one pass.
    ///
    /// Buffers of the wrong length are rejected and the surface is left as is.
    pub(crate) fn write_buffer(&mut self, buffer: Vec<u8>) -> bool {
        let (width, height) = self.dimensions();
        match RgbaImage::from_raw(width, height, buffer) {
            Some(image) => {
                self.image = image;
                self.mark_modified();
                true
            }
            None => false,
        }
    }

    /// Wipe every pixel to transparent
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        self.mark_modified();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            image: self.image.clone(),
        }
    }

    /// Restore pixels from a snapshot of this surface
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.dimensions() != self.dimensions() {
            debug!(
                "Ignoring snapshot of size {:?} for surface of size {:?}",
                snapshot.dimensions(),
                self.dimensions()
            );
            return;
        }
        self.image.clone_from(&snapshot.image);
        self.mark_modified();
    }

    /// Encode the surface as a PNG file in memory
    pub fn encode_png(&self) -> PaintResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn save_png(&self, path: &Path) -> PaintResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes)?;
        info!("Saved {}x{} drawing to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Pixels as an egui image for display
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.width() as usize, self.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, self.image.as_raw())
    }

    fn mark_modified(&mut self) {
        self.version += 1;
    }
}
