use std::cell::Cell;

use image::{Rgba, RgbaImage};

use pressclip_core::error::{ClipError, Result};
use pressclip_core::extract::{LoadedPage, PixelSource};
use pressclip_core::geometry::{Size, SourceRect};

/// Build a page image with a position-dependent pixel pattern, so extracted
/// regions can be checked against exact source coordinates.
pub fn gradient_page(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

/// The pattern pixel expected at source coordinates (x, y).
pub fn gradient_pixel(x: u32, y: u32) -> Rgba<u8> {
    Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
}

/// A page image whose host denies pixel export for the first `denials`
/// copy attempts — the tainted-canvas condition.
pub struct TaintedSource {
    inner: LoadedPage,
    denials: Cell<u32>,
}

impl TaintedSource {
    pub fn new(image: RgbaImage, denials: u32) -> Self {
        Self {
            inner: LoadedPage::new(image),
            denials: Cell::new(denials),
        }
    }
}

impl PixelSource for TaintedSource {
    fn natural_size(&self) -> Size {
        self.inner.natural_size()
    }

    fn copy_region(&self, rect: &SourceRect, dest: &mut RgbaImage) -> Result<()> {
        let remaining = self.denials.get();
        if remaining > 0 {
            self.denials.set(remaining - 1);
            return Err(ClipError::ExportDenied);
        }
        self.inner.copy_region(rect, dest)
    }
}
