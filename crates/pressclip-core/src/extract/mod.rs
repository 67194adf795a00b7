//! Region extraction: copying a committed selection out of the page image
//! into a standalone raster buffer.

pub mod fallback;
pub mod placeholder;

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::geometry::{Size, SourceRect};

const BYTES_PER_PIXEL: usize = 4;

/// Read access to a loaded page image's pixels.
///
/// The narrow seam to the image-source collaborator: the core never fetches,
/// caches, or retries the page image itself.
pub trait PixelSource {
    /// Intrinsic pixel dimensions of the backing image.
    fn natural_size(&self) -> Size;

    /// Copy `rect` (source space) into `dest` starting at (0, 0).
    ///
    /// Fails with [`ClipError::ExportDenied`](crate::error::ClipError) when
    /// the host loaded the image without cross-origin pixel access. That is
    /// an expected condition, handled by the fallback chain rather than
    /// surfaced to the user.
    fn copy_region(&self, rect: &SourceRect, dest: &mut RgbaImage) -> Result<()>;
}

/// A fully decoded page image held in memory. Pixel access always succeeds.
pub struct LoadedPage {
    image: RgbaImage,
}

impl LoadedPage {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode a page image from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl PixelSource for LoadedPage {
    fn natural_size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    fn copy_region(&self, rect: &SourceRect, dest: &mut RgbaImage) -> Result<()> {
        let size = self.natural_size();
        let rect = rect.validated(size.width, size.height)?;

        let src = self.image.as_raw();
        let src_stride = size.width as usize * BYTES_PER_PIXEL;
        let col_offset = rect.x as usize * BYTES_PER_PIXEL;
        let row_bytes = rect.width as usize * BYTES_PER_PIXEL;
        let dest_stride = dest.width() as usize * BYTES_PER_PIXEL;

        let out: &mut [u8] = dest;
        for row in 0..rect.height as usize {
            let src_start = (rect.y as usize + row) * src_stride + col_offset;
            let dst_start = row * dest_stride;
            out[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src[src_start..src_start + row_bytes]);
        }
        Ok(())
    }
}

/// Direct draw-and-export: copy the region onto a fresh surface.
pub fn extract_direct(source: &dyn PixelSource, rect: &SourceRect) -> Result<RgbaImage> {
    let size = source.natural_size();
    let rect = rect.validated(size.width, size.height)?;
    let mut out = RgbaImage::new(rect.width, rect.height);
    source.copy_region(&rect, &mut out)?;
    Ok(out)
}

/// Re-draw onto a fresh opaque surface: white-filled first, so no transparent
/// artifacts leak through when the direct export was denied by a reused
/// compositing context.
pub fn extract_opaque(source: &dyn PixelSource, rect: &SourceRect) -> Result<RgbaImage> {
    let size = source.natural_size();
    let rect = rect.validated(size.width, size.height)?;
    let mut out = RgbaImage::from_pixel(rect.width, rect.height, Rgba([255, 255, 255, 255]));
    source.copy_region(&rect, &mut out)?;
    Ok(out)
}
