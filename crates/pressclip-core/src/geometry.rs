use crate::error::{ClipError, Result};

/// Intrinsic pixel dimensions of a raster image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// On-screen rendered dimensions. Fractional: responsive layout and zoom
/// produce non-integer display sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

impl DisplaySize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Unit of a crop region's coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionUnit {
    /// Display pixels.
    Pixels,
    /// Percent of the displayed image size (0..100 per axis).
    Percent,
}

/// A crop rectangle as reported by the selection surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub unit: RegionUnit,
}

impl CropRegion {
    pub fn pixels(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            unit: RegionUnit::Pixels,
        }
    }

    pub fn percent(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            unit: RegionUnit::Percent,
        }
    }

    /// Resolve this region to display pixels against the given displayed size.
    pub fn in_display_pixels(&self, displayed: DisplaySize) -> CropRegion {
        match self.unit {
            RegionUnit::Pixels => self.clone(),
            RegionUnit::Percent => CropRegion::pixels(
                self.x / 100.0 * displayed.width,
                self.y / 100.0 * displayed.height,
                self.width / 100.0 * displayed.width,
                self.height / 100.0 * displayed.height,
            ),
        }
    }
}

/// A rectangle in source-image pixel coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRect {
    /// Validate the rect against the source dimensions.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<SourceRect> {
        if self.width == 0 || self.height == 0 {
            return Err(ClipError::InvalidRegion(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x + self.width > src_w || self.y + self.height > src_h {
            return Err(ClipError::InvalidRegion(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(self.clone())
    }
}

/// A loaded page image: intrinsic resolution plus its current on-screen size.
///
/// Created once the page image reports its natural dimensions; discarded when
/// the page changes. `set_displayed` follows zoom and viewport changes.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayImage {
    natural: Size,
    displayed: DisplaySize,
}

impl DisplayImage {
    pub fn new(natural: Size, displayed: DisplaySize) -> Self {
        Self { natural, displayed }
    }

    pub fn natural(&self) -> Size {
        self.natural
    }

    pub fn displayed(&self) -> DisplaySize {
        self.displayed
    }

    /// Update the on-screen size after a zoom change or window resize.
    pub fn set_displayed(&mut self, displayed: DisplaySize) {
        self.displayed = displayed;
    }

    /// True once the image has completed layout (nonzero displayed size).
    pub fn has_layout(&self) -> bool {
        self.displayed.width > 0.0 && self.displayed.height > 0.0
    }

    /// Scale factors between natural and displayed resolution.
    ///
    /// Recomputed on every call: a factor captured before a zoom change maps
    /// selections into the wrong pixels, so callers must not cache the result
    /// across display updates.
    pub fn scale_factors(&self) -> Result<(f32, f32)> {
        if !self.has_layout() {
            return Err(ClipError::NotReady);
        }
        Ok((
            self.natural.width as f32 / self.displayed.width,
            self.natural.height as f32 / self.displayed.height,
        ))
    }

    /// Map a display-space crop region into source-image pixels.
    ///
    /// x/width scale by the horizontal factor, y/height by the vertical one.
    /// The result is rounded to integer pixels and clamped to the natural
    /// bounds.
    pub fn to_source_space(&self, region: &CropRegion) -> Result<SourceRect> {
        let (scale_x, scale_y) = self.scale_factors()?;
        let r = region.in_display_pixels(self.displayed);

        let x = (r.x * scale_x).round().max(0.0) as u32;
        let y = (r.y * scale_y).round().max(0.0) as u32;
        let mut width = (r.width * scale_x).round().max(0.0) as u32;
        let mut height = (r.height * scale_y).round().max(0.0) as u32;

        // Rounding may overshoot the image edge by a pixel.
        let x = x.min(self.natural.width);
        let y = y.min(self.natural.height);
        width = width.min(self.natural.width - x);
        height = height.min(self.natural.height - y);

        Ok(SourceRect {
            x,
            y,
            width,
            height,
        })
    }
}
