use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};

use crate::error::{ClipError, Result};

/// The final shareable output: a lossless PNG plus its pixel dimensions.
///
/// Produced exactly once per successful compose and immutable afterwards; the
/// sharing collaborator owns its subsequent lifecycle.
#[derive(Clone, Debug)]
pub struct CompositeArtifact {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl CompositeArtifact {
    /// Encode a finished canvas. PNG keeps the sharp text and line content of
    /// newspaper scans free of recompression artifacts.
    pub fn from_image(image: &RgbaImage) -> Result<Self> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|err| ClipError::RenderUnavailable {
                reason: format!("PNG encode failed: {err}"),
            })?;
        Ok(Self {
            width: image.width(),
            height: image.height(),
            png,
        })
    }

    /// `data:image/png;base64,...` form, as handed to the sharing collaborator.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}
