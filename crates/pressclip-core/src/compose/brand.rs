//! Brand-mark collaborator seam.

use std::path::PathBuf;

use image::RgbaImage;

use crate::error::{ClipError, Result};

/// Loads the masthead image. One call, two outcomes: the decoded image, or
/// [`ClipError::BrandAssetUnavailable`] — which the compositor recovers from
/// with the degraded layout, never as a user-facing error.
pub trait BrandSource {
    fn load(&self) -> Result<RgbaImage>;
}

/// Brand mark read from a static file.
pub struct FileBrand {
    path: PathBuf,
}

impl FileBrand {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BrandSource for FileBrand {
    fn load(&self) -> Result<RgbaImage> {
        image::open(&self.path)
            .map(|img| img.to_rgba8())
            .map_err(|err| ClipError::BrandAssetUnavailable {
                reason: format!("{}: {err}", self.path.display()),
            })
    }
}

/// Deployments without a masthead asset.
pub struct NoBrand;

impl BrandSource for NoBrand {
    fn load(&self) -> Result<RgbaImage> {
        Err(ClipError::BrandAssetUnavailable {
            reason: "no brand asset configured".into(),
        })
    }
}
