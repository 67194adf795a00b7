use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipError {
    #[error("Image layout not ready")]
    NotReady,

    #[error("Pixel export denied by image host")]
    ExportDenied,

    #[error("Render context unavailable: {reason}")]
    RenderUnavailable { reason: String },

    #[error("Brand asset unavailable: {reason}")]
    BrandAssetUnavailable { reason: String },

    #[error("Invalid crop region: {0}")]
    InvalidRegion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Clip store error: {0}")]
    Storage(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClipError>;
