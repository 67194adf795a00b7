//! Ordered extraction strategies, tried first-success-wins.
//!
//! The degrade order is a first-class list rather than nested error handling:
//! direct export, then a re-draw onto an opaque surface, then a synthetic
//! placeholder that needs no pixel access at all. Only an export denial
//! advances the chain; any other failure propagates immediately.

use std::fmt;

use image::RgbaImage;
use tracing::debug;

use crate::error::{ClipError, Result};
use crate::extract::{extract_direct, extract_opaque, placeholder, PixelSource};
use crate::geometry::SourceRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Copy straight out of the source image.
    Direct,
    /// Copy onto a white-filled surface first.
    OpaqueRedraw,
    /// Synthesize a placeholder of the selection's dimensions.
    Placeholder,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct export"),
            Self::OpaqueRedraw => write!(f, "opaque re-draw"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Default degrade order. The terminal placeholder strategy cannot fail, so
/// the chain always yields an artifact.
pub const DEFAULT_CHAIN: [ExtractionStrategy; 3] = [
    ExtractionStrategy::Direct,
    ExtractionStrategy::OpaqueRedraw,
    ExtractionStrategy::Placeholder,
];

/// An extracted region plus the strategy that produced it.
pub struct Extraction {
    pub buffer: RgbaImage,
    pub strategy: ExtractionStrategy,
}

/// Run `chain` against the source until a strategy succeeds.
pub fn extract_with_fallback(
    source: &dyn PixelSource,
    rect: &SourceRect,
    chain: &[ExtractionStrategy],
) -> Result<Extraction> {
    for strategy in chain {
        let attempt = match strategy {
            ExtractionStrategy::Direct => extract_direct(source, rect),
            ExtractionStrategy::OpaqueRedraw => extract_opaque(source, rect),
            ExtractionStrategy::Placeholder => placeholder::render(rect.width, rect.height),
        };

        match attempt {
            Ok(buffer) => {
                if *strategy != ExtractionStrategy::Direct {
                    debug!(strategy = %strategy, "extraction degraded");
                }
                return Ok(Extraction {
                    buffer,
                    strategy: *strategy,
                });
            }
            Err(ClipError::ExportDenied) => {
                debug!(strategy = %strategy, "pixel export denied, trying next strategy");
            }
            Err(other) => return Err(other),
        }
    }
    Err(ClipError::ExportDenied)
}
