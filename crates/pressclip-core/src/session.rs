//! Pipeline orchestration: an accepted selection runs map → extract →
//! compose, then the result is committed back to the selector unless the
//! session was reset while the compose was in flight.

use std::fmt;

use tracing::{debug, info};

use crate::artifact::CompositeArtifact;
use crate::compose::brand::BrandSource;
use crate::compose::{compose, CompositeSpec};
use crate::error::{ClipError, Result};
use crate::extract::fallback::{extract_with_fallback, DEFAULT_CHAIN};
use crate::extract::PixelSource;
use crate::select::{CropSelector, SelectorConfig};

/// Pipeline stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum ComposeStage {
    Mapping,
    Extracting,
    Composing,
}

impl fmt::Display for ComposeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping => write!(f, "Mapping selection"),
            Self::Extracting => write!(f, "Extracting region"),
            Self::Composing => write!(f, "Compositing"),
        }
    }
}

/// Result of an accept: the artifact, or notice that the session was reset
/// while composing and the result was discarded.
pub enum ComposeOutcome {
    Composed(CompositeArtifact),
    Cancelled,
}

/// One crop session over the current page view.
#[derive(Default)]
pub struct CropSession {
    selector: CropSelector,
}

impl CropSession {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            selector: CropSelector::new(config),
        }
    }

    pub fn selector(&self) -> &CropSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut CropSelector {
        &mut self.selector
    }

    /// Accept the committed selection: extract it and compose the shareable
    /// artifact.
    ///
    /// Scale factors are derived here, at extraction time — not at
    /// crop-start — so a zoom change between commit and accept still maps
    /// through current display dimensions. On success the selector exits to
    /// `Idle`; on failure it stays `Committed` so the user may retry.
    pub fn accept(
        &mut self,
        source: &dyn PixelSource,
        brand: &dyn BrandSource,
        spec: &CompositeSpec,
    ) -> Result<ComposeOutcome> {
        let token = self.selector.begin_accept()?;
        let image = self.selector.image().cloned().ok_or(ClipError::NotReady)?;
        let committed = self
            .selector
            .committed()
            .cloned()
            .ok_or_else(|| ClipError::InvalidRegion("no committed selection".into()))?;

        debug!(stage = %ComposeStage::Mapping, "accept started");
        let rect = image.to_source_space(&committed)?;

        info!(
            stage = %ComposeStage::Extracting,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "extracting committed selection"
        );
        let extraction = extract_with_fallback(source, &rect, &DEFAULT_CHAIN)?;

        info!(
            stage = %ComposeStage::Composing,
            strategy = %extraction.strategy,
            page = spec.page_number,
            "composing artifact"
        );
        let artifact = compose(&extraction.buffer, spec, brand)?;

        if self.selector.finish_accept(token) {
            info!(
                width = artifact.width,
                height = artifact.height,
                "composite ready"
            );
            Ok(ComposeOutcome::Composed(artifact))
        } else {
            debug!("session reset during compose, artifact discarded");
            Ok(ComposeOutcome::Cancelled)
        }
    }
}
