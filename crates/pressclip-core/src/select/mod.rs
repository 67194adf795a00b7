//! Crop selection state machine.
//!
//! Tracks the live selection while the user drags and the committed selection
//! frozen on drag release. One crop session is active per page view; page
//! changes and cancellation reset to `Idle` so stale selections never carry
//! over to another image.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    INITIAL_SELECTION_FRACTION, INITIAL_SELECTION_MAX_PX, MIN_SELECTION_DISPLAY_PX,
};
use crate::error::{ClipError, Result};
use crate::geometry::{CropRegion, DisplayImage, DisplaySize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Smallest committable selection width, in display pixels.
    pub min_width: f32,
    /// Smallest committable selection height, in display pixels.
    pub min_height: f32,
    /// Initial selection size as a fraction of the natural dimensions.
    pub initial_fraction: f32,
    /// Upper bound on the initial selection size, in display pixels.
    pub initial_max: f32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_SELECTION_DISPLAY_PX,
            min_height: MIN_SELECTION_DISPLAY_PX,
            initial_fraction: INITIAL_SELECTION_FRACTION,
            initial_max: INITIAL_SELECTION_MAX_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Crop mode off.
    #[default]
    Idle,
    /// Crop mode on, selection may be dragged.
    Selecting,
    /// Drag released, selection frozen and ready for extraction.
    Committed,
}

/// Proof that an accept was started against the current crop session.
///
/// Redeemed via [`CropSelector::finish_accept`]; a cancel or page change in
/// between invalidates the token, so a compose result that raced a reset is
/// discarded instead of committed.
#[derive(Debug)]
pub struct AcceptToken {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct CropSelector {
    config: SelectorConfig,
    state: SelectorState,
    image: Option<DisplayImage>,
    selection: Option<CropRegion>,
    committed: Option<CropRegion>,
    generation: u64,
}

impl CropSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn image(&self) -> Option<&DisplayImage> {
        self.image.as_ref()
    }

    /// Live selection, updated continuously while dragging.
    pub fn selection(&self) -> Option<&CropRegion> {
        self.selection.as_ref()
    }

    /// Selection frozen on drag release.
    pub fn committed(&self) -> Option<&CropRegion> {
        self.committed.as_ref()
    }

    /// A page image finished loading. While crop mode is active the selection
    /// is reseeded against the new image.
    pub fn image_loaded(&mut self, image: DisplayImage) {
        if self.state != SelectorState::Idle {
            self.selection = initial_selection(&image, &self.config).ok();
            self.committed = None;
            self.state = SelectorState::Selecting;
            debug!("selection reseeded for newly loaded image");
        }
        self.image = Some(image);
    }

    /// The image's on-screen size changed (zoom or viewport resize).
    pub fn display_resized(&mut self, displayed: DisplaySize) {
        if let Some(image) = &mut self.image {
            image.set_displayed(displayed);
        }
    }

    /// Enter crop mode, seeding the default selection rectangle.
    ///
    /// Fails with [`ClipError::NotReady`] until a page image has loaded and
    /// completed layout.
    pub fn enter_crop_mode(&mut self) -> Result<()> {
        let image = self.image.as_ref().ok_or(ClipError::NotReady)?;
        self.selection = Some(initial_selection(image, &self.config)?);
        self.committed = None;
        self.state = SelectorState::Selecting;
        debug!("crop mode entered");
        Ok(())
    }

    /// Replace the live selection during a drag. Any modification of a
    /// committed session drops back to `Selecting`.
    pub fn update_selection(&mut self, region: CropRegion) {
        if self.state == SelectorState::Idle {
            debug!("selection update ignored while idle");
            return;
        }
        self.selection = Some(region);
        if self.state == SelectorState::Committed {
            self.state = SelectorState::Selecting;
        }
    }

    /// Drag release: freeze the live selection as the committed one.
    ///
    /// Selections below the configured minimum (in display pixels) are not
    /// committable.
    pub fn commit(&mut self) -> Result<()> {
        if self.state == SelectorState::Idle {
            return Err(ClipError::InvalidRegion("crop mode is not active".into()));
        }
        let selection = self
            .selection
            .clone()
            .ok_or_else(|| ClipError::InvalidRegion("no selection to commit".into()))?;
        let image = self.image.as_ref().ok_or(ClipError::NotReady)?;

        let resolved = selection.in_display_pixels(image.displayed());
        if resolved.width < self.config.min_width || resolved.height < self.config.min_height {
            return Err(ClipError::InvalidRegion(format!(
                "selection {:.0}x{:.0} is below the minimum {:.0}x{:.0}",
                resolved.width, resolved.height, self.config.min_width, self.config.min_height
            )));
        }

        self.committed = Some(selection);
        self.state = SelectorState::Committed;
        debug!(
            width = resolved.width,
            height = resolved.height,
            "selection committed"
        );
        Ok(())
    }

    /// Whether Accept is enabled: a committed selection exists.
    pub fn can_accept(&self) -> bool {
        self.state == SelectorState::Committed && self.committed.is_some()
    }

    /// Start an accept. The returned token must be redeemed with
    /// [`finish_accept`](Self::finish_accept) once the compose pipeline has
    /// produced its artifact.
    pub fn begin_accept(&self) -> Result<AcceptToken> {
        if !self.can_accept() {
            return Err(ClipError::InvalidRegion(
                "no committed selection to accept".into(),
            ));
        }
        Ok(AcceptToken {
            generation: self.generation,
        })
    }

    /// Redeem an accept token. Returns true and exits to `Idle` when the
    /// session is still the one the token was issued for; returns false when
    /// a cancel or page change happened in between, in which case the caller
    /// must discard the compose result.
    pub fn finish_accept(&mut self, token: AcceptToken) -> bool {
        if token.generation != self.generation || self.state != SelectorState::Committed {
            debug!("stale accept token, compose result discarded");
            return false;
        }
        self.reset_to_idle();
        true
    }

    /// Leave crop mode, discarding both selections and any in-flight compose.
    pub fn cancel(&mut self) {
        debug!("crop session cancelled");
        self.reset_to_idle();
    }

    /// The viewed page changed: drop the image and reset, so no stale
    /// selection survives across page images.
    pub fn page_changed(&mut self) {
        self.image = None;
        self.reset_to_idle();
    }

    fn reset_to_idle(&mut self) {
        self.state = SelectorState::Idle;
        self.selection = None;
        self.committed = None;
        self.generation += 1;
    }
}

/// Default selection: a fraction of the natural size capped at a fixed number
/// of display pixels, horizontally centered, top-aligned.
fn initial_selection(image: &DisplayImage, config: &SelectorConfig) -> Result<CropRegion> {
    if !image.has_layout() {
        return Err(ClipError::NotReady);
    }
    let natural = image.natural();
    let displayed = image.displayed();

    let width = (natural.width as f32 * config.initial_fraction)
        .round()
        .min(config.initial_max)
        .min(displayed.width);
    let height = (natural.height as f32 * config.initial_fraction)
        .round()
        .min(config.initial_max)
        .min(displayed.height);

    let x = ((displayed.width - width) / 2.0).max(0.0);
    Ok(CropRegion::pixels(x, 0.0, width, height))
}
