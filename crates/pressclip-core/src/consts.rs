/// Fixed pixel width of the masthead box in the composite header.
pub const DEFAULT_LOGO_WIDTH: u32 = 189;

/// Fixed pixel height of the masthead box. The brand mark is stretched to
/// exactly this box, not aspect-fitted.
pub const DEFAULT_LOGO_HEIGHT: u32 = 32;

/// Height of the caption band below the cropped region.
pub const DEFAULT_CAPTION_BAND_HEIGHT: u32 = 60;

/// Padding between composite bands.
pub const DEFAULT_PADDING: u32 = 20;

/// Composite canvases narrower than this are widened so the caption stays
/// legible on small crops.
pub const DEFAULT_MIN_CANVAS_WIDTH: u32 = 400;

/// Smallest committable selection, in display pixels.
pub const MIN_SELECTION_DISPLAY_PX: f32 = 50.0;

/// Initial selection size as a fraction of the natural image dimensions.
pub const INITIAL_SELECTION_FRACTION: f32 = 0.2;

/// Upper bound on the initial selection size, in display pixels.
pub const INITIAL_SELECTION_MAX_PX: f32 = 300.0;

/// Font size of the "Page N of M" caption line.
pub const PAGE_LINE_PX: f32 = 16.0;

/// Font size of the caption date line.
pub const DATE_LINE_PX: f32 = 14.0;

/// Font size of the placeholder artifact's text.
pub const PLACEHOLDER_TEXT_PX: f32 = 14.0;

/// Stored clips expire after this many seconds (24 hours).
pub const CLIP_TTL_SECS: i64 = 24 * 60 * 60;
