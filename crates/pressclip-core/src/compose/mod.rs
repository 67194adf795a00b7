//! Composite rendering: masthead top-center, cropped region below it,
//! page/date caption at the bottom, on a white canvas.

pub mod brand;
pub(crate) mod caption;
pub mod layout;

use chrono::Local;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::artifact::CompositeArtifact;
use crate::consts::{
    DATE_LINE_PX, DEFAULT_CAPTION_BAND_HEIGHT, DEFAULT_LOGO_HEIGHT, DEFAULT_LOGO_WIDTH,
    DEFAULT_MIN_CANVAS_WIDTH, DEFAULT_PADDING, PAGE_LINE_PX,
};
use crate::error::{ClipError, Result};
use crate::geometry::Size;

use self::brand::BrandSource;
use self::layout::CompositeLayout;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CAPTION_COLOR: Rgba<u8> = Rgba([51, 51, 51, 255]);

/// Parameters of one compose operation. Constructed fresh per call, never
/// mutated; the layout fields default to the standard composite format and
/// round-trip through TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositeSpec {
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// Caption date. Today's date (d/m/yyyy) when absent.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default = "default_logo_width")]
    pub logo_width: u32,
    #[serde(default = "default_logo_height")]
    pub logo_height: u32,
    #[serde(default = "default_caption_band_height")]
    pub caption_band_height: u32,
    #[serde(default = "default_padding")]
    pub padding: u32,
    #[serde(default = "default_min_canvas_width")]
    pub min_canvas_width: u32,
}

fn default_logo_width() -> u32 {
    DEFAULT_LOGO_WIDTH
}
fn default_logo_height() -> u32 {
    DEFAULT_LOGO_HEIGHT
}
fn default_caption_band_height() -> u32 {
    DEFAULT_CAPTION_BAND_HEIGHT
}
fn default_padding() -> u32 {
    DEFAULT_PADDING
}
fn default_min_canvas_width() -> u32 {
    DEFAULT_MIN_CANVAS_WIDTH
}

impl CompositeSpec {
    pub fn for_page(page_number: u32, total_pages: u32) -> Self {
        Self {
            page_number,
            total_pages,
            date: None,
            logo_width: DEFAULT_LOGO_WIDTH,
            logo_height: DEFAULT_LOGO_HEIGHT,
            caption_band_height: DEFAULT_CAPTION_BAND_HEIGHT,
            padding: DEFAULT_PADDING,
            min_canvas_width: DEFAULT_MIN_CANVAS_WIDTH,
        }
    }

    /// First caption line.
    pub fn page_line(&self) -> String {
        format!("Page {} of {}", self.page_number, self.total_pages)
    }

    /// Second caption line: the supplied date, or today's.
    pub fn date_line(&self) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => Local::now().format("%-d/%-m/%Y").to_string(),
        }
    }
}

impl Default for CompositeSpec {
    fn default() -> Self {
        Self::for_page(1, 1)
    }
}

/// Compose the final shareable artifact from an extracted region.
///
/// The brand mark is loaded through `brand`; a load failure is not an error
/// but switches to the degraded layout without the logo band. Encoder
/// failures surface as [`ClipError::RenderUnavailable`] and leave no partial
/// artifact behind.
pub fn compose(
    region: &RgbaImage,
    spec: &CompositeSpec,
    brand: &dyn BrandSource,
) -> Result<CompositeArtifact> {
    let region_size = Size::new(region.width(), region.height());
    if region_size.width == 0 || region_size.height == 0 {
        return Err(ClipError::InvalidRegion(
            "cannot compose an empty region".into(),
        ));
    }

    let brand_image = match brand.load() {
        Ok(img) => Some(img),
        Err(err) => {
            debug!(error = %err, "brand mark unavailable, composing degraded layout");
            None
        }
    };

    let layout = CompositeLayout::compute(region_size, spec, brand_image.is_some());
    let mut canvas =
        RgbaImage::from_pixel(layout.canvas.width, layout.canvas.height, BACKGROUND);

    if let (Some(logo), Some(img)) = (&layout.logo, &brand_image) {
        // Fixed box: the mark is stretched to logo_width x logo_height.
        let scaled = imageops::resize(img, logo.width, logo.height, FilterType::Triangle);
        imageops::overlay(&mut canvas, &scaled, logo.x as i64, logo.y as i64);
    }

    imageops::overlay(
        &mut canvas,
        region,
        layout.region_x as i64,
        layout.region_y as i64,
    );

    draw_caption(&mut canvas, spec, &layout)?;

    CompositeArtifact::from_image(&canvas)
}

fn draw_caption(canvas: &mut RgbaImage, spec: &CompositeSpec, layout: &CompositeLayout) -> Result<()> {
    let bold = caption::bold()?;
    let regular = caption::regular()?;
    let center_x = layout.canvas.width as f32 / 2.0;

    // Baselines sit 20 and 40 px into the caption band.
    let line1_top = layout.caption_y as i32 + 20 - PAGE_LINE_PX as i32;
    let line2_top = layout.caption_y as i32 + 40 - DATE_LINE_PX as i32;

    caption::draw_centered(
        canvas,
        &spec.page_line(),
        center_x,
        line1_top,
        PAGE_LINE_PX,
        &bold,
        CAPTION_COLOR,
    );
    caption::draw_centered(
        canvas,
        &spec.date_line(),
        center_x,
        line2_top,
        DATE_LINE_PX,
        &regular,
        CAPTION_COLOR,
    );
    Ok(())
}
