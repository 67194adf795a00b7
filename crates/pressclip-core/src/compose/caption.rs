//! Caption text rendering over embedded DejaVu Sans faces.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::error::{ClipError, Result};

const SANS_REGULAR: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
const SANS_BOLD: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

pub(crate) fn regular() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(SANS_REGULAR).map_err(|_| ClipError::RenderUnavailable {
        reason: "embedded caption font is unreadable".into(),
    })
}

pub(crate) fn bold() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(SANS_BOLD).map_err(|_| ClipError::RenderUnavailable {
        reason: "embedded caption font is unreadable".into(),
    })
}

/// Advance width of `text` at `px`, ignoring kerning.
pub(crate) fn line_width(font: &FontRef<'_>, px: f32, text: &str) -> f32 {
    let scaled = font.as_scaled(PxScale::from(px));
    text.chars()
        .map(|c| scaled.h_advance(font.glyph_id(c)))
        .sum()
}

/// Draw `text` horizontally centered on `center_x`, glyph tops at `top_y`.
/// Out-of-bounds pixels are clipped.
pub(crate) fn draw_centered(
    img: &mut RgbaImage,
    text: &str,
    center_x: f32,
    top_y: i32,
    px: f32,
    font: &FontRef<'_>,
    color: Rgba<u8>,
) {
    let width = line_width(font, px, text);
    let x = (center_x - width / 2.0).round() as i32;
    draw_text_mut(img, color, x, top_y, PxScale::from(px), font, text);
}
