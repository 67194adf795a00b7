//! Synthetic placeholder artifact, produced when every pixel-based extraction
//! strategy was denied. Communicates the crop dimensions so the user-facing
//! flow still completes with a visible result.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::compose::caption;
use crate::consts::PLACEHOLDER_TEXT_PX;
use crate::error::{ClipError, Result};

const FILL: Rgba<u8> = Rgba([240, 240, 240, 255]);
const BORDER: Rgba<u8> = Rgba([51, 51, 51, 255]);
const TEXT: Rgba<u8> = Rgba([102, 102, 102, 255]);
const BORDER_THICKNESS: u32 = 2;

/// Render a bordered light-gray rectangle of the selection's dimensions,
/// captioned "Cropped Area" and the pixel size.
pub fn render(width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(ClipError::InvalidRegion(
            "placeholder dimensions must be > 0".into(),
        ));
    }

    let mut img = RgbaImage::from_pixel(width, height, FILL);

    for t in 0..BORDER_THICKNESS {
        let inner_w = width.saturating_sub(2 * t);
        let inner_h = height.saturating_sub(2 * t);
        if inner_w > 0 && inner_h > 0 {
            let rect = Rect::at(t as i32, t as i32).of_size(inner_w, inner_h);
            draw_hollow_rect_mut(&mut img, rect, BORDER);
        }
    }

    let font = caption::regular()?;
    let center_x = width as f32 / 2.0;
    // Text baselines sit at mid-height and 20 px below it.
    let line1_top = height as i32 / 2 - PLACEHOLDER_TEXT_PX as i32;
    let line2_top = height as i32 / 2 + 20 - PLACEHOLDER_TEXT_PX as i32;
    caption::draw_centered(
        &mut img,
        "Cropped Area",
        center_x,
        line1_top,
        PLACEHOLDER_TEXT_PX,
        &font,
        TEXT,
    );
    caption::draw_centered(
        &mut img,
        &format!("{width} \u{d7} {height}"),
        center_x,
        line2_top,
        PLACEHOLDER_TEXT_PX,
        &font,
        TEXT,
    );

    Ok(img)
}
