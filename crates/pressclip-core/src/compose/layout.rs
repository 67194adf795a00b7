//! Deterministic composite layout, computed purely from the region size and
//! the spec so the arithmetic is testable without rendering anything.

use crate::compose::CompositeSpec;
use crate::geometry::Size;

/// Placement of the masthead box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeLayout {
    pub canvas: Size,
    /// Absent in the degraded (no brand mark) layout.
    pub logo: Option<LogoPlacement>,
    pub region_x: u32,
    pub region_y: u32,
    /// Top of the caption band.
    pub caption_y: u32,
}

impl CompositeLayout {
    /// Compute placements for a region of the given size.
    ///
    /// With a brand mark: logo band, then the region, then the caption band,
    /// separated by three paddings. Without one the logo band and one padding
    /// are omitted entirely.
    pub fn compute(region: Size, spec: &CompositeSpec, with_brand: bool) -> CompositeLayout {
        let width = region.width.max(spec.min_canvas_width);

        if with_brand {
            let height =
                spec.logo_height + region.height + spec.caption_band_height + 3 * spec.padding;
            let region_y = spec.logo_height + 2 * spec.padding;
            CompositeLayout {
                canvas: Size::new(width, height),
                logo: Some(LogoPlacement {
                    x: width.saturating_sub(spec.logo_width) / 2,
                    y: spec.padding,
                    width: spec.logo_width,
                    height: spec.logo_height,
                }),
                region_x: (width - region.width.min(width)) / 2,
                region_y,
                caption_y: region_y + region.height + spec.padding,
            }
        } else {
            let height = region.height + spec.caption_band_height + 2 * spec.padding;
            CompositeLayout {
                canvas: Size::new(width, height),
                logo: None,
                region_x: (width - region.width.min(width)) / 2,
                region_y: spec.padding,
                caption_y: region.height + spec.padding,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branded_layout_heights() {
        let spec = CompositeSpec::for_page(3, 8);
        let layout = CompositeLayout::compute(Size::new(600, 600), &spec, true);
        assert_eq!(layout.canvas.width, 600);
        // 32 + 600 + 60 + 3*20
        assert_eq!(layout.canvas.height, 752);
        assert_eq!(layout.region_y, 32 + 40);
        assert_eq!(layout.caption_y, 72 + 600 + 20);
        let logo = layout.logo.unwrap();
        assert_eq!(logo.y, 20);
        assert_eq!((logo.width, logo.height), (189, 32));
        assert_eq!(logo.x, (600 - 189) / 2);
    }

    #[test]
    fn degraded_layout_heights() {
        let spec = CompositeSpec::for_page(3, 8);
        let layout = CompositeLayout::compute(Size::new(600, 600), &spec, false);
        // 600 + 60 + 2*20
        assert_eq!(layout.canvas.height, 700);
        assert!(layout.logo.is_none());
        assert_eq!(layout.region_y, 20);
        assert_eq!(layout.caption_y, 620);
    }

    #[test]
    fn narrow_regions_widen_to_min_canvas() {
        let spec = CompositeSpec::for_page(1, 1);
        let layout = CompositeLayout::compute(Size::new(120, 90), &spec, true);
        assert_eq!(layout.canvas.width, 400);
        // Region centered in the widened canvas.
        assert_eq!(layout.region_x, (400 - 120) / 2);
    }
}
