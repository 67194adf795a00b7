#[allow(dead_code)]
mod common;

use pressclip_core::error::ClipError;
use pressclip_core::extract::fallback::{
    extract_with_fallback, ExtractionStrategy, DEFAULT_CHAIN,
};
use pressclip_core::extract::LoadedPage;
use pressclip_core::geometry::SourceRect;

use common::{gradient_page, gradient_pixel, TaintedSource};

fn rect(width: u32, height: u32) -> SourceRect {
    SourceRect {
        x: 0,
        y: 0,
        width,
        height,
    }
}

#[test]
fn readable_source_uses_direct_export() {
    let page = LoadedPage::new(gradient_page(128, 128));
    let extraction = extract_with_fallback(&page, &rect(64, 64), &DEFAULT_CHAIN).unwrap();
    assert_eq!(extraction.strategy, ExtractionStrategy::Direct);
    assert_eq!(*extraction.buffer.get_pixel(10, 10), gradient_pixel(10, 10));
}

#[test]
fn single_denial_falls_back_to_opaque_redraw() {
    let source = TaintedSource::new(gradient_page(128, 128), 1);
    let extraction = extract_with_fallback(&source, &rect(64, 64), &DEFAULT_CHAIN).unwrap();
    assert_eq!(extraction.strategy, ExtractionStrategy::OpaqueRedraw);
    assert_eq!((extraction.buffer.width(), extraction.buffer.height()), (64, 64));
    // The second attempt read real pixels.
    assert_eq!(*extraction.buffer.get_pixel(3, 7), gradient_pixel(3, 7));
}

#[test]
fn full_denial_still_yields_an_artifact() {
    // Direct and re-draw both denied; the chain must still produce a buffer
    // with the committed dimensions.
    let source = TaintedSource::new(gradient_page(1024, 1024), u32::MAX);
    let extraction = extract_with_fallback(&source, &rect(600, 600), &DEFAULT_CHAIN).unwrap();
    assert_eq!(extraction.strategy, ExtractionStrategy::Placeholder);
    assert_eq!(
        (extraction.buffer.width(), extraction.buffer.height()),
        (600, 600)
    );
}

#[test]
fn placeholder_has_fill_border_and_text() {
    // A fully denied 600x600 crop yields a placeholder with visible
    // dimension text.
    let source = TaintedSource::new(gradient_page(1024, 1024), u32::MAX);
    let extraction = extract_with_fallback(&source, &rect(600, 600), &DEFAULT_CHAIN).unwrap();
    let img = &extraction.buffer;

    // Light-gray fill away from the border and text.
    assert_eq!(img.get_pixel(10, 10).0, [240, 240, 240, 255]);
    // Dark 2px border.
    assert_eq!(img.get_pixel(0, 0).0, [51, 51, 51, 255]);
    assert_eq!(img.get_pixel(1, 300).0, [51, 51, 51, 255]);
    assert_eq!(img.get_pixel(599, 599).0, [51, 51, 51, 255]);

    // Text pixels darker than the fill somewhere in the caption rows.
    let has_text = (250..350).any(|y| {
        (200..400).any(|x| {
            let p = img.get_pixel(x, y).0;
            p[0] < 200 && p[1] < 200 && p[2] < 200
        })
    });
    assert!(has_text, "expected dimension text inside the placeholder");
}

#[test]
fn non_denial_errors_propagate_immediately() {
    // An out-of-bounds rect is a caller bug, not a taint condition: the chain
    // must not degrade it into a placeholder.
    let page = LoadedPage::new(gradient_page(64, 64));
    let result = extract_with_fallback(&page, &rect(128, 128), &DEFAULT_CHAIN);
    assert!(matches!(result, Err(ClipError::InvalidRegion(_))));
}

#[test]
fn chain_order_is_direct_then_opaque_then_placeholder() {
    assert_eq!(
        DEFAULT_CHAIN,
        [
            ExtractionStrategy::Direct,
            ExtractionStrategy::OpaqueRedraw,
            ExtractionStrategy::Placeholder,
        ]
    );
}
