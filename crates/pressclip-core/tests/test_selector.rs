use pressclip_core::error::ClipError;
use pressclip_core::geometry::{CropRegion, DisplayImage, DisplaySize, Size};
use pressclip_core::select::{CropSelector, SelectorConfig, SelectorState};

fn loaded_selector() -> CropSelector {
    let mut selector = CropSelector::new(SelectorConfig::default());
    selector.image_loaded(DisplayImage::new(
        Size::new(1600, 2000),
        DisplaySize::new(800.0, 1000.0),
    ));
    selector
}

#[test]
fn crop_mode_requires_a_loaded_image() {
    let mut selector = CropSelector::new(SelectorConfig::default());
    assert!(matches!(
        selector.enter_crop_mode(),
        Err(ClipError::NotReady)
    ));
    assert_eq!(selector.state(), SelectorState::Idle);
}

#[test]
fn default_selection_is_top_centered_and_capped() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();

    let selection = selector.selection().unwrap();
    // 20% of 1600 = 320, capped at 300.
    assert_eq!(selection.width, 300.0);
    assert_eq!(selection.height, 300.0);
    assert_eq!(selection.y, 0.0);
    assert_eq!(selection.x, (800.0 - 300.0) / 2.0);
}

#[test]
fn default_selection_uses_fraction_below_cap() {
    let mut selector = CropSelector::new(SelectorConfig::default());
    selector.image_loaded(DisplayImage::new(
        Size::new(1000, 800),
        DisplaySize::new(1000.0, 800.0),
    ));
    selector.enter_crop_mode().unwrap();

    let selection = selector.selection().unwrap();
    // 20% of 1000 = 200, under the 300 cap.
    assert_eq!(selection.width, 200.0);
    assert_eq!(selection.height, 160.0);
}

#[test]
fn commit_freezes_the_live_selection() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();

    selector.update_selection(CropRegion::pixels(100.0, 50.0, 200.0, 150.0));
    assert_eq!(selector.state(), SelectorState::Selecting);
    assert!(selector.committed().is_none());

    selector.commit().unwrap();
    assert_eq!(selector.state(), SelectorState::Committed);
    assert_eq!(
        selector.committed(),
        Some(&CropRegion::pixels(100.0, 50.0, 200.0, 150.0))
    );
    assert!(selector.can_accept());
}

#[test]
fn too_small_selection_is_not_committable() {
    // Width or height under 50 display px must never reach extraction.
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();

    selector.update_selection(CropRegion::pixels(0.0, 0.0, 49.0, 200.0));
    assert!(matches!(
        selector.commit(),
        Err(ClipError::InvalidRegion(_))
    ));
    assert!(!selector.can_accept());

    selector.update_selection(CropRegion::pixels(0.0, 0.0, 200.0, 20.0));
    assert!(selector.commit().is_err());
    assert!(!selector.can_accept());
}

#[test]
fn minimum_applies_to_resolved_percent_selections() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();

    // 5% of 800 = 40 px wide: too small.
    selector.update_selection(CropRegion::percent(0.0, 0.0, 5.0, 20.0));
    assert!(selector.commit().is_err());

    // 10% of 800 = 80 px wide, 10% of 1000 = 100 px tall: fine.
    selector.update_selection(CropRegion::percent(0.0, 0.0, 10.0, 10.0));
    assert!(selector.commit().is_ok());
}

#[test]
fn modifying_a_committed_selection_returns_to_selecting() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    selector.update_selection(CropRegion::pixels(0.0, 0.0, 100.0, 100.0));
    selector.commit().unwrap();

    selector.update_selection(CropRegion::pixels(10.0, 10.0, 100.0, 100.0));
    assert_eq!(selector.state(), SelectorState::Selecting);
    assert!(!selector.can_accept());
}

#[test]
fn cancel_clears_both_selections() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    selector.update_selection(CropRegion::pixels(0.0, 0.0, 100.0, 100.0));
    selector.commit().unwrap();

    selector.cancel();
    assert_eq!(selector.state(), SelectorState::Idle);
    assert!(selector.selection().is_none());
    assert!(selector.committed().is_none());
}

#[test]
fn page_change_resets_an_active_session() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    selector.update_selection(CropRegion::pixels(0.0, 0.0, 100.0, 100.0));
    selector.commit().unwrap();

    selector.page_changed();
    assert_eq!(selector.state(), SelectorState::Idle);
    assert!(selector.image().is_none());
    assert!(selector.committed().is_none());

    // The next page's image must not inherit the old selection.
    selector.image_loaded(DisplayImage::new(
        Size::new(1200, 900),
        DisplaySize::new(600.0, 450.0),
    ));
    assert!(selector.selection().is_none());
}

#[test]
fn new_image_reseeds_selection_while_cropping() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    selector.update_selection(CropRegion::pixels(500.0, 500.0, 200.0, 200.0));
    selector.commit().unwrap();

    selector.image_loaded(DisplayImage::new(
        Size::new(1000, 800),
        DisplaySize::new(500.0, 400.0),
    ));
    assert_eq!(selector.state(), SelectorState::Selecting);
    assert!(selector.committed().is_none());
    let selection = selector.selection().unwrap();
    assert_eq!(selection.y, 0.0);
}

#[test]
fn accept_token_goes_stale_after_cancel() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    selector.update_selection(CropRegion::pixels(0.0, 0.0, 100.0, 100.0));
    selector.commit().unwrap();

    let token = selector.begin_accept().unwrap();
    selector.cancel();

    // The compose finished after the user cancelled: its result is discarded.
    assert!(!selector.finish_accept(token));
    assert_eq!(selector.state(), SelectorState::Idle);
}

#[test]
fn accept_token_commits_when_uninterrupted() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    selector.update_selection(CropRegion::pixels(0.0, 0.0, 100.0, 100.0));
    selector.commit().unwrap();

    let token = selector.begin_accept().unwrap();
    assert!(selector.finish_accept(token));
    assert_eq!(selector.state(), SelectorState::Idle);
    assert!(selector.committed().is_none());
}

#[test]
fn begin_accept_requires_a_commit() {
    let mut selector = loaded_selector();
    selector.enter_crop_mode().unwrap();
    assert!(selector.begin_accept().is_err());
}
