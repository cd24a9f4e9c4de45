//! Tests for asset handles and aspect-fit sizing

use super::*;

// Tests handles are numbered in list order
// Verified by starting numbering at one
#[test]
fn test_handles_follow_list_order() {
    let assets = ImageAsset::from_dimensions(&[(10, 20), (30, 40)]);
    assert_eq!(assets.len(), 2);
    assert_eq!(assets.get(1).map(|a| a.width), Some(30));
    assert_eq!(
        ImageAsset::handles(&assets).collect::<Vec<_>>(),
        vec![AssetId(0), AssetId(1)]
    );
    assert_eq!(AssetId(1).index(), 1);
}

// Tests landscape images keep full width
// Verified by inverting the aspect comparison
#[test]
fn test_fit_within_landscape() {
    let asset = ImageAsset::new(200, 100);
    let (w, h) = asset.fit_within(120.0);
    assert!((w - 120.0).abs() < 1e-12);
    assert!((h - 60.0).abs() < 1e-12);
}

// Tests portrait and square images keep full height
// Verified by multiplying width by the inverse aspect
#[test]
fn test_fit_within_portrait_and_square() {
    let portrait = ImageAsset::new(50, 100);
    let (w, h) = portrait.fit_within(100.0);
    assert!((w - 50.0).abs() < 1e-12);
    assert!((h - 100.0).abs() < 1e-12);

    let square = ImageAsset::new(64, 64);
    assert_eq!(square.fit_within(90.0), (90.0, 90.0));
}

// Tests zero-sized images fall back to a square
// Verified by dividing by the zero height
#[test]
fn test_fit_within_degenerate() {
    let broken = ImageAsset::new(0, 40);
    assert_eq!(broken.fit_within(80.0), (80.0, 80.0));
}
