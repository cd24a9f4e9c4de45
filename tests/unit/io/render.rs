//! Tests for tile and connector rasterization

use super::*;
use crate::io::assets::LoadedImage;
use crate::io::error::TileBloomError;
use crate::layout::asset::AssetId;
use std::path::PathBuf;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn library() -> AssetLibrary {
    AssetLibrary::from_images(vec![LoadedImage {
        path: PathBuf::from("red.png"),
        pixels: RgbaImage::from_pixel(10, 10, RED),
    }])
    .with_connector(RgbaImage::from_pixel(4, 4, BLUE))
}

fn tile(opacity: f64, corner_radius: f64) -> NodeDraw {
    NodeDraw {
        node: 0,
        image: AssetId(0),
        center: Point::new(50.0, 50.0),
        draw_width: 20.0,
        draw_height: 20.0,
        scale: 1.0,
        progress: 1.0,
        opacity,
        corner_radius,
    }
}

fn frame(nodes: Vec<NodeDraw>, connectors: Vec<ConnectorDraw>) -> FrameState {
    FrameState {
        elapsed_ms: Some(0.0),
        nodes,
        connectors,
    }
}

fn pixel(canvas: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
    canvas.get_pixel_checked(x, y).copied().expect("pixel out of range")
}

// Tests an empty frame leaves the canvas transparent
// Verified by filling the background
#[test]
fn test_empty_frame_transparent() {
    let library = library();
    let canvas = Rasterizer::new(&library, 16, 8)
        .render(&FrameState::default())
        .expect("render failed");
    assert_eq!(canvas.dimensions(), (16, 8));
    assert!(canvas.pixels().all(|p| p.0[3] == 0));
}

// Tests a settled tile covers its box and nothing else
// Verified by offsetting the box by half its size
#[test]
fn test_tile_covers_box() {
    let library = library();
    let canvas = Rasterizer::new(&library, 100, 100)
        .render(&frame(vec![tile(1.0, 0.0)], Vec::new()))
        .expect("render failed");
    assert_eq!(pixel(&canvas, 50, 50), RED);
    assert_eq!(pixel(&canvas, 40, 40), RED);
    assert_eq!(pixel(&canvas, 59, 59), RED);
    assert_eq!(pixel(&canvas, 39, 50).0[3], 0);
    assert_eq!(pixel(&canvas, 60, 50).0[3], 0);
}

// Tests rounded corners are clipped away
// Verified by ignoring the corner radius
#[test]
fn test_rounded_corners_clipped() {
    let library = library();
    let canvas = Rasterizer::new(&library, 100, 100)
        .render(&frame(vec![tile(1.0, 8.0)], Vec::new()))
        .expect("render failed");
    assert_eq!(pixel(&canvas, 40, 40).0[3], 0);
    assert_eq!(pixel(&canvas, 59, 59).0[3], 0);
    assert_eq!(pixel(&canvas, 50, 40), RED);
    assert_eq!(pixel(&canvas, 50, 50), RED);
}

// Tests opacity scales the painted alpha
// Verified by painting at full opacity
#[test]
fn test_opacity_blends() {
    let library = library();
    let canvas = Rasterizer::new(&library, 100, 100)
        .render(&frame(vec![tile(0.5, 0.0)], Vec::new()))
        .expect("render failed");
    assert_eq!(pixel(&canvas, 50, 50), Rgba([255, 0, 0, 128]));
}

// Tests connectors are painted beneath tiles
// Verified by painting connectors last
#[test]
fn test_connectors_under_tiles() {
    let library = library();
    let connector = ConnectorDraw {
        source: 0,
        target: 1,
        x: 60.0,
        y: 50.0,
        angle: 0.0,
        opacity: 1.0,
        scale: 1.0,
        size: 10.0,
    };
    let canvas = Rasterizer::new(&library, 100, 100)
        .render(&frame(vec![tile(1.0, 0.0)], vec![connector]))
        .expect("render failed");
    assert_eq!(pixel(&canvas, 57, 50), RED);
    assert_eq!(pixel(&canvas, 62, 50), BLUE);
    assert_eq!(pixel(&canvas, 66, 50).0[3], 0);
}

// Tests a rotated connector covers its rotated footprint
// Verified by ignoring the angle
#[test]
fn test_rotated_connector() {
    let library = library();
    let connector = ConnectorDraw {
        source: 0,
        target: 1,
        x: 20.0,
        y: 20.0,
        angle: std::f64::consts::FRAC_PI_4,
        opacity: 1.0,
        scale: 1.0,
        size: 10.0,
    };
    let canvas = Rasterizer::new(&library, 40, 40)
        .render(&frame(Vec::new(), vec![connector]))
        .expect("render failed");
    // A diamond: the axis-aligned corner is empty, the diagonal tip is painted
    assert_eq!(pixel(&canvas, 15, 15).0[3], 0);
    assert_eq!(pixel(&canvas, 20, 25), BLUE);
}

// Tests records for unknown images are rejected
// Verified by skipping unknown images
#[test]
fn test_unknown_image_rejected() {
    let library = library();
    let mut stray = tile(1.0, 0.0);
    stray.image = AssetId(9);
    let result = Rasterizer::new(&library, 100, 100).render(&frame(vec![stray], Vec::new()));
    assert!(matches!(
        result,
        Err(TileBloomError::InvalidAssetId { index: 9, .. })
    ));
}
