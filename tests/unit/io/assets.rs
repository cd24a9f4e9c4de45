//! Tests for directory loading, downscaling and handle lookup

use super::*;
use image::Rgba;
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
        .save(&path)
        .expect("Failed to write test image");
    path
}

// Tests supported extensions ignore case
// Verified by matching extensions case-sensitively
#[test]
fn test_supported_extensions() {
    assert!(is_supported_image(Path::new("a.png")));
    assert!(is_supported_image(Path::new("b.JPG")));
    assert!(is_supported_image(Path::new("c.jpeg")));
    assert!(is_supported_image(Path::new("tile.WebP")));
    assert!(!is_supported_image(Path::new("d.gif")));
    assert!(!is_supported_image(Path::new("noext")));
}

// Tests large images shrink to the limit while small ones are untouched
// Verified by scaling every image to the limit
#[test]
fn test_downscale() {
    let wide = downscale(RgbaImage::new(400, 100), 200);
    assert_eq!(wide.dimensions(), (200, 50));
    let tall = downscale(RgbaImage::new(30, 900), 200);
    assert_eq!(tall.dimensions(), (7, 200));
    let small = downscale(RgbaImage::new(64, 32), 200);
    assert_eq!(small.dimensions(), (64, 32));
    let sliver = downscale(RgbaImage::new(1000, 1), 200);
    assert_eq!(sliver.dimensions(), (200, 1));
}

// Tests directory loading sorts files and skips broken or foreign ones
// Verified by failing the whole load on one undecodable file
#[test]
fn test_load_dir() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_png(dir.path(), "b.png", 300, 150);
    write_png(dir.path(), "a.png", 20, 40);
    std::fs::write(dir.path().join("broken.png"), b"not an image").expect("write failed");
    std::fs::write(dir.path().join("notes.txt"), b"ignored").expect("write failed");

    let library = AssetLibrary::load_dir(dir.path()).expect("Failed to load directory");
    assert_eq!(library.len(), 2);
    let names: Vec<_> = library
        .images()
        .iter()
        .filter_map(|image| image.path.file_name()?.to_str())
        .collect();
    assert_eq!(names, ["a.png", "b.png"]);
    assert_eq!(
        library.assets(),
        vec![ImageAsset::new(20, 40), ImageAsset::new(200, 100)]
    );
}

// Tests an empty directory yields an empty library and a missing one an error
// Verified by erroring on empty directories
#[test]
fn test_empty_and_missing_dirs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let library = AssetLibrary::load_dir(dir.path()).expect("Failed to load directory");
    assert!(library.is_empty());
    assert!(library.assets().is_empty());

    let missing = AssetLibrary::load_dir(&dir.path().join("absent"));
    assert!(matches!(
        missing,
        Err(TileBloomError::FileSystem {
            operation: "read directory",
            ..
        })
    ));
}

// Tests connector loading is optional and failures leave it unset
// Verified by propagating the connector load error
#[test]
fn test_connector_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let sprite = write_png(dir.path(), "connector.png", 30, 30);

    let with = AssetLibrary::default().with_connector_file(&sprite);
    assert_eq!(with.connector_asset(), Some(ImageAsset::new(30, 30)));
    assert!(with.connector_pixels().is_some());

    let without = AssetLibrary::default().with_connector_file(&dir.path().join("missing.png"));
    assert!(without.connector_asset().is_none());
}

// Tests pixel lookup rejects foreign handles
// Verified by clamping the handle into range
#[test]
fn test_pixels_lookup() {
    let library = AssetLibrary::from_images(vec![LoadedImage {
        path: PathBuf::from("x.png"),
        pixels: RgbaImage::new(4, 4),
    }]);
    assert!(library.pixels(AssetId(0)).is_ok());
    assert!(matches!(
        library.pixels(AssetId(3)),
        Err(TileBloomError::InvalidAssetId {
            index: 3,
            available: 1
        })
    ));
}
