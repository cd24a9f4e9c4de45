//! Decoding image tiles from disk into a library the layout and renderer share

use crate::io::configuration::MAX_ASSET_DIMENSION;
use crate::io::error::{Result, TileBloomError, WithPath};
use crate::layout::asset::{AssetId, ImageAsset};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// One decoded tile image
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// File the image was decoded from
    pub path: PathBuf,
    /// Downscaled RGBA pixels
    pub pixels: RgbaImage,
}

/// Decoded tile images plus an optional connector sprite
///
/// Image `i` in the library is the asset behind [`AssetId`] `i`.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    images: Vec<LoadedImage>,
    connector: Option<RgbaImage>,
}

/// Whether `path` has a PNG, JPEG or WebP extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ["png", "jpg", "jpeg", "webp"]
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Shrink `image` so its longer side is at most `max_dimension`, keeping its aspect ratio
pub fn downscale(image: RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let longest = width.max(height);
    if max_dimension == 0 || longest <= max_dimension {
        return image;
    }
    let factor = f64::from(max_dimension) / f64::from(longest);
    let scaled = |side: u32| ((f64::from(side) * factor).round() as u32).max(1);
    image::imageops::resize(&image, scaled(width), scaled(height), FilterType::Triangle)
}

/// Decode `path` and downscale it to the asset size limit
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).with_path(path)?;
    Ok(downscale(decoded.to_rgba8(), MAX_ASSET_DIMENSION))
}

impl AssetLibrary {
    /// Library over already decoded images
    pub fn from_images(images: Vec<LoadedImage>) -> Self {
        Self {
            images,
            connector: None,
        }
    }

    /// Load every PNG and JPEG directly inside `dir`, in file name order
    ///
    /// Files that fail to decode are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed
    #[tracing::instrument(level = "debug")]
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let listing_error = |source| TileBloomError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(listing_error)? {
            let path = entry.map_err(listing_error)?.path();
            if path.is_file() && is_supported_image(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            match load_image(&path) {
                Ok(pixels) => images.push(LoadedImage { path, pixels }),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping undecodable image");
                }
            }
        }
        tracing::debug!(loaded = images.len(), "image assets loaded");
        Ok(Self::from_images(images))
    }

    /// Use the image at `path` as the connector sprite
    ///
    /// A connector that fails to load is logged and left out, so connectors
    /// are simply not drawn.
    #[must_use]
    pub fn with_connector_file(mut self, path: &Path) -> Self {
        match load_image(path) {
            Ok(pixels) => self.connector = Some(pixels),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "connector image unavailable");
            }
        }
        self
    }

    /// Use already decoded pixels as the connector sprite
    #[must_use]
    pub fn with_connector(mut self, pixels: RgbaImage) -> Self {
        self.connector = Some(pixels);
        self
    }

    /// Number of tile images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no tile image loaded
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Loaded tile images in handle order
    pub fn images(&self) -> &[LoadedImage] {
        &self.images
    }

    /// Size descriptions for the layout engine, in handle order
    pub fn assets(&self) -> Vec<ImageAsset> {
        self.images
            .iter()
            .map(|image| ImageAsset::new(image.pixels.width(), image.pixels.height()))
            .collect()
    }

    /// Pixels behind `id`
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a handle of this library
    pub fn pixels(&self, id: AssetId) -> Result<&RgbaImage> {
        self.images
            .get(id.index())
            .map(|image| &image.pixels)
            .ok_or(TileBloomError::InvalidAssetId {
                index: id.index(),
                available: self.images.len(),
            })
    }

    /// Connector sprite pixels, if configured
    pub const fn connector_pixels(&self) -> Option<&RgbaImage> {
        self.connector.as_ref()
    }

    /// Size description of the connector sprite, if configured
    pub fn connector_asset(&self) -> Option<ImageAsset> {
        self.connector
            .as_ref()
            .map(|pixels| ImageAsset::new(pixels.width(), pixels.height()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/assets.rs"]
mod tests;
