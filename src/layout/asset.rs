//! Image handles consumed by the layout engine

/// Opaque handle to an image in the caller's asset list
///
/// The wrapped value is the asset's position in the slice handed to the
/// layout engine; the renderer uses it to look up decoded pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub usize);

impl AssetId {
    /// Position of the asset in its list
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A ready-to-draw image with its intrinsic size
///
/// Its handle is its position in the asset list, see [`AssetId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
}

impl ImageAsset {
    /// Create an asset description
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a list of assets from intrinsic sizes
    pub fn from_dimensions(dimensions: &[(u32, u32)]) -> Vec<Self> {
        dimensions
            .iter()
            .map(|&(width, height)| Self::new(width, height))
            .collect()
    }

    /// Handles of every asset in `assets`, in order
    pub fn handles(assets: &[Self]) -> impl Iterator<Item = AssetId> + '_ {
        (0..assets.len()).map(AssetId)
    }

    /// Dimensions of the image scaled to fit inside a `size` x `size` square
    ///
    /// The longer side becomes `size`. Images that report a zero dimension are
    /// drawn as full squares.
    pub fn fit_within(&self, size: f64) -> (f64, f64) {
        if self.width == 0 || self.height == 0 {
            return (size, size);
        }
        let aspect = f64::from(self.width) / f64::from(self.height);
        if aspect > 1.0 {
            (size, size / aspect)
        } else {
            (size * aspect, size)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/asset.rs"]
mod tests;
