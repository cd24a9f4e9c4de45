//! Plane geometry primitives shared by layout, connectivity and animation

/// A point (or offset) on the canvas in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing rightward
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians)
    pub fn offset_polar(self, angle: f64, radius: f64) -> Self {
        Self {
            x: angle.cos().mul_add(radius, self.x),
            y: angle.sin().mul_add(radius, self.y),
        }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared Euclidean distance to `other`
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: crate::math::easing::lerp(self.x, other.x, t),
            y: crate::math::easing::lerp(self.y, other.y, t),
        }
    }
}

/// Canvas dimensions in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
}

impl Extent {
    /// Create an extent from width and height
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the canvas
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `point` lies at least `margin` inside every edge
    ///
    /// The far edges are exclusive so a point exactly `margin` from the
    /// right or bottom border is rejected.
    pub fn contains_with_margin(self, point: Point, margin: f64) -> bool {
        point.x >= margin
            && point.x < self.width - margin
            && point.y >= margin
            && point.y < self.height - margin
    }

    /// Area remaining after trimming `margin` from both axes, never negative
    pub fn inner_area(self, margin: f64) -> f64 {
        (self.width - margin).max(0.0) * (self.height - margin).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/math/geometry.rs"]
mod tests;
