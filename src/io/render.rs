//! Software rasterizer painting frame draw records onto an RGBA canvas
//!
//! Connectors are painted first so tiles cover their ends. Both kinds of
//! sprite are sampled nearest-neighbour through the inverse of their
//! placement transform and blended source-over with the record opacity.

use crate::animation::frame::{ConnectorDraw, FrameState, NodeDraw};
use crate::io::assets::AssetLibrary;
use crate::io::error::Result;
use crate::math::Point;
use image::{Rgba, RgbaImage};

/// Paints [`FrameState`]s using the pixels of an [`AssetLibrary`]
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer<'a> {
    library: &'a AssetLibrary,
    width: u32,
    height: u32,
}

/// Pixel-space rectangle clipped to the canvas
struct Span {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl<'a> Rasterizer<'a> {
    /// Rasterizer for a `width` x `height` canvas
    pub const fn new(library: &'a AssetLibrary, width: u32, height: u32) -> Self {
        Self {
            library,
            width,
            height,
        }
    }

    /// Paint `frame` onto a fresh transparent canvas
    ///
    /// # Errors
    ///
    /// Returns an error if a record refers to an image the library does not hold
    pub fn render(&self, frame: &FrameState) -> Result<RgbaImage> {
        let mut canvas = RgbaImage::new(self.width, self.height);
        if let Some(sprite) = self.library.connector_pixels() {
            for connector in &frame.connectors {
                self.paint_connector(&mut canvas, sprite, connector);
            }
        }
        for node in &frame.nodes {
            let pixels = self.library.pixels(node.image)?;
            self.paint_node(&mut canvas, pixels, node);
        }
        Ok(canvas)
    }

    fn paint_node(&self, canvas: &mut RgbaImage, pixels: &RgbaImage, draw: &NodeDraw) {
        let (w, h) = (draw.draw_width, draw.draw_height);
        if draw.opacity <= 0.0 || w <= 0.0 || h <= 0.0 {
            return;
        }
        let left = draw.center.x - w / 2.0;
        let top = draw.center.y - h / 2.0;
        let radius = draw.corner_radius.clamp(0.0, w.min(h) / 2.0);
        let Some(span) = self.span(left, top, left + w, top + h) else {
            return;
        };

        for py in span.y0..span.y1 {
            for px in span.x0..span.x1 {
                let local = Point::new(f64::from(px) + 0.5 - left, f64::from(py) + 0.5 - top);
                if !inside_rounded_rect(local, w, h, radius) {
                    continue;
                }
                if let Some(source) = sample(pixels, local.x / w, local.y / h) {
                    blend(canvas, px, py, source, draw.opacity);
                }
            }
        }
    }

    fn paint_connector(&self, canvas: &mut RgbaImage, sprite: &RgbaImage, draw: &ConnectorDraw) {
        let side = draw.size * draw.scale;
        if draw.opacity <= 0.0 || side <= 0.0 {
            return;
        }
        let reach = side * std::f64::consts::FRAC_1_SQRT_2;
        let Some(span) = self.span(draw.x - reach, draw.y - reach, draw.x + reach, draw.y + reach)
        else {
            return;
        };
        let (sin, cos) = (-draw.angle).sin_cos();

        for py in span.y0..span.y1 {
            for px in span.x0..span.x1 {
                let dx = f64::from(px) + 0.5 - draw.x;
                let dy = f64::from(py) + 0.5 - draw.y;
                let u = cos.mul_add(dx, -sin * dy) / side + 0.5;
                let v = sin.mul_add(dx, cos * dy) / side + 0.5;
                if let Some(source) = sample(sprite, u, v) {
                    blend(canvas, px, py, source, draw.opacity);
                }
            }
        }
    }

    fn span(&self, left: f64, top: f64, right: f64, bottom: f64) -> Option<Span> {
        if ![left, top, right, bottom].iter().all(|v| v.is_finite()) {
            return None;
        }
        let clip = |v: f64, limit: u32| v.clamp(0.0, f64::from(limit)) as u32;
        let span = Span {
            x0: clip(left.floor(), self.width),
            y0: clip(top.floor(), self.height),
            x1: clip(right.ceil(), self.width),
            y1: clip(bottom.ceil(), self.height),
        };
        (span.x0 < span.x1 && span.y0 < span.y1).then_some(span)
    }
}

/// Whether `p` lies inside a `w` x `h` rectangle at the origin with corners rounded by `radius`
fn inside_rounded_rect(p: Point, w: f64, h: f64, radius: f64) -> bool {
    if p.x < 0.0 || p.y < 0.0 || p.x > w || p.y > h {
        return false;
    }
    let nearest = Point::new(p.x.clamp(radius, w - radius), p.y.clamp(radius, h - radius));
    p.distance_squared(nearest) <= radius * radius
}

/// Nearest pixel of `image` at normalized coordinates `(u, v)`, if inside
fn sample(image: &RgbaImage, u: f64, v: f64) -> Option<Rgba<u8>> {
    if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
        return None;
    }
    let x = (u * f64::from(image.width())) as u32;
    let y = (v * f64::from(image.height())) as u32;
    image.get_pixel_checked(x, y).copied()
}

/// Source-over blend of `source` scaled by `opacity` into the canvas
fn blend(canvas: &mut RgbaImage, x: u32, y: u32, source: Rgba<u8>, opacity: f64) {
    let Some(target) = canvas.get_pixel_mut_checked(x, y) else {
        return;
    };
    let [sr, sg, sb, sa] = source.0;
    let [dr, dg, db, da] = target.0;
    let src_alpha = f64::from(sa) / 255.0 * opacity.clamp(0.0, 1.0);
    let dst_alpha = f64::from(da) / 255.0;
    let out_alpha = dst_alpha.mul_add(1.0 - src_alpha, src_alpha);
    if out_alpha <= 0.0 {
        return;
    }
    let channel = |s: u8, d: u8| {
        let mixed = f64::from(s)
            .mul_add(src_alpha, f64::from(d) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        mixed.round().clamp(0.0, 255.0) as u8
    };
    *target = Rgba([
        channel(sr, dr),
        channel(sg, dg),
        channel(sb, db),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}

#[cfg(test)]
#[path = "../../tests/unit/io/render.rs"]
mod tests;
