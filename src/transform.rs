//! 2D affine transforms and transform-aware bounds.
//!
//! A view's visual transform is applied about the center of its frame, the
//! convention native toolkits use for their default anchor point. The
//! transformed rect reported to resolvers is the *loose bounds* of the frame:
//!
//! 1. Take the four corners of the untransformed frame.
//! 2. Map each corner through the transform about the frame center.
//! 3. Take the axis-aligned bounding box of the mapped corners.
//!
//! This matches CSS/SVG transform behavior and what the host view system
//! reports for a transformed view's frame.
//!
//! ## Rotation Convention
//!
//! Rotation angles are in degrees, clockwise positive, with the Y-axis
//! pointing down (screen coordinates): 90° maps right to down.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// A 2D affine transform.
///
/// A point maps as `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`, the
/// component layout native toolkits use for their affine transform type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// The identity transform
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Scale by `sx` horizontally and `sy` vertically.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotate clockwise by `angle_degrees` (Y-down screen coordinates).
    pub fn rotation(angle_degrees: f64) -> Self {
        let radians = angle_degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Translate by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            tx: dx,
            ty: dy,
            ..Self::IDENTITY
        }
    }

    /// Compose two transforms: apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    /// Check if this is effectively a no-op transform.
    pub fn is_identity(&self) -> bool {
        (self.a - 1.0).abs() < f64::EPSILON
            && self.b.abs() < f64::EPSILON
            && self.c.abs() < f64::EPSILON
            && (self.d - 1.0).abs() < f64::EPSILON
            && self.tx.abs() < f64::EPSILON
            && self.ty.abs() < f64::EPSILON
    }

    /// Map a point through the transform about `center`: the linear part acts
    /// on the offset from `center`, then the translation is added.
    pub fn apply_about(&self, point: Point, center: Point) -> Point {
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        Point {
            x: center.x + self.a * dx + self.c * dy + self.tx,
            y: center.y + self.b * dx + self.d * dy + self.ty,
        }
    }

    /// Loose bounds of `rect` mapped through the transform about the rect's
    /// own center.
    pub fn bounding_rect(&self, rect: &Rect) -> Rect {
        if self.is_identity() {
            return *rect;
        }

        let center = rect.center();
        let mapped = rect.corners().map(|corner| self.apply_about(corner, center));

        let min_x = mapped.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = mapped.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = mapped.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = mapped.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Rect::from_extents(min_x, min_y, max_x, max_y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
