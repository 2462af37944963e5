//! Geometric types shared by vertex buffers and the rasterizer.
//!
//! Vertices are stored as floating-point [`Point`]s and resolved to integer
//! [`PixelPoint`]s before drawing. Resolved primitives ([`Segment`],
//! [`Triangle`]) only ever hold pixel coordinates.

use crate::error::{Error, Result};

/// A 2D vertex with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (rightward).
    pub x: f32,
    /// Y coordinate (downward).
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the nearest pixel position.
    ///
    /// Halves round away from zero. Values beyond the `i32` range saturate
    /// and NaN resolves to 0.
    #[must_use]
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// An integer pixel position. May lie outside any canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another pixel, widened so it cannot overflow.
    #[must_use]
    pub fn distance_sq(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

/// A resolved line segment between two pixel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: PixelPoint,
    /// End point.
    pub end: PixelPoint,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: PixelPoint, end: PixelPoint) -> Self {
        Self { start, end }
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Distance from `(px, py)` to the closest point of the segment.
    #[must_use]
    pub fn distance_to(&self, px: f64, py: f64) -> f64 {
        let (x0, y0) = (f64::from(self.start.x), f64::from(self.start.y));
        let (x1, y1) = (f64::from(self.end.x), f64::from(self.end.y));
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;

        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
        };

        let cx = x0 + t * dx;
        let cy = y0 + t * dy;
        ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
    }
}

/// A resolved triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    /// First vertex.
    pub a: PixelPoint,
    /// Second vertex.
    pub b: PixelPoint,
    /// Third vertex.
    pub c: PixelPoint,
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area. Positive for clockwise winding in screen space.
    #[must_use]
    pub fn doubled_area(&self) -> i128 {
        let (ax, ay) = (i128::from(self.a.x), i128::from(self.a.y));
        let (bx, by) = (i128::from(self.b.x), i128::from(self.b.y));
        let (cx, cy) = (i128::from(self.c.x), i128::from(self.c.y));
        (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
    }

    /// Whether the vertices are collinear (including coincident).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.doubled_area() == 0
    }

    /// Vertices in order.
    #[must_use]
    pub const fn vertices(&self) -> [PixelPoint; 3] {
        [self.a, self.b, self.c]
    }
}

/// Canvas dimensions as `(height, width)`, matching row-major image shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    height: u32,
    width: u32,
}

impl CanvasSize {
    /// Create a validated canvas size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(height: u32, width: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { height, width })
    }

    /// Create a size from signed dimensions, rejecting non-positive values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is `<= 0`.
    pub fn from_signed(height: i64, width: i64) -> Result<Self> {
        let clamp = |v: i64| u32::try_from(v.max(0)).unwrap_or(u32::MAX);
        if height <= 0 || width <= 0 {
            return Err(Error::InvalidDimensions {
                width: clamp(width),
                height: clamp(height),
            });
        }
        Self::new(clamp(height), clamp(width))
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_to_pixel_rounds() {
        assert_eq!(Point::new(20.4, 29.6).to_pixel(), PixelPoint::new(20, 30));
        assert_eq!(Point::new(0.5, -0.5).to_pixel(), PixelPoint::new(1, -1));
    }

    #[test]
    fn test_point_to_pixel_saturates() {
        let p = Point::new(1e20, -1e20).to_pixel();
        assert_eq!(p, PixelPoint::new(i32::MAX, i32::MIN));
        assert_eq!(Point::new(f32::NAN, 3.0).to_pixel(), PixelPoint::new(0, 3));
    }

    #[test]
    fn test_distance_sq_no_overflow() {
        let a = PixelPoint::new(i32::MIN, i32::MIN);
        let b = PixelPoint::new(i32::MAX, i32::MAX);
        assert!(a.distance_sq(b) > 0);
    }

    #[test]
    fn test_segment_distance() {
        let seg = Segment::new(PixelPoint::new(0, 0), PixelPoint::new(10, 0));
        assert_relative_eq!(seg.distance_to(5.0, 3.0), 3.0);
        assert_relative_eq!(seg.distance_to(-4.0, 3.0), 5.0);
        assert_relative_eq!(seg.distance_to(13.0, 4.0), 5.0);
    }

    #[test]
    fn test_degenerate_segment_distance() {
        let seg = Segment::new(PixelPoint::new(2, 2), PixelPoint::new(2, 2));
        assert!(seg.is_degenerate());
        assert_relative_eq!(seg.distance_to(5.0, 6.0), 5.0);
    }

    #[test]
    fn test_triangle_area() {
        let tri = Triangle::new(
            PixelPoint::new(0, 0),
            PixelPoint::new(4, 0),
            PixelPoint::new(0, 3),
        );
        assert_eq!(tri.doubled_area().abs(), 12);
        assert!(!tri.is_degenerate());
    }

    #[test]
    fn test_collinear_triangle_is_degenerate() {
        let tri = Triangle::new(
            PixelPoint::new(0, 0),
            PixelPoint::new(5, 5),
            PixelPoint::new(10, 10),
        );
        assert!(tri.is_degenerate());
    }

    #[test]
    fn test_canvas_size_validation() {
        assert!(CanvasSize::new(0, 10).is_err());
        assert!(CanvasSize::new(10, 0).is_err());
        let size = CanvasSize::new(128, 64).unwrap();
        assert_eq!(size.height(), 128);
        assert_eq!(size.width(), 64);
        assert_eq!(size.pixel_count(), 8192);
    }

    #[test]
    fn test_canvas_size_from_signed() {
        assert!(matches!(
            CanvasSize::from_signed(-1, 10),
            Err(Error::InvalidDimensions { width: 10, height: 0 })
        ));
        assert!(CanvasSize::from_signed(10, 10).is_ok());
    }
}
