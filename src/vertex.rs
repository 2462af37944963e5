//! Vertex buffers and index resolution.
//!
//! A [`VertexBuffer`] is the shared pool of 2D points. Index buffers come in
//! three shapes: plain indices (points), index pairs (segments) and index
//! triples (triangles). Resolution turns an index buffer into concrete pixel
//! geometry, failing on the first out-of-range index.

use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, Point, Segment, Triangle};

/// Index pair describing one segment.
pub type SegmentIndices = [usize; 2];

/// Index triple describing one triangle.
pub type TriangleIndices = [usize; 3];

/// Ordered, immutable pool of 2D vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexBuffer {
    vertices: Vec<Point>,
}

impl VertexBuffer {
    /// Create a vertex buffer from points.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the buffer holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// Resolve one index to its pixel position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn resolve(&self, index: usize) -> Result<PixelPoint> {
        self.get(index)
            .map(Point::to_pixel)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Resolve a point index list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for the first invalid index.
    pub fn resolve_points(&self, indices: &[usize]) -> Result<Vec<PixelPoint>> {
        let mut points = Vec::with_capacity(indices.len());
        for &idx in indices {
            points.push(self.resolve(idx)?);
        }
        Ok(points)
    }

    /// Resolve segment index pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for the first invalid index.
    pub fn resolve_segments(&self, pairs: &[SegmentIndices]) -> Result<Vec<Segment>> {
        let mut segments = Vec::with_capacity(pairs.len());
        for &[start, end] in pairs {
            segments.push(Segment::new(self.resolve(start)?, self.resolve(end)?));
        }
        Ok(segments)
    }

    /// Resolve triangle index triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for the first invalid index.
    pub fn resolve_triangles(&self, triples: &[TriangleIndices]) -> Result<Vec<Triangle>> {
        let mut triangles = Vec::with_capacity(triples.len());
        for &[a, b, c] in triples {
            triangles.push(Triangle::new(
                self.resolve(a)?,
                self.resolve(b)?,
                self.resolve(c)?,
            ));
        }
        Ok(triangles)
    }
}

impl From<Vec<Point>> for VertexBuffer {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl<P: Into<Point>> FromIterator<P> for VertexBuffer {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
