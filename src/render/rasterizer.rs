//! Index-buffer driven draw operations.
//!
//! Each operation resolves its whole index buffer against the vertex buffer
//! first, then allocates a black canvas and draws into it. A bad index
//! therefore rejects the call before any pixel is touched.

use super::primitives::{draw_disk, draw_line_aa, draw_thick_line_aa, fill_triangle_aa};
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::CanvasSize;
use crate::vertex::{SegmentIndices, TriangleIndices, VertexBuffer};

/// Per-call drawing parameters bundled together.
///
/// Defaults are white, a radius of 2 and a hairline stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "scene", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "scene", serde(default))]
pub struct DrawStyle {
    /// Draw color.
    pub color: Rgb,
    /// Disk radius for points.
    pub radius: u32,
    /// Stroke width for segments.
    pub thickness: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            radius: 2,
            thickness: 1,
        }
    }
}

/// Draw each indexed vertex as a hard-edged filled disk.
///
/// Later indices overwrite earlier ones where disks overlap.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any
/// index is past the end of `vertex_buffer`; no canvas is produced.
///
/// # Example
///
/// ```
/// use vbo_raster::prelude::*;
///
/// let vb: VertexBuffer = [(20_i32, 30_i32), (40, 70)].into_iter().collect();
/// let size = CanvasSize::new(128, 128).unwrap();
/// let canvas = draw_points(&vb, &[0, 1], size, Rgb::WHITE, 2).unwrap();
/// assert_eq!(canvas.get_pixel(20, 30), Some(Rgb::WHITE));
/// assert_eq!(canvas.count_lit(), 26);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(points = point_indices.len(), radius = radius))]
pub fn draw_points(
    vertex_buffer: &VertexBuffer,
    point_indices: &[usize],
    canvas_size: CanvasSize,
    color: Rgb,
    radius: u32,
) -> Result<Canvas> {
    let points = vertex_buffer
        .resolve_points(point_indices)
        .map_err(|err| {
            tracing::debug!(%err, "rejected point draw");
            err
        })?;

    let mut canvas = Canvas::new(canvas_size);
    for center in points {
        draw_disk(&mut canvas, center, radius, color);
    }

    tracing::debug!(lit = canvas.count_lit(), "points drawn");
    Ok(canvas)
}

/// Draw each index pair as an independent anti-aliased segment.
///
/// Segments are never joined or closed. A `thickness` of 0 or 1 draws a
/// hairline with Wu's algorithm; wider strokes use distance coverage with
/// round caps. Identical endpoints leave a small mark.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any
/// index is past the end of `vertex_buffer`; no canvas is produced.
#[tracing::instrument(level = "debug", skip_all, fields(segments = segment_index_pairs.len(), thickness = thickness))]
pub fn draw_polylines(
    vertex_buffer: &VertexBuffer,
    segment_index_pairs: &[SegmentIndices],
    canvas_size: CanvasSize,
    color: Rgb,
    thickness: u32,
) -> Result<Canvas> {
    let segments = vertex_buffer
        .resolve_segments(segment_index_pairs)
        .map_err(|err| {
            tracing::debug!(%err, "rejected polyline draw");
            err
        })?;

    let mut canvas = Canvas::new(canvas_size);
    for segment in segments {
        if thickness <= 1 {
            draw_line_aa(&mut canvas, segment, color);
        } else {
            draw_thick_line_aa(&mut canvas, segment, thickness, color);
        }
    }

    tracing::debug!(lit = canvas.count_lit(), "polylines drawn");
    Ok(canvas)
}

/// Fill each index triple as a triangle with an anti-aliased boundary.
///
/// Interior pixels of later triangles overwrite earlier ones. Triangles with
/// collinear or coincident vertices draw nothing.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any
/// index is past the end of `vertex_buffer`; no canvas is produced.
#[tracing::instrument(level = "debug", skip_all, fields(triangles = triangle_index_triples.len()))]
pub fn draw_polygons(
    vertex_buffer: &VertexBuffer,
    triangle_index_triples: &[TriangleIndices],
    canvas_size: CanvasSize,
    color: Rgb,
) -> Result<Canvas> {
    let triangles = vertex_buffer
        .resolve_triangles(triangle_index_triples)
        .map_err(|err| {
            tracing::debug!(%err, "rejected polygon draw");
            err
        })?;

    let mut canvas = Canvas::new(canvas_size);
    let mut skipped = 0_usize;
    for triangle in triangles {
        if triangle.is_degenerate() {
            skipped += 1;
            continue;
        }
        fill_triangle_aa(&mut canvas, triangle, color);
    }

    tracing::debug!(lit = canvas.count_lit(), skipped, "polygons drawn");
    Ok(canvas)
}
