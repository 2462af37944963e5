//! YAML scene descriptions.
//!
//! A scene bundles a canvas size, a vertex buffer, the three index buffers
//! and a [`DrawStyle`], so a complete drawing request can live in a file:
//!
//! ```yaml
//! canvas: { height: 128, width: 128 }
//! vertices: [[20, 30], [40, 70], [69, 70], [100, 100]]
//! points: [0, 1, 2]
//! segments: [[0, 1], [1, 2], [2, 0]]
//! triangles: [[0, 1, 2], [2, 1, 3]]
//! style: { color: [255, 255, 255], radius: 2, thickness: 1 }
//! ```
//!
//! Everything except `vertices` is optional.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::{CanvasSize, Point};
use crate::render::{draw_points, draw_polygons, draw_polylines, DrawStyle};
use crate::vertex::{SegmentIndices, TriangleIndices, VertexBuffer};
use batuta_common::display::WithDimensions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas dimensions as written in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSpec {
    /// Height in pixels.
    #[serde(default = "default_extent")]
    pub height: u32,
    /// Width in pixels.
    #[serde(default = "default_extent")]
    pub width: u32,
}

fn default_extent() -> u32 {
    128
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            height: default_extent(),
            width: default_extent(),
        }
    }
}

/// A complete drawing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Output canvas dimensions.
    #[serde(default)]
    pub canvas: CanvasSpec,

    /// Vertex buffer as `[x, y]` pairs.
    pub vertices: Vec<[f32; 2]>,

    /// Point index list.
    #[serde(default)]
    pub points: Vec<usize>,

    /// Segment index pairs.
    #[serde(default)]
    pub segments: Vec<SegmentIndices>,

    /// Triangle index triples.
    #[serde(default)]
    pub triangles: Vec<TriangleIndices>,

    /// Draw parameters.
    #[serde(default)]
    pub style: DrawStyle,
}

impl Scene {
    /// The sample scene: four vertices, three points, an open triangle
    /// outline and two triangles sharing an edge.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            vertices: vec![[20.0, 30.0], [40.0, 70.0], [69.0, 70.0], [100.0, 100.0]],
            points: vec![0, 1, 2],
            segments: vec![[0, 1], [1, 2], [2, 0]],
            triangles: vec![[0, 1, 2], [2, 1, 3]],
            style: DrawStyle::default(),
        }
    }

    /// Parse a scene from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scene`] if the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| Error::Scene(e.to_string()))
    }

    /// Load a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Scene`]
    /// if it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading scene");
        Self::from_yaml_str(&text)
    }

    /// Serialize the scene to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scene`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::Scene(e.to_string()))
    }

    /// Validated canvas size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension.
    pub fn canvas_size(&self) -> Result<CanvasSize> {
        CanvasSize::new(self.canvas.height, self.canvas.width)
    }

    /// The scene's vertex buffer.
    #[must_use]
    pub fn vertex_buffer(&self) -> VertexBuffer {
        self.vertices.iter().copied().map(Point::from).collect()
    }

    /// Render the point index list.
    ///
    /// # Errors
    ///
    /// Propagates [`draw_points`] errors and invalid canvas dimensions.
    pub fn render_points(&self) -> Result<Canvas> {
        draw_points(
            &self.vertex_buffer(),
            &self.points,
            self.canvas_size()?,
            self.style.color,
            self.style.radius,
        )
    }

    /// Render the segment index pairs.
    ///
    /// # Errors
    ///
    /// Propagates [`draw_polylines`] errors and invalid canvas dimensions.
    pub fn render_polylines(&self) -> Result<Canvas> {
        draw_polylines(
            &self.vertex_buffer(),
            &self.segments,
            self.canvas_size()?,
            self.style.color,
            self.style.thickness,
        )
    }

    /// Render the triangle index triples.
    ///
    /// # Errors
    ///
    /// Propagates [`draw_polygons`] errors and invalid canvas dimensions.
    pub fn render_polygons(&self) -> Result<Canvas> {
        draw_polygons(
            &self.vertex_buffer(),
            &self.triangles,
            self.canvas_size()?,
            self.style.color,
        )
    }
}

impl WithDimensions for Scene {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.canvas.width = width;
        self.canvas.height = height;
    }
}
