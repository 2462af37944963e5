//! # vbo-raster
//!
//! Index-buffer driven 2D rasterization onto fixed-size RGB canvases.
//!
//! A shared [`VertexBuffer`](vertex::VertexBuffer) of 2D points is combined
//! with one of three index-buffer shapes, and each call returns a freshly
//! allocated, fully rendered [`Canvas`](canvas::Canvas):
//!
//! - point indices → hard-edged filled disks ([`render::draw_points`])
//! - index pairs → anti-aliased segments ([`render::draw_polylines`])
//! - index triples → anti-aliased filled triangles ([`render::draw_polygons`])
//!
//! ## Quick Start
//!
//! ```rust
//! use vbo_raster::prelude::*;
//!
//! let vb: VertexBuffer = [(20_i32, 30_i32), (40, 70), (69, 70), (100, 100)]
//!     .into_iter()
//!     .collect();
//! let size = CanvasSize::new(128, 128)?;
//!
//! let canvas = draw_polygons(&vb, &[[0, 1, 2], [2, 1, 3]], size, Rgb::WHITE)?;
//! assert_eq!(canvas.get_pixel(43, 56), Some(Rgb::WHITE));
//!
//! // Out-of-range indices reject the whole call
//! assert!(draw_points(&vb, &[4], size, Rgb::WHITE, 2).is_err());
//! # Ok::<(), vbo_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `scene`: YAML scene descriptions
//! - `cli`: the `vbo-raster` command line renderer
//! - `full`: All features enabled
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type for 3-channel canvases.
pub mod color;

/// Owned RGB pixel canvas.
pub mod canvas;

/// Points, resolved primitives and canvas sizes.
pub mod geometry;

/// Vertex buffers and index resolution.
pub mod vertex;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives and draw operations.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML scene descriptions.
#[cfg(feature = "scene")]
#[cfg_attr(docsrs, doc(cfg(feature = "scene")))]
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for vbo-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use vbo_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgb;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CanvasSize, PixelPoint, Point};
    pub use crate::output::PngEncoder;
    pub use crate::render::{draw_points, draw_polygons, draw_polylines, DrawStyle};
    #[cfg(feature = "scene")]
    pub use crate::scene::Scene;
    pub use crate::vertex::{SegmentIndices, TriangleIndices, VertexBuffer};
}
