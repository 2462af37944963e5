//! Rasterization of index-buffer geometry.
//!
//! The public draw operations ([`draw_points`], [`draw_polylines`],
//! [`draw_polygons`]) resolve indices and hand concrete geometry to the
//! primitive routines.
//!
//! # Algorithms
//!
//! - **Filled disk**: exact integer distance test per row, hard edges
//! - **Wu's Anti-aliased Line**: hairlines with sub-pixel accuracy
//! - **Coverage stroke**: distance-to-segment coverage for wide lines
//! - **Scanline triangle fill**: sub-scanline sampling with exact span
//!   coverage for anti-aliased edges
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod primitives;
mod rasterizer;

pub use primitives::{draw_disk, draw_line_aa, draw_thick_line_aa, fill_triangle_aa};
pub use rasterizer::{draw_points, draw_polygons, draw_polylines, DrawStyle};
