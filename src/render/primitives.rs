//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for resolved geometry. Every routine
//! clamps its iteration range to the canvas before looping, so geometry far
//! outside the canvas costs nothing and never indexes out of bounds.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::geometry::{PixelPoint, Segment, Triangle};

/// Vertical samples per pixel row when filling triangles.
const SUBSCANLINES: u32 = 4;

// ============================================================================
// Disk Drawing
// ============================================================================

/// Draw a hard-edged filled disk.
///
/// Pixel `(x, y)` is painted iff `(x - cx)² + (y - cy)² <= radius²`, so a
/// radius of zero paints only the center.
///
/// # Arguments
///
/// * `canvas` - Target canvas
/// * `center` - Disk center
/// * `radius` - Radius in pixels
/// * `color` - Fill color
pub fn draw_disk(canvas: &mut Canvas, center: PixelPoint, radius: u32, color: Rgb) {
    let r = i64::from(radius);
    let cx = i64::from(center.x);
    let cy = i64::from(center.y);

    let y_start = (cy - r).max(0);
    let y_end = (cy + r).min(i64::from(canvas.height()) - 1);
    if y_start > y_end {
        return;
    }

    let r_sq = i128::from(r) * i128::from(r);
    for y in y_start..=y_end {
        let dy = i128::from(y - cy);
        let half = isqrt(r_sq - dy * dy);
        canvas.fill_span(cx - half, cx + half, y, color);
    }
}

/// Integer square root (floor) of a non-negative value.
fn isqrt(n: i128) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut s = (n as f64).sqrt() as i128;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s as i64
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw an anti-aliased hairline using Wu's algorithm.
///
/// Pixel centers sit on integer coordinates. Each step along the major axis
/// blends two pixels by the fractional distance from the ideal line. The
/// major-axis loop is clipped to the canvas; a degenerate segment leaves a
/// single partially covered pixel.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(canvas: &mut Canvas, segment: Segment, color: Rgb) {
    let (mut x0, mut y0) = (f64::from(segment.start.x), f64::from(segment.start.y));
    let (mut x1, mut y1) = (f64::from(segment.end.x), f64::from(segment.end.y));

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f64::EPSILON { 1.0 } else { dy / dx };

    let extent = if steep {
        i64::from(canvas.height())
    } else {
        i64::from(canvas.width())
    };

    let mut plot = |major: i64, minor: i64, coverage: f64| {
        let (x, y) = if steep { (minor, major) } else { (major, minor) };
        plot_coverage(canvas, x, y, color, coverage);
    };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i64;
    let ypxl1 = yend.floor() as i64;
    plot(xpxl1, ypxl1, rfpart(yend) * xgap);
    plot(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    let intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i64;
    let ypxl2 = yend.floor() as i64;
    plot(xpxl2, ypxl2, rfpart(yend) * xgap);
    plot(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    // Main loop, clipped to the major-axis extent of the canvas
    let start = (xpxl1 + 1).max(0);
    let end = xpxl2.min(extent);
    let mut intery = intery + gradient * (start - (xpxl1 + 1)) as f64;
    for x in start..end {
        let ipart = intery.floor() as i64;
        plot(x, ipart, rfpart(intery));
        plot(x, ipart + 1, fpart(intery));
        intery += gradient;
    }
}

/// Draw an anti-aliased stroke of the given width with round caps.
///
/// Coverage of each pixel is `half_width + 0.5 - distance`, clamped to
/// `[0, 1]`, where `distance` is measured from the pixel center to the
/// segment. A degenerate segment becomes a soft dot.
pub fn draw_thick_line_aa(canvas: &mut Canvas, segment: Segment, thickness: u32, color: Rgb) {
    let half = f64::from(thickness) / 2.0;
    let reach = half.ceil() as i64 + 1;

    let (sx, sy) = (i64::from(segment.start.x), i64::from(segment.start.y));
    let (ex, ey) = (i64::from(segment.end.x), i64::from(segment.end.y));

    let x_start = (sx.min(ex) - reach).max(0);
    let x_end = (sx.max(ex) + reach).min(i64::from(canvas.width()) - 1);
    let y_start = (sy.min(ey) - reach).max(0);
    let y_end = (sy.max(ey) + reach).min(i64::from(canvas.height()) - 1);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let distance = segment.distance_to(x as f64, y as f64);
            let coverage = (half + 0.5 - distance).clamp(0.0, 1.0);
            plot_coverage(canvas, x, y, color, coverage);
        }
    }
}

/// Blend a pixel by coverage with bounds checking.
#[inline]
fn plot_coverage(canvas: &mut Canvas, x: i64, y: i64, color: Rgb, coverage: f64) {
    if x >= 0 && y >= 0 && x < i64::from(canvas.width()) && y < i64::from(canvas.height()) {
        canvas.blend_pixel(x as u32, y as u32, color, coverage as f32);
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

// ============================================================================
// Triangle Filling
// ============================================================================

/// Fill a triangle with an anti-aliased boundary.
///
/// Pixel `(x, y)` is the unit square with its top-left corner at `(x, y)`.
/// Each pixel row is sampled by four horizontal scanlines; on
/// each scanline the exact horizontal overlap of the span with every pixel
/// is accumulated. Fully covered pixels are overwritten with `color`,
/// partially covered ones are blended toward it. Zero-area triangles draw
/// nothing.
pub fn fill_triangle_aa(canvas: &mut Canvas, triangle: Triangle, color: Rgb) {
    if triangle.is_degenerate() {
        return;
    }

    let verts = triangle.vertices();
    let min_y = verts.iter().map(|p| i64::from(p.y)).min().unwrap_or(0);
    let max_y = verts.iter().map(|p| i64::from(p.y)).max().unwrap_or(0);

    let y_start = min_y.max(0);
    let y_end = (max_y - 1).min(i64::from(canvas.height()) - 1);
    if y_start > y_end {
        return;
    }

    let width = canvas.width() as usize;
    let width_f = f64::from(canvas.width());
    let sample_weight = 1.0 / f64::from(SUBSCANLINES);
    let mut coverage = vec![0.0_f64; width];

    for y in y_start..=y_end {
        let mut dirty: Option<(usize, usize)> = None;

        for k in 0..SUBSCANLINES {
            let yc = y as f64 + (f64::from(k) + 0.5) * sample_weight;
            let Some((xl, xr)) = scanline_span(&verts, yc) else {
                continue;
            };

            let xl = xl.clamp(0.0, width_f);
            let xr = xr.clamp(0.0, width_f);
            if xl >= xr {
                continue;
            }

            let first = xl.floor() as usize;
            let last = (xr.ceil() as usize).min(width);
            for (px, cell) in coverage.iter_mut().enumerate().take(last).skip(first) {
                let left = xl.max(px as f64);
                let right = xr.min(px as f64 + 1.0);
                *cell += (right - left).max(0.0) * sample_weight;
            }

            dirty = Some(match dirty {
                Some((lo, hi)) => (lo.min(first), hi.max(last)),
                None => (first, last),
            });
        }

        if let Some((lo, hi)) = dirty {
            for (px, cell) in coverage.iter_mut().enumerate().take(hi).skip(lo) {
                if *cell > 0.0 {
                    canvas.blend_pixel(px as u32, y as u32, color, *cell as f32);
                }
                *cell = 0.0;
            }
        }
    }
}

/// Leftmost and rightmost edge crossings of the horizontal line `y = yc`.
///
/// Edges are half-open in y so a vertex on the scanline is counted once.
fn scanline_span(verts: &[PixelPoint; 3], yc: f64) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut crossings = 0;

    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let (px, py) = (f64::from(p.x), f64::from(p.y));
        let (qx, qy) = (f64::from(q.x), f64::from(q.y));

        if (py <= yc && qy > yc) || (qy <= yc && py > yc) {
            let x = px + (yc - py) * (qx - px) / (qy - py);
            lo = lo.min(x);
            hi = hi.max(x);
            crossings += 1;
        }
    }

    (crossings >= 2).then_some((lo, hi))
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = (i32, i32)> {
        prop_oneof![
            4 => (-40i32..100, -40i32..100),
            1 => (any::<i32>(), any::<i32>()),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Hairlines stay within one pixel of the segment's bounding box
        #[test]
        fn prop_line_within_bounds(a in coord(), b in coord()) {
            let mut c = Canvas::with_dimensions(64, 64).unwrap();
            draw_line_aa(&mut c, Segment::new(pt(a), pt(b)), Rgb::WHITE);

            for (x, y) in c.lit_pixels() {
                let (x, y) = (i64::from(x), i64::from(y));
                prop_assert!(x >= i64::from(a.0.min(b.0)) - 1 && x <= i64::from(a.0.max(b.0)) + 1);
                prop_assert!(y >= i64::from(a.1.min(b.1)) - 1 && y <= i64::from(a.1.max(b.1)) + 1);
            }
        }

        /// Wide strokes never panic and stay near the segment
        #[test]
        fn prop_thick_line_within_reach(a in coord(), b in coord(), thickness in 2u32..12) {
            let mut c = Canvas::with_dimensions(64, 64).unwrap();
            let segment = Segment::new(pt(a), pt(b));
            draw_thick_line_aa(&mut c, segment, thickness, Rgb::WHITE);

            let limit = f64::from(thickness) / 2.0 + 0.5;
            for (x, y) in c.lit_pixels() {
                prop_assert!(segment.distance_to(f64::from(x), f64::from(y)) < limit);
            }
        }

        /// Triangle fill stays inside the vertex bounding box
        #[test]
        fn prop_triangle_within_bounds(a in coord(), b in coord(), d in coord()) {
            let mut c = Canvas::with_dimensions(64, 64).unwrap();
            let tri = Triangle::new(pt(a), pt(b), pt(d));
            fill_triangle_aa(&mut c, tri, Rgb::WHITE);

            if tri.is_degenerate() {
                prop_assert_eq!(c.count_lit(), 0);
            }
            let xs = [a.0, b.0, d.0];
            let ys = [a.1, b.1, d.1];
            for (x, y) in c.lit_pixels() {
                let (x, y) = (x as i32, y as i32);
                prop_assert!(xs.iter().any(|&v| v <= x) && xs.iter().any(|&v| v > x));
                prop_assert!(ys.iter().any(|&v| v <= y) && ys.iter().any(|&v| v > y));
            }
        }
    }

    fn pt((x, y): (i32, i32)) -> PixelPoint {
        PixelPoint::new(x, y)
    }
}
