//! Owned RGB pixel canvas.
//!
//! A [`Canvas`] is an `(H, W, 3)` grid of 8-bit channels in row-major order,
//! origin at the top-left. It starts black and every write is bounds-checked,
//! so drawing code may hand it arbitrary coordinates.

use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::CanvasSize;
use trueno::Vector;

/// Channels per pixel.
pub const CHANNELS: usize = 3;

/// Fixed-size RGB pixel grid produced by every draw operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: CanvasSize,
    /// RGB pixels in row-major order, tightly packed.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a black canvas.
    ///
    /// # Example
    ///
    /// ```
    /// use vbo_raster::canvas::Canvas;
    /// use vbo_raster::geometry::CanvasSize;
    ///
    /// let canvas = Canvas::new(CanvasSize::new(600, 800).unwrap());
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// assert_eq!(canvas.count_lit(), 0);
    /// ```
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.pixel_count() * CHANNELS],
        }
    }

    /// Allocate a black canvas from raw `(height, width)`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_dimensions(height: u32, width: u32) -> Result<Self> {
        Ok(Self::new(CanvasSize::new(height, width)?))
    }

    /// Canvas dimensions.
    #[must_use]
    pub const fn size(&self) -> CanvasSize {
        self.size
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height()
    }

    /// Raw pixel data, `height * width * 3` bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the canvas, returning its pixel data.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height() {
            return None;
        }
        let row_bytes = self.width() as usize * CHANNELS;
        let start = y as usize * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Get the color at a pixel, or `None` out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let idx = self.pixel_index(x, y)?;
        Some(Rgb::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Set the color at a pixel. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
        }
    }

    /// Blend `color` over a pixel by `coverage` in `[0, 1]`.
    ///
    /// Coverage of 1 or more overwrites the pixel; zero or less (and NaN)
    /// leaves it untouched. Out-of-bounds writes are dropped.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgb, coverage: f32) {
        if coverage.is_nan() || coverage <= 0.0 {
            return;
        }
        if coverage >= 1.0 {
            self.set_pixel(x, y, color);
            return;
        }
        if let Some(dst) = self.get_pixel(x, y) {
            self.set_pixel(x, y, dst.lerp(color, coverage));
        }
    }

    /// Fill the inclusive horizontal span `x0..=x1` on row `y`.
    ///
    /// Coordinates are clamped to the canvas; spans entirely outside it are
    /// ignored.
    pub fn fill_span(&mut self, x0: i64, x1: i64, y: i64, color: Rgb) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if y < 0 || y >= i64::from(self.height()) {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(i64::from(self.width()) - 1);
        if start > end {
            return;
        }

        let rgb = color.to_array();
        let row_start = (y as usize * self.width() as usize + start as usize) * CHANNELS;
        let row_end = (y as usize * self.width() as usize + end as usize + 1) * CHANNELS;
        for chunk in self.pixels[row_start..row_end].chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Number of pixels that are not pure black.
    #[must_use]
    pub fn count_lit(&self) -> usize {
        self.pixels
            .chunks_exact(CHANNELS)
            .filter(|px| px.iter().any(|&c| c != 0))
            .count()
    }

    /// Iterate over the coordinates of every non-black pixel.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width() as usize;
        self.pixels
            .chunks_exact(CHANNELS)
            .enumerate()
            .filter(|(_, px)| px.iter().any(|&c| c != 0))
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }

    /// Per-pixel intensity statistics using SIMD-accelerated reduction.
    ///
    /// Intensity is the mean of the three channels. Returns
    /// `(min, max, mean)`.
    #[must_use]
    pub fn intensity_stats(&self) -> (f32, f32, f32) {
        let intensities: Vec<f32> = self
            .pixels
            .chunks_exact(CHANNELS)
            .map(|px| Rgb::new(px[0], px[1], px[2]).intensity())
            .collect();

        // Use trueno for SIMD-accelerated min/max/mean
        let vec = Vector::from_vec(intensities);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(0.0);
        let mean = vec.mean().unwrap_or(0.0);

        (min, max, mean)
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y as usize * self.width() as usize + x as usize) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(h: u32, w: u32) -> Canvas {
        Canvas::with_dimensions(h, w).unwrap()
    }

    #[test]
    fn test_new_canvas_is_black() {
        let c = canvas(50, 100);
        assert_eq!(c.width(), 100);
        assert_eq!(c.height(), 50);
        assert_eq!(c.pixels().len(), 50 * 100 * 3);
        assert!(c.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Canvas::with_dimensions(0, 100).is_err());
        assert!(Canvas::with_dimensions(100, 0).is_err());
    }

    #[test]
    fn test_set_get_pixel() {
        let mut c = canvas(10, 20);
        c.set_pixel(15, 5, Rgb::BLUE);
        assert_eq!(c.get_pixel(15, 5), Some(Rgb::BLUE));
        // Row-major, x across
        let row = c.row(5).unwrap();
        assert_eq!(&row[45..48], &[0, 0, 255]);

        assert_eq!(c.get_pixel(20, 5), None);
        assert_eq!(c.get_pixel(5, 10), None);
    }

    #[test]
    fn test_out_of_bounds_writes_dropped() {
        let mut c = canvas(10, 10);
        c.set_pixel(10, 0, Rgb::WHITE);
        c.set_pixel(0, 10, Rgb::WHITE);
        c.blend_pixel(u32::MAX, u32::MAX, Rgb::WHITE, 0.5);
        c.fill_span(-100, 100, 10, Rgb::WHITE);
        c.fill_span(-100, -1, 3, Rgb::WHITE);
        assert_eq!(c.count_lit(), 0);
    }

    #[test]
    fn test_blend_pixel_coverage() {
        let mut c = canvas(4, 4);
        c.blend_pixel(1, 1, Rgb::WHITE, 0.5);
        assert_eq!(c.get_pixel(1, 1), Some(Rgb::new(128, 128, 128)));

        c.blend_pixel(2, 2, Rgb::WHITE, 1.0);
        assert_eq!(c.get_pixel(2, 2), Some(Rgb::WHITE));

        c.blend_pixel(3, 3, Rgb::WHITE, 0.0);
        c.blend_pixel(3, 3, Rgb::WHITE, f32::NAN);
        assert_eq!(c.get_pixel(3, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_fill_span_clamps() {
        let mut c = canvas(5, 10);
        c.fill_span(7, -3, 2, Rgb::RED);
        assert_eq!(c.count_lit(), 8);
        assert_eq!(c.get_pixel(0, 2), Some(Rgb::RED));
        assert_eq!(c.get_pixel(7, 2), Some(Rgb::RED));
        assert_eq!(c.get_pixel(8, 2), Some(Rgb::BLACK));

        c.fill_span(i64::MIN, i64::MAX, 4, Rgb::GREEN);
        assert_eq!(c.count_lit(), 18);
    }

    #[test]
    fn test_clear_and_lit_pixels() {
        let mut c = canvas(3, 3);
        c.clear(Rgb::WHITE);
        assert_eq!(c.count_lit(), 9);

        let mut c = canvas(3, 3);
        c.set_pixel(2, 1, Rgb::RED);
        let lit: Vec<_> = c.lit_pixels().collect();
        assert_eq!(lit, vec![(2, 1)]);
    }

    #[test]
    fn test_intensity_stats() {
        let mut c = canvas(10, 10);
        c.clear(Rgb::new(90, 90, 90));
        let (min, max, mean) = c.intensity_stats();
        assert!((min - 90.0).abs() < 0.01);
        assert!((max - 90.0).abs() < 0.01);
        assert!((mean - 90.0).abs() < 0.01);

        c.set_pixel(0, 0, Rgb::WHITE);
        let (_, max, _) = c.intensity_stats();
        assert!((max - 255.0).abs() < 0.01);
    }
}
