//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::canvas::Canvas;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(canvas, BufWriter::new(file))
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(canvas: &Canvas, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.pixels())?;
        writer.finish()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn red_canvas() -> Canvas {
        let mut canvas = Canvas::with_dimensions(10, 12).unwrap();
        canvas.clear(Rgb::RED);
        canvas
    }

    #[test]
    fn test_png_to_bytes() {
        let bytes = PngEncoder::to_bytes(&red_canvas()).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_roundtrip_header() {
        let bytes = PngEncoder::to_bytes(&red_canvas()).unwrap();
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.width, 12);
        assert_eq!(info.height, 10);
        assert_eq!(info.color_type, png::ColorType::Rgb);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        PngEncoder::write_to_file(&red_canvas(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 8);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(
            PngEncoder::write_to_file(&red_canvas(), path),
            Err(crate::Error::Io(_))
        ));
    }
}
