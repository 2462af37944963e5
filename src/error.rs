//! Error types for vbo-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing or persisting a canvas.
///
/// Degenerate geometry (zero-length segments, zero-area triangles) is never
/// an error; only invalid buffers and dimensions are.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex index referenced past the end of the vertex buffer.
    #[error("Vertex index {index} out of range for buffer of {len} vertices")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the vertex buffer.
        len: usize,
    },

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Scene description could not be parsed or is inconsistent.
    #[cfg(feature = "scene")]
    #[error("Scene error: {0}")]
    Scene(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 7, len: 4 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
