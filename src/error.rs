//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image codec errors, and provides semantic variants
//! for dimension validation and crop-geometry failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("Degenerate crop box: left={left}, right={right}, top={top}, bottom={bottom}")]
    DegenerateCrop {
        left: i64,
        right: i64,
        top: i64,
        bottom: i64,
    },
}
