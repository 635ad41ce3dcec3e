//! The error kinds reported by the codec and the container parser.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarchError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Unsupported sample depth: {0} bits per pixel")]
    UnsupportedSampleDepth(u16),
    #[error("Malformed container: {0}")]
    MalformedContainer(String),
    #[error("Decode underrun: produced {produced} of {width} samples")]
    DecodeUnderrun { produced: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, BarchError>;
