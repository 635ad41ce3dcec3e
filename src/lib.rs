pub mod bitstream;
pub mod coding;
pub mod container;
pub mod convert;
pub mod error;
pub mod image;
pub mod raw;
pub mod utils;

pub use container::{deserialize, serialize};
pub use convert::{decode_image, encode_image};
pub use error::{BarchError, Result};
pub use image::{BarchImage, RasterImage, Scanline};

/// Stores information about the rows being coded.
#[derive(Copy, Clone, Debug)]
pub struct Context {
    /// Specifies the number of samples in each row.
    width: usize,
}

impl Context {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// A trait that defines the interface for encoding rows.
pub trait Encoder<'a> {
    /// Creates a new Encoder that reads from 'input' and writes into 'output',
    /// with the encoder context 'ctx'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self;

    /// Encode the whole input buffer and return the number of bytes that were
    /// written into the output stream.
    #[must_use]
    fn encode(&mut self) -> usize;
}

/// A trait that defines the interface for decoding rows.
pub trait Decoder<'a> {
    /// Creates a new Decoder that reads from 'input' and writes into 'output',
    /// with the decoder context 'ctx'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self;

    /// Decode one row from 'input' and return the number of input bytes that
    /// were consumed followed by the number of samples written.
    fn decode(&mut self) -> Result<(usize, usize)>;
}
