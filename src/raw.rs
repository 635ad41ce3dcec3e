//! Rows that are not worth packing are stored as is: one byte per sample.

use crate::error::{BarchError, Result};
use crate::{Context, Decoder, Encoder};

pub struct RawEncoder<'a> {
    /// The row samples.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// Encoder context.
    ctx: Context,
}

impl<'a> RawEncoder<'a> {
    fn encode_impl(&mut self) -> usize {
        debug_assert_eq!(self.input.len(), self.ctx.width());
        self.output.extend(self.input);
        self.input.len()
    }
}

pub struct RawDecoder<'a> {
    /// The stored row bytes, possibly followed by later rows.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// Decoder context.
    ctx: Context,
}

impl<'a> RawDecoder<'a> {
    fn decode_impl(&mut self) -> Result<(usize, usize)> {
        let width = self.ctx.width();
        let Some(row) = self.input.get(..width) else {
            return Err(BarchError::MalformedContainer(format!(
                "raw row needs {} bytes, {} left",
                width,
                self.input.len()
            )));
        };
        self.output.extend(row);
        Ok((width, width))
    }
}

impl<'a> Encoder<'a> for RawEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        RawEncoder { input, output, ctx }
    }

    fn encode(&mut self) -> usize {
        self.encode_impl()
    }
}

impl<'a> Decoder<'a> for RawDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        RawDecoder { input, output, ctx }
    }

    fn decode(&mut self) -> Result<(usize, usize)> {
        self.decode_impl()
    }
}
