//! Expands a packed row back into samples. The stream carries no length, so
//! decoding stops once 'width' samples were produced; the unread bits of the
//! last byte are padding.

use crate::bitstream::BitReader;
use crate::error::{BarchError, Result};
use crate::utils::scheme::{BATCH_PIXELS, BLACK, WHITE};
use crate::{Context, Decoder};

pub struct RowDecoder<'a> {
    /// The packed row, possibly followed by the bytes of later rows.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// Decoder context.
    ctx: Context,
}

impl<'a> RowDecoder<'a> {
    fn decode_impl(&mut self) -> Result<(usize, usize)> {
        let width = self.ctx.width();
        let mut reader = BitReader::new(self.input);
        let mut produced = 0;

        // Running out of bits before the row is complete means the input was
        // truncated.
        let underrun =
            |produced| BarchError::DecodeUnderrun { produced, width };

        while produced < width {
            let run = (width - produced).min(BATCH_PIXELS);

            if !reader.pull_bit().ok_or_else(|| underrun(produced))? {
                self.output.extend(std::iter::repeat(WHITE).take(run));
            } else if !reader.pull_bit().ok_or_else(|| underrun(produced))? {
                self.output.extend(std::iter::repeat(BLACK).take(run));
            } else {
                for i in 0..run {
                    let sample =
                        reader.pull(8).ok_or_else(|| underrun(produced + i))?;
                    self.output.push(sample);
                }
            }
            produced += run;
        }

        log::trace!(
            "Decoded {} samples from {} bytes",
            width,
            reader.consumed_bytes()
        );
        Ok((reader.consumed_bytes(), width))
    }
}

impl<'a> Decoder<'a> for RowDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        RowDecoder { input, output, ctx }
    }

    fn decode(&mut self) -> Result<(usize, usize)> {
        self.decode_impl()
    }
}

/// Find how many bytes of 'input' the packed row of 'width' samples at its
/// start occupies. The row is walked without producing samples, so 'width'
/// may come from an untrusted header.
pub fn packed_row_len(input: &[u8], width: usize) -> Result<usize> {
    let mut reader = BitReader::new(input);
    let mut produced = 0;
    let underrun = |produced| BarchError::DecodeUnderrun { produced, width };

    while produced < width {
        let run = (width - produced).min(BATCH_PIXELS);
        if reader.pull_bit().ok_or_else(|| underrun(produced))?
            && reader.pull_bit().ok_or_else(|| underrun(produced))?
        {
            for i in 0..run {
                reader.pull(8).ok_or_else(|| underrun(produced + i))?;
            }
        }
        produced += run;
    }
    Ok(reader.consumed_bytes())
}

/// Expand the packed 'input' into a row of 'width' samples.
pub fn decode_row(input: &[u8], width: usize) -> Result<Vec<u8>> {
    let mut row = Vec::with_capacity(width);
    let _ = RowDecoder::new(input, &mut row, Context::new(width)).decode()?;
    Ok(row)
}
