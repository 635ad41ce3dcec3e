//! Packs a row into the run-length bit stream. The row is split into windows
//! of BATCH_PIXELS samples (the last one may be shorter) and each window is
//! written as one symbol. A short last window is written as a literal of the
//! samples that remain, and the stream is zero padded to a whole byte.

use crate::bitstream::BitWriter;
use crate::coding::Symbol;
use crate::utils::scheme::BATCH_PIXELS;
use crate::{Context, Encoder};

pub struct RowEncoder<'a> {
    /// The row samples.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// Encoder context.
    ctx: Context,
}

impl<'a> RowEncoder<'a> {
    /// Write the bits of 'symbol' and return the number of bytes completed.
    fn write_symbol(
        &mut self,
        writer: &mut BitWriter,
        symbol: Symbol,
    ) -> usize {
        let mut written = 0;
        let (code, bits) = symbol.code();
        if let Some(byte) = writer.push(code, bits) {
            self.output.push(byte);
            written += 1;
        }

        if let Symbol::Literal(samples) = symbol {
            for sample in samples {
                if let Some(byte) = writer.push(*sample, 8) {
                    self.output.push(byte);
                    written += 1;
                }
            }
        }
        written
    }

    fn encode_impl(&mut self) -> usize {
        debug_assert_eq!(self.input.len(), self.ctx.width());
        let mut writer = BitWriter::new();
        let mut written = 0;
        let input = self.input;

        for window in input.chunks(BATCH_PIXELS) {
            let symbol = Symbol::from_window(window);
            log::trace!("Coding {:?}", symbol);
            written += self.write_symbol(&mut writer, symbol);
        }

        if let Some(last) = writer.finish() {
            self.output.push(last);
            written += 1;
        }

        debug_assert_eq!(written, (writer.len() + 7) / 8);
        written
    }
}

impl<'a> Encoder<'a> for RowEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        RowEncoder { input, output, ctx }
    }

    fn encode(&mut self) -> usize {
        self.encode_impl()
    }
}

/// Pack 'row' and return the packed bytes.
pub fn encode_row(row: &[u8]) -> Vec<u8> {
    let mut packed = Vec::new();
    let _ = RowEncoder::new(row, &mut packed, Context::new(row.len())).encode();
    packed
}
