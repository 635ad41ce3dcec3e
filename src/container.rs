//! The barch container. The layout is:
//!
//! ```text
//! "BA000" | width: u32 LE | height: u32 LE | row flags | row data
//! ```
//!
//! The row flags hold one bit per row, MSB-first, padded to a whole byte. The
//! row data is the stored bytes of every row in order: 'width' raw bytes for
//! unflagged rows, and the packed stream for flagged rows. Packed rows carry no
//! length, so the reader finds where each one ends by decoding it.

use crate::error::{BarchError, Result};
use crate::image::{BarchImage, Scanline};
use crate::utils::flag_table;
use crate::utils::number_encoding::{decode32, encode32};
use crate::utils::signatures::{match_signature, BARCH_SIG};

pub use crate::coding::decoder::packed_row_len;

/// The size of the fixed part of the header.
pub const HEADER_LEN: usize = BARCH_SIG.len() + 4 + 4;

fn malformed(msg: impl Into<String>) -> BarchError {
    let msg = msg.into();
    log::warn!("Rejecting barch container: {}", msg);
    BarchError::MalformedContainer(msg)
}

impl BarchImage {
    /// Save the image to a stream of bytes. Report the number of bytes
    /// written.
    pub fn serialize(&self, output: &mut Vec<u8>) -> usize {
        output.extend(BARCH_SIG);
        let mut written = BARCH_SIG.len();
        written += encode32(self.width(), output);
        written += encode32(self.height(), output);
        written += flag_table::encode(&self.flags(), output);

        for line in self.lines() {
            output.extend(line.bytes());
            written += line.bytes().len();
        }
        written
    }

    /// The number of bytes 'serialize' writes.
    pub fn serialized_len(&self) -> usize {
        HEADER_LEN
            + flag_table::packed_len(self.lines().len())
            + self.data_len()
    }

    /// Load the image from a stream of bytes. Returns the image and the
    /// number of bytes that were read.
    pub fn deserialize(input: &[u8]) -> Result<(Self, usize)> {
        if !match_signature(input, &BARCH_SIG) {
            return Err(malformed("wrong file starter"));
        }
        let mut cursor = BARCH_SIG.len();

        let (read, width) = decode32(&input[cursor..])
            .ok_or_else(|| malformed("truncated header (width)"))?;
        cursor += read;
        let (read, height) = decode32(&input[cursor..])
            .ok_or_else(|| malformed("truncated header (height)"))?;
        cursor += read;
        log::trace!("Container declares {}x{}", width, height);

        if width == 0 || height == 0 {
            log::warn!("Rejecting barch image of {}x{}", width, height);
            return Err(BarchError::InvalidDimensions {
                width: width as usize,
                height: height as usize,
            });
        }

        let rows = height as usize;
        let (read, flags) = flag_table::decode(&input[cursor..], rows)
            .ok_or_else(|| malformed("truncated row flags"))?;
        cursor += read;

        // Nothing is sized from 'width' until the input is known to hold the
        // row.
        let width_len = width as usize;
        let mut lines = Vec::with_capacity(flags.len());

        for (row, packed) in flags.into_iter().enumerate() {
            let rest = &input[cursor..];

            let line = if packed {
                let read = packed_row_len(rest, width_len).map_err(|err| {
                    malformed(format!("packed row {} cut short: {}", row, err))
                })?;
                Scanline::Packed(rest[..read].to_vec())
            } else {
                let bytes = rest.get(..width_len).ok_or_else(|| {
                    malformed(format!(
                        "raw row {} needs {} bytes, {} left",
                        row,
                        width_len,
                        rest.len()
                    ))
                })?;
                Scanline::Raw(bytes.to_vec())
            };

            cursor += line.bytes().len();
            lines.push(line);
        }

        Ok((BarchImage::new(width, lines)?, cursor))
    }
}

/// Serialize 'barch' into a new buffer.
pub fn serialize(barch: &BarchImage) -> Vec<u8> {
    let mut output = Vec::with_capacity(barch.serialized_len());
    let written = barch.serialize(&mut output);
    debug_assert_eq!(written, output.len());
    output
}

/// Parse a complete container. Bytes after the last row are rejected.
pub fn deserialize(input: &[u8]) -> Result<BarchImage> {
    let (barch, read) = BarchImage::deserialize(input)?;
    if read != input.len() {
        return Err(malformed(format!(
            "{} trailing bytes after the last row",
            input.len() - read
        )));
    }
    Ok(barch)
}
