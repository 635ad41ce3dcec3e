//! Converts whole images. Each row is classified, and rows that are worth it
//! are packed with the row encoder while the rest are stored raw.

use crate::coding::classify::analyze_lines;
use crate::coding::decoder::RowDecoder;
use crate::coding::encoder::RowEncoder;
use crate::error::{BarchError, Result};
use crate::image::{BarchImage, RasterImage, Scanline};
use crate::raw::{RawDecoder, RawEncoder};
use crate::utils::scheme::SUPPORTED_BITS_PER_PIXEL;
use crate::{Context, Decoder, Encoder};

/// Pack or copy a single row, depending on its flag.
fn encode_line(line: &[u8], packed: bool, ctx: Context) -> Scanline {
    let mut encoded = Vec::new();
    if packed {
        let _ = RowEncoder::new(line, &mut encoded, ctx).encode();
        return Scanline::Packed(encoded);
    }
    let _ = RawEncoder::new(line, &mut encoded, ctx).encode();
    Scanline::Raw(encoded)
}

/// Expand a single row into 'output'.
fn decode_line(
    line: &Scanline,
    output: &mut Vec<u8>,
    ctx: Context,
) -> Result<()> {
    match line {
        Scanline::Packed(bytes) => {
            RowDecoder::new(bytes, output, ctx).decode()?;
        }
        Scanline::Raw(bytes) => {
            RawDecoder::new(bytes, output, ctx).decode()?;
        }
    }
    Ok(())
}

/// Convert a raster into a barch image.
pub fn encode_image(raster: &RasterImage) -> Result<BarchImage> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(BarchError::InvalidDimensions {
            width: raster.width() as usize,
            height: raster.height() as usize,
        });
    }
    if raster.bits_per_pixel() != SUPPORTED_BITS_PER_PIXEL {
        log::error!(
            "Only {}-bit grayscale images are supported, got {} bits",
            SUPPORTED_BITS_PER_PIXEL,
            raster.bits_per_pixel()
        );
        return Err(BarchError::UnsupportedSampleDepth(raster.bits_per_pixel()));
    }

    let ctx = Context::new(raster.width() as usize);
    let flags = analyze_lines(raster);
    debug_assert_eq!(flags.len(), raster.height() as usize);

    let lines: Vec<Scanline> = raster
        .lines()
        .zip(flags)
        .map(|(line, packed)| encode_line(line, packed, ctx))
        .collect();

    let barch = BarchImage::new(raster.width(), lines)?;
    log::debug!(
        "Encoded {}x{}: {} of {} rows packed, {} bytes of row data",
        barch.width(),
        barch.height(),
        barch.compressed_rows(),
        barch.height(),
        barch.data_len()
    );
    Ok(barch)
}

/// Convert a barch image back into a raster.
pub fn decode_image(barch: &BarchImage) -> Result<RasterImage> {
    let width = barch.width() as usize;
    let ctx = Context::new(width);
    let mut data = Vec::with_capacity(width * barch.height() as usize);

    for (row, line) in barch.lines().iter().enumerate() {
        decode_line(line, &mut data, ctx).map_err(|err| {
            log::error!("Failed to decode row {}: {}", row, err);
            err
        })?;
    }

    RasterImage::new(barch.width(), barch.height(), data)
}
