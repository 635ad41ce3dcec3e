//! In-memory image representations: the raw raster that readers produce and
//! the barch image whose rows are either raw or bit-packed.

use crate::coding::decoder::packed_row_len;
use crate::error::{BarchError, Result};
use crate::utils::scheme::SUPPORTED_BITS_PER_PIXEL;

/// An uncompressed grayscale raster. Samples are stored row after row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    /// The declared depth of each pixel. Only 8 can be encoded.
    bits_per_pixel: u16,
    data: Vec<u8>,
}

impl RasterImage {
    /// Creates an 8-bit raster from 'data', which must hold exactly
    /// width * height samples.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::with_depth(width, height, SUPPORTED_BITS_PER_PIXEL, data)
    }

    /// Creates a raster that declares 'bits_per_pixel'. The buffer still
    /// holds one byte per sample; the depth is checked when encoding.
    pub fn with_depth(
        width: u32,
        height: u32,
        bits_per_pixel: u16,
        data: Vec<u8>,
    ) -> Result<Self> {
        let invalid = BarchError::InvalidDimensions {
            width: width as usize,
            height: height as usize,
        };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| invalid.clone())?;
        if data.len() != expected {
            log::error!(
                "Raster of {}x{} holds {} samples instead of {}",
                width,
                height,
                data.len(),
                expected
            );
            return Err(invalid);
        }
        Ok(Self {
            width,
            height,
            bits_per_pixel,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the samples of row 'row'.
    pub fn line(&self, row: usize) -> &[u8] {
        let width = self.width as usize;
        &self.data[row * width..(row + 1) * width]
    }

    /// Iterates over the rows, top to bottom.
    pub fn lines(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Returns the sample at column 'col' of row 'row'.
    pub fn pixel(&self, col: usize, row: usize) -> u8 {
        self.line(row)[col]
    }
}

/// The stored bytes of one barch row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanline {
    /// Exactly 'width' samples, stored as is.
    Raw(Vec<u8>),
    /// A bit-packed run-length stream.
    Packed(Vec<u8>),
}

impl Scanline {
    /// The compression flag of this row.
    pub fn is_packed(&self) -> bool {
        matches!(self, Scanline::Packed(_))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Scanline::Raw(bytes) | Scanline::Packed(bytes) => bytes,
        }
    }
}

/// A grayscale image in barch form. The flag table is the 'is_packed' state of
/// the rows, so the number of flags always matches the height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarchImage {
    width: u32,
    lines: Vec<Scanline>,
}

impl BarchImage {
    /// Creates an image from its rows. Raw rows must hold exactly 'width'
    /// samples, and packed rows must decode to 'width' samples with no bytes
    /// left over.
    pub fn new(width: u32, lines: Vec<Scanline>) -> Result<Self> {
        let invalid = BarchError::InvalidDimensions {
            width: width as usize,
            height: lines.len(),
        };
        if width == 0 || lines.is_empty() || u32::try_from(lines.len()).is_err()
        {
            return Err(invalid);
        }

        for (row, line) in lines.iter().enumerate() {
            let expected = match line {
                Scanline::Raw(_) => width as usize,
                Scanline::Packed(bytes) => {
                    packed_row_len(bytes, width as usize)?
                }
            };
            if line.bytes().len() != expected {
                return Err(BarchError::MalformedContainer(format!(
                    "row {} holds {} bytes instead of {}",
                    row,
                    line.bytes().len(),
                    expected
                )));
            }
        }

        Ok(Self { width, lines })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        // The constructor checks that the row count fits.
        self.lines.len() as u32
    }

    pub fn line(&self, row: usize) -> &Scanline {
        &self.lines[row]
    }

    pub fn lines(&self) -> &[Scanline] {
        &self.lines
    }

    /// The compression flag of each row.
    pub fn flags(&self) -> Vec<bool> {
        self.lines.iter().map(Scanline::is_packed).collect()
    }

    /// The number of bit-packed rows.
    pub fn compressed_rows(&self) -> usize {
        self.lines.iter().filter(|l| l.is_packed()).count()
    }

    /// The total number of stored row bytes.
    pub fn data_len(&self) -> usize {
        self.lines.iter().map(|l| l.bytes().len()).sum()
    }
}
