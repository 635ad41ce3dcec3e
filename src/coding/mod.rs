//! This module contains the row-level run-length coding: the heuristic that
//! decides which rows to pack, and the packed row encoder and decoder.

pub mod classify;
pub mod decoder;
pub mod encoder;

use crate::utils::scheme::{
    is_black, is_white, BATCH_PIXELS, BLACK_CODE, BLACK_CODE_BITS,
    LITERAL_CODE, LITERAL_CODE_BITS, WHITE_CODE, WHITE_CODE_BITS,
};

/// One unit of the packed stream. Every symbol covers a window of up to
/// BATCH_PIXELS samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    /// Four white samples, code '0'.
    White,
    /// Four black samples, code '10'.
    Black,
    /// The samples of the window verbatim, after the code '11'.
    Literal(&'a [u8]),
}

impl<'a> Symbol<'a> {
    /// Pick the symbol for a window of samples. Only full windows can be
    /// stored as runs.
    pub fn from_window(window: &'a [u8]) -> Self {
        debug_assert!(!window.is_empty() && window.len() <= BATCH_PIXELS);
        if window.len() == BATCH_PIXELS {
            if window.iter().all(|s| is_white(*s)) {
                return Symbol::White;
            }
            if window.iter().all(|s| is_black(*s)) {
                return Symbol::Black;
            }
        }
        Symbol::Literal(window)
    }

    /// Returns the code of the symbol and its width in bits.
    pub fn code(&self) -> (u8, u8) {
        match self {
            Symbol::White => (WHITE_CODE, WHITE_CODE_BITS),
            Symbol::Black => (BLACK_CODE, BLACK_CODE_BITS),
            Symbol::Literal(_) => (LITERAL_CODE, LITERAL_CODE_BITS),
        }
    }

    /// The number of bits the symbol occupies in the stream.
    pub fn bit_len(&self) -> usize {
        let (_, bits) = self.code();
        match self {
            Symbol::Literal(samples) => bits as usize + samples.len() * 8,
            _ => bits as usize,
        }
    }
}
