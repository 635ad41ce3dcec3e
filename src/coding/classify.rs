//! Decides which rows benefit from run-length packing. A row is packed when
//! it contains enough uniform batches of white or black samples.

use crate::image::RasterImage;
use crate::utils::scheme::{
    is_black, is_white, BATCH_PIXELS, MIN_BATCHES_TO_COMPRESS,
};

/// Counts the complete uniform batches in 'row'. White and black runs are
/// counted separately; a sample of the other color resets the opposite run
/// and a gray sample resets both.
pub fn count_uniform_batches(row: &[u8]) -> usize {
    let mut whites = 0;
    let mut blacks = 0;
    let mut batches = 0;

    for sample in row {
        if is_white(*sample) {
            whites += 1;
            blacks = 0;
        } else if is_black(*sample) {
            blacks += 1;
            whites = 0;
        } else {
            whites = 0;
            blacks = 0;
        }

        if whites == BATCH_PIXELS {
            whites = 0;
            batches += 1;
        }
        if blacks == BATCH_PIXELS {
            blacks = 0;
            batches += 1;
        }
    }
    batches
}

/// Return True if 'row' should be stored packed.
pub fn is_worth_compressing(row: &[u8]) -> bool {
    count_uniform_batches(row) >= MIN_BATCHES_TO_COMPRESS
}

/// Classify every row of the image, top to bottom.
pub fn analyze_lines(image: &RasterImage) -> Vec<bool> {
    image
        .lines()
        .enumerate()
        .map(|(row, line)| {
            let packed = is_worth_compressing(line);
            log::trace!("Row {} is worth compressing: {}", row, packed);
            packed
        })
        .collect()
}
