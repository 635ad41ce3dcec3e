#![no_main]

use barch::{decode_image, deserialize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(barch) = deserialize(data) {
        // Every parsed row decodes to exactly one row of samples.
        let raster = decode_image(&barch).unwrap();
        assert_eq!(
            raster.data().len(),
            barch.width() as usize * barch.height() as usize
        );
    }
});
