#![no_main]

use barch::coding::decoder::RowDecoder;
use barch::coding::encoder::RowEncoder;
use barch::{Context, Decoder, Encoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let ctx = Context::new(data.len());
    let mut packed: Vec<u8> = Vec::new();
    {
        let mut encoder = RowEncoder::new(data, &mut packed, ctx);
        let written = encoder.encode();
        assert_eq!(written, packed.len());
    }

    let mut decoded: Vec<u8> = Vec::new();
    {
        let mut decoder = RowDecoder::new(&packed, &mut decoded, ctx);
        let (consumed, written) = decoder.decode().unwrap();
        assert_eq!(consumed, packed.len());
        assert_eq!(written, data.len());
    }
    assert_eq!(decoded, data);
});
