//! Benchmark for converting whole images.

use barch::{decode_image, deserialize, encode_image, serialize, RasterImage};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A page-like image: mostly white, with black bars and some gray noise.
fn get_large_image(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let sample = if row % 16 < 3 && col % 64 < 40 {
                0
            } else if (row * 31 + col * 17) % 29 == 0 {
                (row ^ col) as u8 | 1
            } else {
                255
            };
            data.push(sample);
        }
    }
    RasterImage::new(width, height, data).unwrap()
}

fn encode_large_image() {
    let raster = get_large_image(1024, 512);
    let barch = encode_image(&raster).unwrap();
    black_box(serialize(&barch).len());
}

fn decode_large_image() {
    let raster = get_large_image(1024, 512);
    let bytes = serialize(&encode_image(&raster).unwrap());
    let barch = deserialize(&bytes).unwrap();
    black_box(decode_image(&barch).unwrap().data().len());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("encode_large_image", |b| b.iter(encode_large_image));
    c.bench_function("decode_large_image", |b| b.iter(decode_large_image));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
