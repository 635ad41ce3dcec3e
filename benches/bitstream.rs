//! A benchmark for the bit writer and reader.

use barch::bitstream::{BitReader, BitWriter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn test_push_1bit() {
    let mut bw = BitWriter::new();
    let mut out = Vec::new();
    for i in 0..1_000_000u32 {
        out.extend(bw.push(i as u8, 1));
    }
    out.extend(bw.finish());

    black_box(out.len());
}

fn test_push_n_bits() {
    let mut bw = BitWriter::new();
    let mut out = Vec::new();
    for i in 0..1_000_000u32 {
        out.extend(bw.push(i as u8, 1 + (i % 8) as u8));
    }
    out.extend(bw.finish());

    black_box(out.len());
}

fn test_pull_n_bits() {
    let input: Vec<u8> = (0..1_000_000u32).map(|i| (i ^ (i >> 3)) as u8).collect();
    let mut br = BitReader::new(&input);

    let mut i = 0;
    while let Some(val) = br.pull(1 + i % 8) {
        i = i.wrapping_add(1);
        black_box(val);
    }

    black_box(br.consumed_bytes());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("push 1 bit", |b| b.iter(test_push_1bit));
    c.bench_function("push n bits", |b| b.iter(test_push_n_bits));
    c.bench_function("pull n bits", |b| b.iter(test_pull_n_bits));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
