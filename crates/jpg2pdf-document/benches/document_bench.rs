// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the jpg2pdf-document crate: SOF0 header sniffing
// and whole-document assembly into memory.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, Rgb, RgbImage};

use jpg2pdf_core::AssemblerConfig;
use jpg2pdf_document::{assemble_to_vec, inspect};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Encode a 640x480 gradient as a baseline JPEG.
fn sample_jpeg() -> Vec<u8> {
    let img = RgbImage::from_fn(640, 480, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, 85)
        .encode(img.as_raw(), 640, 480, ExtendedColorType::Rgb8)
        .expect("encode fixture");
    out
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_inspect(c: &mut Criterion) {
    let jpeg = sample_jpeg();
    c.bench_function("inspect (640x480)", |b| {
        b.iter(|| black_box(inspect(black_box(&jpeg)).expect("valid fixture")));
    });
}

/// Ten pages, including the xref table and trailer.
fn bench_assemble(c: &mut Criterion) {
    let jpeg = sample_jpeg();
    let images = vec![jpeg; 10];
    let total: usize = images.iter().map(Vec::len).sum();

    let mut group = c.benchmark_group("assemble");
    group.throughput(Throughput::Bytes(total as u64));
    group.bench_function("10 pages in memory", |b| {
        b.iter(|| {
            let pdf = assemble_to_vec(black_box(&images), AssemblerConfig::default())
                .expect("assemble");
            black_box(pdf.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_inspect, bench_assemble);
criterion_main!(benches);
