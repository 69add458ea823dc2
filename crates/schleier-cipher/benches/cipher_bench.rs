// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the XOR transform and pixel fingerprinting in the
// schleier-cipher crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use schleier_cipher::{XorCipher, XorKey, fingerprint};
use schleier_core::types::{ChannelLayout, PixelBuffer};

/// Build an RGB buffer with a non-uniform byte pattern.
fn patterned_buffer(width: u32, height: u32) -> PixelBuffer {
    let len = width as usize * height as usize * 3;
    let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    PixelBuffer::from_parts(width, height, ChannelLayout::Rgb, data)
        .expect("length matches dimensions")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark the XOR transform at several image sizes.
///
/// Sizes: thumbnail, mid-size photo, and full-HD frame -- the realistic
/// range for a per-image CLI run.
fn bench_xor_transform(c: &mut Criterion) {
    let sizes: &[(&str, u32, u32)] = &[
        ("64x64", 64, 64),
        ("512x512", 512, 512),
        ("1920x1080", 1920, 1080),
    ];

    let cipher = XorCipher::new(XorKey::from_byte(173));

    let mut group = c.benchmark_group("xor_transform_rgb");
    for &(label, width, height) in sizes {
        let buffer = patterned_buffer(width, height);
        group.bench_function(label, |b| {
            b.iter(|| {
                let out = cipher.encrypt(black_box(&buffer));
                black_box(out);
            });
        });
    }
    group.finish();
}

/// Benchmark a full encrypt-then-decrypt round trip on a 512x512 image,
/// asserting that the output matches the input.
fn bench_round_trip(c: &mut Criterion) {
    let cipher = XorCipher::new(XorKey::from_byte(90));
    let buffer = patterned_buffer(512, 512);

    c.bench_function("encrypt_decrypt_roundtrip (512x512)", |b| {
        b.iter(|| {
            let encrypted = cipher.encrypt(black_box(&buffer));
            let decrypted = cipher.decrypt(&encrypted);
            assert_eq!(decrypted.data().len(), buffer.data().len());
            black_box(decrypted);
        });
    });
}

/// Benchmark SHA-256 pixel fingerprinting on a full-HD frame.
fn bench_fingerprint(c: &mut Criterion) {
    let buffer = patterned_buffer(1920, 1080);

    c.bench_function("fingerprint (1920x1080)", |b| {
        b.iter(|| {
            let hex = fingerprint(black_box(&buffer));
            black_box(hex);
        });
    });
}

criterion_group!(benches, bench_xor_transform, bench_round_trip, bench_fingerprint);
criterion_main!(benches);
