//! Benchmarks for color conversion, parsing and contrast.
//!
//! Run with: `cargo bench --package glaze-color --bench color_bench`
//!
//! The studio recomputes every derived value on each message, so these paths
//! sit on the interactive loop. A full contrast evaluation of a glass button
//! is nine composites plus nine ratios.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glaze_color::{
    ColorFormat, Rgb, composite_glossy, composite_over, contrast_ratio, hex_to_rgb, hsl_to_rgb,
    parse_color, rgb_to_hex, rgb_to_hsl,
};
use std::hint::black_box;

// ============================================================================
// Test Data
// ============================================================================

/// Deterministic spread of colors across the cube.
fn sample_colors(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let i = i as u32;
            Rgb::new(
                (i.wrapping_mul(37) % 256) as u8,
                (i.wrapping_mul(91) % 256) as u8,
                (i.wrapping_mul(151) % 256) as u8,
            )
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let colors = sample_colors(256);
    let hexes: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();

    group.bench_function("rgb_to_hex", |b| {
        b.iter(|| {
            for c in &colors {
                black_box(rgb_to_hex(c.r, c.g, c.b));
            }
        });
    });
    group.bench_function("hex_to_rgb", |b| {
        b.iter(|| {
            for hex in &hexes {
                black_box(hex_to_rgb(black_box(hex)));
            }
        });
    });
    group.bench_function("hsl_round_trip", |b| {
        b.iter(|| {
            for c in &colors {
                let hsl = rgb_to_hsl(c.r, c.g, c.b);
                black_box(hsl_to_rgb(hsl.h, hsl.s, hsl.l));
            }
        });
    });
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_color");
    let inputs = [
        (ColorFormat::Hex, "#3498db"),
        (ColorFormat::Rgb, "rgb( 52 , 152 , 219 )"),
        (ColorFormat::Hsl, "hsl(204,70%,53%)"),
        (ColorFormat::Rgb, "rgb(300,0,0)"),
    ];
    for (format, text) in inputs {
        group.bench_with_input(BenchmarkId::new(format.as_str(), text), &text, |b, text| {
            b.iter(|| black_box(parse_color(black_box(text), format)));
        });
    }
    group.finish();
}

fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");
    let base = Rgb::new(7, 6, 0);
    let text = Rgb::new(255, 255, 251);
    let samples = sample_colors(9);

    group.bench_function("ratio", |b| {
        b.iter(|| black_box(contrast_ratio(black_box(base), black_box(text))));
    });
    group.bench_function("glass_matte_9_samples", |b| {
        b.iter(|| {
            samples
                .iter()
                .map(|&bg| contrast_ratio(text, composite_over(base, bg, 60)))
                .fold(f64::INFINITY, f64::min)
        });
    });
    group.bench_function("glass_glossy_9_samples", |b| {
        b.iter(|| {
            samples
                .iter()
                .map(|&bg| contrast_ratio(text, composite_glossy(base, bg, 60, 20)))
                .fold(f64::INFINITY, f64::min)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_conversion, bench_parse, bench_contrast);
criterion_main!(benches);
