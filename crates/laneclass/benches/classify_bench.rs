//! Criterion microbenches for the classification pipeline.
//!
//! - presets: each hand-built cross-section through `classify`.
//! - sampled: realistic random cross-sections (1–4 lanes per side).
//! - scaling: wide synthetic interleaved sections to stress the complex path.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use laneclass::gen::{draw_cross_section, presets, CrossSectionCfg, ReplayToken};
use laneclass::{classify, LaneDescriptor, LaneDirection};

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    for (name, lanes) in presets::all() {
        group.bench_with_input(BenchmarkId::new("classify", name), &lanes, |b, lanes| {
            b.iter(|| classify(lanes))
        });
    }
    group.finish();
}

fn bench_sampled(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampled");
    let cfg = CrossSectionCfg {
        shuffle_probability: 0.25,
        ..CrossSectionCfg::default()
    };
    group.bench_function(BenchmarkId::new("draw_cross_section", "default"), |b| {
        b.iter_batched(
            || ReplayToken { seed: 42, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = draw_cross_section(cfg, tok);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("classify", "default"), |b| {
        b.iter_batched(
            || {
                let tok = ReplayToken { seed: 7, index: 3 };
                draw_cross_section(cfg, tok).unwrap()
            },
            |lanes| {
                let _ = classify(&lanes);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

/// Alternating blocks of `block` lanes per direction, `n` lanes in total.
fn interleaved(n: usize, block: usize) -> Vec<LaneDescriptor> {
    (0..n)
        .map(|i| {
            let dir = if (i / block) % 2 == 0 {
                LaneDirection::Backward
            } else {
                LaneDirection::Forward
            };
            LaneDescriptor::through(i as f64 * 3.0, 3.0, dir)
        })
        .collect()
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    for &n in &[8usize, 32, 128] {
        let lanes = interleaved(n, 2);
        group.bench_with_input(BenchmarkId::new("interleaved", n), &lanes, |b, lanes| {
            b.iter(|| classify(lanes))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_presets, bench_sampled, bench_scaling);
criterion_main!(benches);
