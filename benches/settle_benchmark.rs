//! Refresh and resize chain benchmarks.
//!
//! A tier transition runs min-height update, recalculation, forced relayout
//! and settle on the UI thread; these measure that chain and a plain locked
//! resize.
//!
//! Run with: cargo bench --bench settle_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radio_overlay::config::ResolvedConfig;
use radio_overlay::integration::build_overlay;
use radio_overlay::model::{Modulation, RadioSnapshot};

fn bench_tier_transition(c: &mut Criterion) {
    let config = ResolvedConfig::default();
    let six = Some(RadioSnapshot::current([Modulation::Am; 6]));

    c.bench_function("tier_transition_round_trip", |b| {
        let mut overlay = build_overlay(&config);
        b.iter(|| {
            overlay.source_mut().set(black_box(six.clone()));
            overlay.on_refresh_tick();
            overlay.source_mut().set(None);
            overlay.on_refresh_tick();
        });
    });
}

fn bench_steady_refresh(c: &mut Criterion) {
    let config = ResolvedConfig::default();
    let mut overlay = build_overlay(&config);
    overlay
        .source_mut()
        .set(Some(RadioSnapshot::current([Modulation::Fm; 6])));
    overlay.on_refresh_tick();

    c.bench_function("steady_refresh_no_transition", |b| {
        b.iter(|| black_box(overlay.on_refresh_tick()));
    });
}

fn bench_locked_resize(c: &mut Criterion) {
    let config = ResolvedConfig::default();
    let mut overlay = build_overlay(&config);
    let mut grow = true;

    c.bench_function("locked_resize_settle", |b| {
        b.iter(|| {
            let (w, h) = if grow { (1400.0, 700.0) } else { (800.0, 400.0) };
            grow = !grow;
            overlay.window_mut().resize(black_box(w), black_box(h));
            black_box(overlay.settle());
        });
    });
}

criterion_group!(
    benches,
    bench_tier_transition,
    bench_steady_refresh,
    bench_locked_resize
);
criterion_main!(benches);
