//! Benchmarks for grid layout queries.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use calview::{CalendarMode, CalendarView, GridConfig, Rect};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_view(mode: CalendarMode) -> CalendarView {
    CalendarView::new(mode, &GridConfig::default(), 760.0, 600.0).expect("valid default config")
}

/// Element enumeration for the viewport vs the whole content
fn bench_elements_intersecting(c: &mut Criterion) {
    let mut group = c.benchmark_group("elements_intersecting");
    for mode in [CalendarMode::Week, CalendarMode::Day] {
        let view = create_view(mode);
        let viewport = view.viewport().bounds();
        let full = Rect::from_size(view.content_size());

        group.bench_with_input(BenchmarkId::new("viewport", mode), &viewport, |b, rect| {
            b.iter(|| view.layout().elements_intersecting(black_box(*rect)))
        });
        group.bench_with_input(BenchmarkId::new("full", mode), &full, |b, rect| {
            b.iter(|| view.layout().elements_intersecting(black_box(*rect)))
        });
    }
    group.finish();
}

/// Frames plus label/color content for the current viewport
fn bench_render(c: &mut Criterion) {
    let view = create_view(CalendarMode::Week);
    c.bench_function("render_week_viewport", |b| {
        b.iter(|| black_box(view.visible_items()))
    });
}

/// Resize churn: every call invalidates and recomputes metrics
fn bench_resize(c: &mut Criterion) {
    let mut view = create_view(CalendarMode::Week);
    let mut width = 760.0;
    c.bench_function("resize_and_query", |b| {
        b.iter(|| {
            width = if width > 760.0 { 760.0 } else { 1000.0 };
            view.resize(black_box(width), 600.0);
            black_box(view.visible_items())
        })
    });
}

/// Mode switching rebuilds label tracks and counts
fn bench_set_mode(c: &mut Criterion) {
    let mut view = create_view(CalendarMode::Week);
    let mut mode = CalendarMode::Week;
    c.bench_function("set_mode", |b| {
        b.iter(|| {
            mode = match mode {
                CalendarMode::Week => CalendarMode::Day,
                CalendarMode::Day => CalendarMode::Week,
            };
            view.set_mode(black_box(mode)).expect("built-in modes are valid")
        })
    });
}

criterion_group!(
    benches,
    bench_elements_intersecting,
    bench_render,
    bench_resize,
    bench_set_mode
);
criterion_main!(benches);
