//! Benchmarks for the two render paths.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fractal_canvas::{
    CanvasSize, MandelbrotAlgorithm, MandelbrotView, Palette, SierpinskiDepth,
    generate_fractal_parallel_rayon, generate_fractal_serial, render_mandelbrot, render_sierpinski,
};
use std::hint::black_box;

const LAYOUT_WIDTHS: [u32; 3] = [320, 640, 900];

fn bench_mandelbrot_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot/render");
    let view = MandelbrotView::default();

    for width in LAYOUT_WIDTHS {
        let canvas = CanvasSize::from_layout_width(width);
        group.throughput(Throughput::Elements(canvas.pixel_count() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", canvas.width(), canvas.height())),
            &canvas,
            |b, &canvas| {
                b.iter(|| black_box(render_mandelbrot(canvas, &view, Palette::WarmGradient)));
            },
        );
    }

    group.finish();
}

fn bench_mandelbrot_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot/generate");
    let view = MandelbrotView::default();
    let canvas = CanvasSize::DEFAULT;
    let Ok(rect) = view.complex_rect(canvas) else {
        return;
    };
    let Ok(algorithm) = MandelbrotAlgorithm::new(canvas, rect, view.max_iterations) else {
        return;
    };

    group.throughput(Throughput::Elements(canvas.pixel_count() as u64));
    group.bench_function("serial", |b| {
        b.iter(|| black_box(generate_fractal_serial(&algorithm)));
    });
    group.bench_function("rayon", |b| {
        b.iter(|| black_box(generate_fractal_parallel_rayon(&algorithm)));
    });

    group.finish();
}

fn bench_sierpinski_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sierpinski/render");
    let canvas = CanvasSize::DEFAULT;

    for depth in [0, 5, 9] {
        let depth = SierpinskiDepth::new(depth);

        group.bench_with_input(BenchmarkId::new("depth", depth.get()), &depth, |b, &depth| {
            b.iter(|| black_box(render_sierpinski(canvas, depth, Palette::Magenta)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mandelbrot_render,
    bench_mandelbrot_generation,
    bench_sierpinski_render
);
criterion_main!(benches);
