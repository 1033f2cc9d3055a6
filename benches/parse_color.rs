use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tincture::{Color, SignalContext, Signalable, WorkingSpace};

fn parse_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_color");
    for (name, input) in [
        ("hex", "#ff0077"),
        ("rgb", "rgb(255, 0, 119)"),
        ("hsl", "hsl(330deg 100% 50% / 0.5)"),
        ("named", "mediumslateblue"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| Color::parse(black_box(input).into()).unwrap())
        });
    }
    group.finish();
}

fn interpolate(c: &mut Criterion) {
    let from = Color::from_rgb(255, 0, 119);
    let to = Color::from_rgb(0, 119, 255);

    let mut group = c.benchmark_group("interpolate");
    for space in WorkingSpace::ALL {
        group.bench_function(space.name(), |b| {
            b.iter(|| Color::lerp(Some(&from), Some(black_box(&to)), black_box(0.3), space))
        });
    }
    group.finish();
}

fn signal(c: &mut Criterion) {
    let progress = SignalContext::<f64>::new().create_signal(0.0).unwrap();
    let color = SignalContext::<Color>::new().create_neutral_signal();

    let position = progress.clone();
    color.set_fallible_expression(move || {
        Ok(Color::lerp(
            Some(&Color::red()),
            Some(&Color::blue()),
            position.get()?,
            WorkingSpace::default(),
        ))
    });

    c.bench_function("signal_cached_read", |b| b.iter(|| color.get().unwrap()));
    c.bench_function("signal_recompute", |b| {
        b.iter(|| {
            color.invalidate();
            color.get().unwrap()
        })
    });
}

criterion_group!(benches, parse_color, interpolate, signal);
criterion_main!(benches);
