use criterion::{black_box, criterion_group, criterion_main, Criterion};
use packlab::{ColorSpace, Describer, GamutTable, MixBuffer, PackedColor};

pub fn run_benchmarks(c: &mut Criterion) {
    let space = ColorSpace::Oklab;
    let table = GamutTable::builtin(space);
    let describer = Describer::builtin(space);
    let target = PackedColor::from_rgba8888(space, 0xc0_80_40_ff);

    let mut group = c.benchmark_group("convert");
    group.bench_function("from-rgba8888", |b| {
        b.iter(|| PackedColor::from_rgba8888(space, black_box(0xc0_80_40_ff)))
    });
    group.bench_function("to-rgba8888", |b| {
        b.iter(|| black_box(target).to_rgba8888(space))
    });
    group.bench_function("limit-to-gamut", |b| {
        b.iter(|| black_box(PackedColor::new(150, 255, 0, 254)).limit_to_gamut(table))
    });
    group.finish();

    let mut group = c.benchmark_group("describe");
    let mut buffer = MixBuffer::new();
    group.bench_function("parse-description", |b| {
        b.iter(|| {
            describer.parse_description_with(black_box("lighter dull apricot olive"), &mut buffer)
        })
    });
    group.bench_function("best-match-1", |b| {
        b.iter(|| describer.best_match_with(black_box(target), 1, &mut buffer))
    });

    group.sample_size(10);
    group.bench_function("best-match-2", |b| {
        b.iter(|| describer.best_match_with(black_box(target), 2, &mut buffer))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
