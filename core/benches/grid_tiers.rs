use apagito_core::{GameConfig, GridGenerator, RandomGridGenerator};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [8u8, 32, 128] {
        let config = GameConfig::new((size, size), 0.25);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| RandomGridGenerator::new(0x5eed).generate(config))
        });
    }
    group.finish();
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_around");
    for size in [8u8, 32, 128] {
        let config = GameConfig::new((size, size), 0.25);
        let grid = RandomGridGenerator::new(0x5eed).generate(config);
        let center = (size / 2, size / 2);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| grid.flip_around(center))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flip);
criterion_main!(benches);
