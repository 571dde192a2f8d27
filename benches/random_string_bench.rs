use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linegen::{random_string, Config, FileGenerator};
use rand::{rngs::SmallRng, SeedableRng};

pub fn generate_bench(c: &mut Criterion) {
    c.bench_function("random_string_1k", |b| {
        let mut prng = SmallRng::seed_from_u64(42);
        b.iter(|| black_box(random_string(&mut prng, 1, 1_000).unwrap()))
    });

    c.bench_function("write_lines_sink", |b| {
        let generator = FileGenerator::new(Config {
            line_count: 100,
            ..Config::new("unused")
        });
        let mut prng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            generator
                .write_lines(&mut io::sink(), &mut prng)
                .unwrap()
        })
    });
}

criterion_group!(benches, generate_bench);
criterion_main!(benches);
