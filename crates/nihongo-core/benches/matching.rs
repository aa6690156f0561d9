use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nihongo_core::group::resolve_group;
use nihongo_core::normalize::{expand_accepted, normalize_umlauts};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_umlauts");

    group.bench_function("no_umlauts", |b| {
        b.iter(|| normalize_umlauts(black_box("essen und trinken")))
    });

    group.bench_function("umlauts", |b| {
        b.iter(|| normalize_umlauts(black_box("Überprüfen, hören, mögen, Ärger")))
    });

    group.finish();
}

fn bench_accepted_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_accepted");

    let single = vec!["mögen".to_string()];
    let many: Vec<String> = (0..20).map(|i| format!("übersetzung {i}")).collect();

    group.bench_function("single", |b| b.iter(|| expand_accepted(black_box(&single))));
    group.bench_function("twenty", |b| b.iter(|| expand_accepted(black_box(&many))));

    group.finish();
}

fn bench_resolve_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_group");

    for input in ["2", " GODAN ", "unregelmaessig", "banana"] {
        group.bench_function(input.trim(), |b| b.iter(|| resolve_group(black_box(input))));
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_accepted_set, bench_resolve_group);
criterion_main!(benches);
