use criterion::{criterion_group, criterion_main, Criterion};
use iso3166_core::prelude::*;
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let iso = Iso3166::new();

    c.bench_function("alpha2_hit", |b| {
        b.iter(|| iso.alpha2(black_box("US")).unwrap())
    });

    c.bench_function("alpha3_hit_late_in_table", |b| {
        b.iter(|| iso.alpha3(black_box("ZWE")).unwrap())
    });

    c.bench_function("name_unicode_hit", |b| {
        b.iter(|| iso.name(black_box("Côte d'Ivoire")).unwrap())
    });

    c.bench_function("alpha2_miss_full_scan", |b| {
        b.iter(|| iso.alpha2(black_box("ZZ")).unwrap_err())
    });

    let aliased = Aliased::new(Iso3166::new());
    c.bench_function("aliased_name_hit", |b| {
        b.iter(|| aliased.name(black_box("USA")).unwrap())
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
