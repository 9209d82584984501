//! Builtin bootstrap performance benchmarks
//!
//! Measures operator mangling, full registry bootstrap and lookup.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scalar_fn_catalog::{CatalogConfig, Type, mangle_operator};
use scalar_fn_catalog_builtins::{BuiltinRegistry, engine_symbol_table};

fn bench_mangle_operator(c: &mut Criterion) {
    let args = [Type::DECIMAL, Type::DECIMAL];

    c.bench_function("builtins/mangle_operator", |b| {
        b.iter(|| {
            let symbol = mangle_operator(black_box("multiply"), black_box(&args));
            black_box(symbol);
        });
    });
}

fn bench_engine_symbol_table(c: &mut Criterion) {
    let config = CatalogConfig::default();

    c.bench_function("builtins/engine_symbol_table", |b| {
        b.iter(|| {
            let table = engine_symbol_table(black_box(&config));
            black_box(table);
        });
    });
}

fn bench_bootstrap(c: &mut Criterion) {
    let config = CatalogConfig::default();

    c.bench_function("builtins/bootstrap", |b| {
        b.iter(|| {
            let registry = BuiltinRegistry::bootstrap(black_box(&config));
            black_box(registry);
        });
    });
}

fn bench_lookup(c: &mut Criterion) {
    let registry = BuiltinRegistry::default();

    c.bench_function("builtins/get_function", |b| {
        b.iter(|| {
            let add = registry.get_function(black_box("add"), vec![Type::BIGINT, Type::BIGINT]);
            black_box(add);
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_mangle_operator, bench_engine_symbol_table, bench_bootstrap, bench_lookup
);

criterion_main!(benches);
