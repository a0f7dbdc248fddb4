use aiexec_domain::component::Component;
use aiexec_registry::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::any::Any;
use std::hint::black_box;

#[derive(Debug)]
struct Unit;

impl Component for Unit {
    fn kind(&self) -> &'static str {
        "unit"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn catalog(size: usize) -> Registry {
    let names: Vec<String> = (0..size).map(|i| format!("Component{i}")).collect();
    Registry::builder("bench")
        .declare(names.iter().map(String::as_str))
        .locations(names.iter().map(|name| (name.as_str(), Location::module(format!("bench.{name}")))))
        .loader(loader_fn(|_, _| Ok(Resolved::component(Unit))))
        .build()
        .unwrap()
}

// ============================================================================
// Benchmark: Construction & Validation
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("build", size), &size, |b, &size| {
            b.iter(|| black_box(catalog(size)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Lookup
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let registry = catalog(100);
    registry.prewarm_all(PrewarmPolicy::FailFast).unwrap();

    group.bench_function("cache_hit", |b| {
        b.iter(|| black_box(registry.get_symbol("Component42").unwrap()));
    });

    group.bench_function("unknown", |b| {
        b.iter(|| black_box(registry.get_symbol("Missing").unwrap_err()));
    });

    group.bench_function("first_access", |b| {
        b.iter_batched(
            || catalog(1),
            |fresh| black_box(fresh.get_symbol("Component0").unwrap()),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_lookup);
criterion_main!(benches);
