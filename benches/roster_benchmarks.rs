use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roster::{exact_match, sort_roster, HierarchyBuilder, KeyOrder, ManagerRole, NewEmployee, RosterStore};

fn build_store(size: usize) -> RosterStore {
    let mut store = RosterStore::new();
    for i in 0..size {
        // Scatter keys so the input is far from sorted
        let record = NewEmployee::new(format!("First{}", (i * 7919) % size), format!("Last{}", (i * 104_729) % size));
        if i % 25 == 0 {
            store.add_manager(record, ManagerRole::ALL[i % ManagerRole::ALL.len()]);
        } else {
            store.add_employee(record);
        }
    }
    store
}

/// Benchmark merge sort throughput
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_roster");

    for size in [100, 1000, 10_000].iter() {
        let store = build_store(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| sort_roster(store.employees(), KeyOrder::LastThenFirst));
        });
    }
    group.finish();
}

/// Benchmark exact lookups against a sorted view
fn bench_exact_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_search");

    for size in [100, 1000, 10_000].iter() {
        let store = build_store(*size);
        let sorted = sort_roster(store.employees(), KeyOrder::LastThenFirst);
        let queries: Vec<String> = store.employees().iter().take(100).map(|e| e.full_name()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| queries.iter().filter(|q| exact_match(&sorted, q).is_some()).count());
        });
    }
    group.finish();
}

/// Benchmark hierarchy construction
fn bench_hierarchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy_build");
    let builder = HierarchyBuilder::default();

    for size in [100, 1000, 10_000].iter() {
        let store = build_store(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| builder.build(&store).len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_exact_search, bench_hierarchy);
criterion_main!(benches);
