// Benchmarks for registry construction and selection operations

use benchlab_core::benchmark::{BenchmarkTable, Benchmarks};
use benchlab_core::registry::{ImplementationProvider, SuiteImplementations};
use benchlab_core::selection::SelectionState;
use benchlab_core::suite::Suite;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NAMES: [&str; 8] = [
    "bytes-32", "bytes-64", "bytes-128", "bytes-256", "bytes-512", "bytes-1k", "bytes-4k",
    "bytes-16k",
];

fn table(skip_last: bool) -> BenchmarkTable {
    let mut table = BenchmarkTable::new();
    let count = if skip_last { NAMES.len() - 1 } else { NAMES.len() };
    for name in &NAMES[..count] {
        table.insert(*name, std::sync::Arc::new(|| {}));
    }
    table
}

struct Tables;

impl ImplementationProvider for Tables {
    fn implementations(&self, _suite: Suite) -> Option<SuiteImplementations> {
        Some(SuiteImplementations {
            ours: table(false),
            theirs: table(true),
        })
    }
}

fn bench_merge(c: &mut Criterion) {
    let ours = table(false);
    let theirs = table(true);
    c.bench_function("benchmarks_merge", |b| {
        b.iter(|| black_box(Benchmarks::merged(&ours, &theirs)))
    });
}

fn bench_selection_ops(c: &mut Criterion) {
    let state = SelectionState::from_provider(&Tables).unwrap();
    c.bench_function("selection_toggle", |b| {
        b.iter(|| state.toggle(black_box(Suite::Random)))
    });
    c.bench_function("selection_read_snapshot", |b| {
        b.iter(|| black_box(state.read()))
    });
}

criterion_group!(benches, bench_merge, bench_selection_ops);
criterion_main!(benches);
