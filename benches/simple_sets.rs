#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashSet;

use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};
use simple_sets::{ChainedHashSet, ProbingHashSet, SimpleSet};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_set_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<String>(), ITEMS_AMOUNT).new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("String set comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("chained add", |b| {
        b.iter(|| {
            let mut set = ChainedHashSet::new();
            for item in &items {
                set.add(item);
            }
            set
        });
    });
    group.bench_function("probing add", |b| {
        b.iter(|| {
            let mut set = ProbingHashSet::new();
            for item in &items {
                set.add(item);
            }
            set
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut set = HashSet::new();
            for item in &items {
                set.insert(item.clone());
            }
            set
        });
    });

    let chained = ChainedHashSet::from_data(&items);
    let probing = ProbingHashSet::from_data(&items);
    let rust_set: HashSet<&String> = items.iter().collect();
    group.bench_function("chained contains", |b| {
        b.iter(|| items.iter().filter(|item| chained.contains(item)).count());
    });
    group.bench_function("probing contains", |b| {
        b.iter(|| items.iter().filter(|item| probing.contains(item)).count());
    });
    group.bench_function("rust std contains", |b| {
        b.iter(|| items.iter().filter(|item| rust_set.contains(item)).count());
    });
    group.finish();
}

criterion_group!(benches, hash_set_benches);

criterion_main!(benches);
