use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use stockroom_core::ItemKey;
use stockroom_index::{compare_by_key, heap_sort, Item, ItemPayload, SortedItemIndex};

fn item(key: &str) -> Item {
    Item::new(
        key,
        ItemPayload {
            quantity: 1,
            unit_price: 100,
            added_at: Utc::now(),
        },
    )
    .unwrap()
}

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i:08}")).collect()
}

fn populated_index(n: usize) -> SortedItemIndex {
    SortedItemIndex::from_unsorted(keys(n).iter().map(|k| item(k)).collect()).unwrap()
}

/// Naive baseline: linear scan over an unordered Vec, the shape the sorted
/// index exists to beat.
fn linear_find<'a>(items: &'a [Item], key: &ItemKey) -> Option<&'a Item> {
    items.iter().find(|i| i.key() == key)
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for n in [100, 1_000, 10_000] {
        let index = populated_index(n);
        let flat: Vec<Item> = index.iter().cloned().collect();
        // Worst case for the linear scan: last element.
        let needle = ItemKey::new(format!("item-{:08}", n - 1));

        group.bench_with_input(BenchmarkId::new("binary_search", n), &n, |b, _| {
            b.iter(|| index.locate(black_box(&needle)))
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", n), &n, |b, _| {
            b.iter(|| linear_find(black_box(&flat), black_box(&needle)))
        });
    }

    group.finish();
}

fn bench_ordered_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_insert");

    for n in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let batch: Vec<Item> = keys(n).iter().map(|k| item(k)).collect();
            b.iter(|| {
                let mut index = SortedItemIndex::new();
                for it in batch.iter().cloned() {
                    index.insert(it).unwrap();
                }
                index
            })
        });
    }

    group.finish();
}

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");

    for n in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        // Reversed input: no partial order for any sort to exploit.
        let batch: Vec<Item> = keys(n).iter().rev().map(|k| item(k)).collect();

        group.bench_with_input(BenchmarkId::new("heap_sort", n), &n, |b, _| {
            b.iter(|| {
                let mut data = batch.clone();
                heap_sort(&mut data, compare_by_key);
                data
            })
        });
        group.bench_with_input(BenchmarkId::new("std_sort", n), &n, |b, _| {
            b.iter(|| {
                let mut data = batch.clone();
                data.sort_by(compare_by_key);
                data
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_ordered_insert, bench_heap_sort);
criterion_main!(benches);
