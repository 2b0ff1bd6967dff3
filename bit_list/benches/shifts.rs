// benches/shifts.rs

use bit_list::BitList;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_list(size: usize) -> BitList {
    (0..size).map(|i| i % 3 == 0).collect()
}

fn bench_push(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("push");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = BitList::new();
                for i in 0..size {
                    list.push(black_box(i % 2 == 0));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_insert_remove_front(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("insert_remove_front");
    for size in sizes {
        let mut list = create_list(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                list.insert(0, black_box(true)).unwrap();
                list.remove(0).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_insert_remove_middle(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("insert_remove_middle");
    for size in sizes {
        let mut list = create_list(size);
        let middle = size / 2 + 3;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                list.insert(middle, black_box(false)).unwrap();
                list.remove(middle).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("traversal");
    for size in sizes {
        let list = create_list(size);

        group.bench_with_input(BenchmarkId::new("iter", size), &size, |b, _| {
            b.iter(|| list.iter().filter(|&v| black_box(v)).count());
        });

        group.bench_with_input(BenchmarkId::new("cursor", size), &size, |b, _| {
            b.iter(|| {
                let mut cursor = list.cursor();
                let mut count = 0;
                while cursor.advance() {
                    if black_box(cursor.current().unwrap()) {
                        count += 1;
                    }
                }
                count
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_insert_remove_front,
    bench_insert_remove_middle,
    bench_traversal
);
criterion_main!(benches);
