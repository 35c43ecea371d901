use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sort_classics_rs::{kway, stable};
use sort_test_tools::patterns;

const SIZES: [usize; 3] = [1_000, 5_000, 10_000];

fn pattern_inputs(size: usize) -> [(&'static str, Vec<i32>); 3] {
    [
        ("random", patterns::random(size)),
        ("nearly_sorted", patterns::nearly_sorted(size, 0.01)),
        ("descending", patterns::descending(size)),
    ]
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorts");
    // Insertion sort on 10k descending elements is slow, keep sampling modest.
    group.sample_size(10);

    for &size in &SIZES {
        for (pattern, data) in pattern_inputs(size) {
            group.bench_with_input(
                BenchmarkId::new(format!("insertion-{pattern}"), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut v = data.clone();
                        stable::insertion::sort(&mut v);
                        black_box(v);
                    });
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("mergesort-{pattern}"), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut v = data.clone();
                        stable::mergesort::sort(&mut v);
                        black_box(v);
                    });
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("rust_std-{pattern}"), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut v = data.clone();
                        stable::rust_std::sort(&mut v);
                        black_box(v);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Round-robins one random input into `k` sorted runs.
fn sorted_runs(k: usize, total: usize) -> Vec<Vec<i32>> {
    let mut lists: Vec<Vec<i32>> = (0..k).map(|_| Vec::with_capacity(total / k + 1)).collect();
    for (i, value) in patterns::random(total).into_iter().enumerate() {
        lists[i % k].push(value);
    }
    for list in &mut lists {
        list.sort_unstable();
    }
    lists
}

fn bench_kway(c: &mut Criterion) {
    let mut group = c.benchmark_group("kway");

    for &k in &[2usize, 8, 32] {
        let lists = sorted_runs(k, 10_000);
        group.bench_with_input(BenchmarkId::from_parameter(k), &lists, |b, lists| {
            b.iter(|| black_box(kway::merge_k_lists(lists)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_kway);
criterion_main!(benches);
