use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use scalarmap::{read_only, synchronize, LinkedHashMap, OpenHashMap, ScalarMap};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_get_plain_vs_wrapped(c: &mut Criterion) {
    let mut m: OpenHashMap<u64, u64> = OpenHashMap::new();
    let keys: Vec<u64> = lcg(7).take(20_000).collect();
    for (i, &k) in keys.iter().enumerate() {
        m.put(k, i as u64).unwrap();
    }

    {
        let mut it = keys.iter().cycle();
        c.bench_function("open_hash_get_plain", |b| {
            b.iter(|| {
                let k = *it.next().unwrap();
                black_box(m.get(k))
            })
        });
    }

    let u = read_only(&m);
    let mut it = keys.iter().cycle();
    c.bench_function("open_hash_get_read_only", |b| {
        b.iter(|| {
            let k = *it.next().unwrap();
            black_box(u.get(k))
        })
    });
}

fn bench_sync_put(c: &mut Criterion) {
    c.bench_function("sync_put_10k", |b| {
        b.iter_batched(
            || synchronize(OpenHashMap::<u64, u64>::new()),
            |mut s| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    s.put(x, i as u64).unwrap();
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_linked_traversal(c: &mut Criterion) {
    let mut m: LinkedHashMap<u64, u64> = LinkedHashMap::new();
    for (i, x) in lcg(3).take(10_000).enumerate() {
        m.put(x, i as u64).unwrap();
    }

    c.bench_function("linked_entries_iter", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for (_, v) in m.entries() {
                acc = acc.wrapping_add(v);
            }
            black_box(acc)
        })
    });

    c.bench_function("linked_fast_for_each", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            scalarmap::fast_for_each(&m, |_, v| acc = acc.wrapping_add(v));
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_get_plain_vs_wrapped,
    bench_sync_put,
    bench_linked_traversal
);
criterion_main!(benches);
