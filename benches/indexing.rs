use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dframe::{Address, ColumnSelection, DataFrame, Payload, RowSelection, TypedArray};

const N_ROWS: usize = 100_000;
const N_COLS: usize = 8;

fn wide_frame() -> DataFrame {
    let cols: Vec<(String, Payload)> = (0..N_COLS)
        .map(|j| {
            let values: Vec<i64> = (0..N_ROWS as i64).map(|i| i * (j as i64 + 1)).collect();
            (format!("c{j}"), Payload::from(values))
        })
        .collect();
    DataFrame::from_named_columns(cols).unwrap()
}

fn bench_reads(c: &mut Criterion) {
    let frame = wide_frame();
    let mask = frame.cols()[0].gt((N_ROWS / 2) as i64).unwrap();
    let picks: Vec<usize> = (0..N_ROWS).step_by(7).collect();

    c.bench_function("get (int, name)", |b| {
        b.iter(|| frame.get(black_box((N_ROWS / 3, "c3"))).unwrap())
    });
    c.bench_function("r (slice)", |b| b.iter(|| frame.r(black_box(1000..50_000)).unwrap()));
    c.bench_function("r (mask)", |b| b.iter(|| frame.r(black_box(&mask)).unwrap()));
    c.bench_function("r (positions)", |b| b.iter(|| frame.r(black_box(picks.clone())).unwrap()));
    c.bench_function("c (names)", |b| b.iter(|| frame.c(black_box(vec!["c1", "c5"])).unwrap()));
}

fn bench_writes(c: &mut Criterion) {
    let frame = wide_frame();

    c.bench_function("set (pair, copy on write)", |b| {
        b.iter(|| {
            let mut f = frame.clone();
            f.set(black_box((Address::slice(None, None, Some(2)), "c0")), 0).unwrap();
            f
        })
    });
    c.bench_function("delete rows", |b| {
        b.iter(|| {
            let mut f = frame.clone();
            f.delete(black_box((0..1000, Address::full()))).unwrap();
            f
        })
    });
}

fn bench_elementwise(c: &mut Criterion) {
    let a = TypedArray::new((0..N_ROWS as i64).map(Some)).unwrap();
    let b_arr = TypedArray::new((0..N_ROWS as i64).rev().map(Some)).unwrap();

    c.bench_function("add (array, array)", |b| b.iter(|| (black_box(&a) + black_box(&b_arr)).unwrap()));
    c.bench_function("isin", |b| b.iter(|| a.isin(black_box(vec![1, 10, 100, 1000])).unwrap()));
}

criterion_group!(benches, bench_reads, bench_writes, bench_elementwise);
criterion_main!(benches);
