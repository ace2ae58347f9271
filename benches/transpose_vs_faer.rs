use criterion::{Criterion, black_box, criterion_group, criterion_main};
use seqfold::{sum, to_dense, transpose};

fn bench_transpose_vs_faer(c: &mut Criterion) {
    let n = 200;
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| ((i * n + j) as f64).sin()).collect())
        .collect();

    c.bench_function("seqfold transpose", |ben| {
        ben.iter(|| {
            let _t = transpose(black_box(&rows)).unwrap();
        })
    });

    let mat = to_dense(&rows).unwrap();
    c.bench_function("faer transpose to_owned", |ben| {
        ben.iter(|| {
            let _t = black_box(&mat).transpose().to_owned();
        })
    });
}

fn bench_sum_vs_iter(c: &mut Criterion) {
    let data: Vec<f64> = (0..10_000).map(|i| (i as f64).cos()).collect();

    c.bench_function("seqfold sum", |ben| {
        ben.iter(|| sum(black_box(&data)))
    });

    c.bench_function("Iterator::sum", |ben| {
        ben.iter(|| black_box(&data).iter().sum::<f64>())
    });
}

criterion_group!(benches, bench_transpose_vs_faer, bench_sum_vs_iter);
criterion_main!(benches);
