use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ksim_core::{ScanParams, ScanStrategy, ScannerFactory};

fn generate_test_sequence(length: usize) -> Vec<u8> {
    let pattern = b"ATCGATCGGATTACA";
    let mut sequence = Vec::with_capacity(length);

    while sequence.len() < length {
        let remaining = length - sequence.len();
        let chunk_size = std::cmp::min(pattern.len(), remaining);
        sequence.extend_from_slice(&pattern[..chunk_size]);
    }

    sequence
}

fn bench_strategy(c: &mut Criterion, strategy: ScanStrategy) {
    let pattern = generate_test_sequence(20);
    let text = generate_test_sequence(50_000);
    let k = 4;

    let scanner = ScannerFactory::create(&ScanParams {
        strategy,
        threads: None,
    });

    c.bench_function(&format!("{}_50kb", strategy.name()), |b| {
        b.iter(|| {
            let result = scanner.scan(black_box(&pattern), black_box(&text), k);
            black_box(result)
        })
    });
}

fn bench_reuse(c: &mut Criterion) {
    bench_strategy(c, ScanStrategy::Reuse);
}

fn bench_fresh(c: &mut Criterion) {
    bench_strategy(c, ScanStrategy::Fresh);
}

fn bench_parallel(c: &mut Criterion) {
    bench_strategy(c, ScanStrategy::Parallel);
}

criterion_group!(benches, bench_reuse, bench_fresh, bench_parallel);
criterion_main!(benches);
