use criterion::{black_box, criterion_group, criterion_main, Criterion};

use banker_core::config::CheckerConfig;
use banker_core::models::SystemSnapshot;
use banker_safety::SafetyChecker;

/// Safe snapshot where only the last unfinished process is eligible at each
/// step, forcing the full O(P²·R) rescan pattern.
fn build_worst_case(p: usize, r: usize) -> SystemSnapshot {
    let allocation: Vec<Vec<i64>> = (0..p).map(|_| vec![1; r]).collect();
    let max_need: Vec<Vec<i64>> = (0..p).map(|i| vec![(p - i) as i64; r]).collect();
    let available = vec![0_i64; r];
    SystemSnapshot::indexed(&allocation, &max_need, &available).unwrap()
}

fn bench_evaluate_64x16(c: &mut Criterion) {
    let snapshot = build_worst_case(64, 16);
    let checker = SafetyChecker::default();
    c.bench_function("safety_check_64x16", |b| {
        b.iter(|| checker.check(black_box(&snapshot)).unwrap())
    });
}

fn bench_evaluate_256x32_no_trace(c: &mut Criterion) {
    let snapshot = build_worst_case(256, 32);
    let checker = SafetyChecker::new(CheckerConfig {
        record_trace: Some(false),
        ..Default::default()
    });
    c.bench_function("safety_check_256x32_no_trace", |b| {
        b.iter(|| checker.check(black_box(&snapshot)).unwrap())
    });
}

criterion_group!(benches, bench_evaluate_64x16, bench_evaluate_256x32_no_trace);
criterion_main!(benches);
