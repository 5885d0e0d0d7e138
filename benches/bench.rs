use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pole_dance::{
    characteristic_polynomial, compute_response, response::compute_response_direct, roots::solve,
    Feedback, FeedbackSlot, Poly, Session, SolverConfig, SweepConfig,
};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, durand_kerner, response_buckets, response_direct);

fn test_poly(n: u32) -> Poly {
    let poles = (1..=n).map(|i| -0.25 * f64::from(i)).collect::<Vec<_>>();
    characteristic_polynomial(&poles, &Feedback::new(0.5, 0.25, 0.0))
}

pub fn durand_kerner(c: &mut Criterion) {
    let mut group = c.benchmark_group("durand_kerner");
    for n in [1, 2, 4, 8, 16] {
        let p = test_poly(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(solve(black_box(&p), &SolverConfig::default())))
        });
    }
    group.finish();
}

pub fn response_buckets(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_buckets");
    for n in [1, 4, 16] {
        let p = test_poly(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(compute_response(black_box(&p), &SweepConfig::default())))
        });
    }
    group.finish();
}

pub fn response_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_direct");
    for n in [1, 4, 16] {
        let p = test_poly(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(compute_response_direct(black_box(&p), &SweepConfig::default())))
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, feedback_sweep);

/// Dragging a gain slider across its range with a handful of poles placed
pub fn feedback_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback sweep");
    for n in [2, 4, 8] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mut s = Session::new(());
                for i in 1..=n {
                    s.add_pole(-0.4 * f64::from(i));
                }
                for i in -100..=100 {
                    s.set_feedback(FeedbackSlot::Linear, f64::from(i) / 10.0);
                }
                black_box(s.cache().len())
            })
        });
    }
    group.finish();
}
