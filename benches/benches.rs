use criterion::{
    AxisScale, BatchSize, BenchmarkId, Criterion, PlotConfiguration, criterion_group,
    criterion_main,
};
use leaderboard::{VecPlayerSource, heap_rank, quickselect_rank, rank_incoming};
use std::hint::black_box;
use topset::TopSet;

const INTERVAL: usize = 50;

/// Generate random levels with seeded RNG for reproducibility
fn generate_random_data(size: usize, seed: u64) -> Vec<usize> {
    let mut data = Vec::with_capacity(size);
    let mut rng = seed;
    for _ in 0..size {
        // Simple LCG (Linear Congruential Generator)
        rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
        data.push(((rng >> 16) % 1_000_000_000) as usize);
    }
    data
}

/// Generate worst-case data for the streaming ranker: every player beats the board
fn generate_worst_case_data(size: usize) -> Vec<usize> {
    (1..=size).collect()
}

fn benchmark_offline(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);

    let mut group = c.benchmark_group("offline");
    group.sample_size(10);
    group.plot_config(plot_config);

    for size in [10_000, 100_000, 1_000_000].iter() {
        let data = generate_random_data(*size, 42);

        group.bench_with_input(BenchmarkId::new("heap_rank", size), size, |b, _| {
            b.iter_batched(
                || data.clone(),
                |mut players| heap_rank(black_box(&mut players)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("quickselect_rank", size), size, |b, _| {
            b.iter_batched(
                || data.clone(),
                |mut players| quickselect_rank(black_box(&mut players)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_online(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);

    let mut group = c.benchmark_group("online");
    group.sample_size(10);
    group.plot_config(plot_config);

    for size in [10_000, 100_000, 1_000_000].iter() {
        for (label, data) in [
            ("random", generate_random_data(*size, 42)),
            ("worst_case", generate_worst_case_data(*size)),
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("rank_incoming/{label}"), size),
                size,
                |b, _| {
                    b.iter_batched(
                        || VecPlayerSource::new(data.clone()),
                        |mut source| rank_incoming(black_box(&mut source), INTERVAL),
                        BatchSize::LargeInput,
                    );
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("topset/{label}"), size),
                size,
                |b, _| {
                    b.iter(|| {
                        let mut top = TopSet::new(INTERVAL, |a: &usize, b: &usize| b < a);
                        for &value in &data {
                            top.insert(black_box(value));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_offline, benchmark_online);
criterion_main!(benches);
