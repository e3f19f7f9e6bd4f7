use std::hint::black_box;
use std::time::Duration;

use bench::RuntimeTier;
use criterion::measurement::Measurement;
use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorts::generator::{DataCase, generate_case};
use sorts::{SortAlgorithm, algorithm_name, all_algorithms, sort_f64_with_rng};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];

const CASES: [DataCase; 3] = [
    DataCase::Uniform01,
    DataCase::NearlySorted,
    DataCase::FewDistinct,
];

fn bench_sorts(c: &mut Criterion) {
    for &case in &CASES {
        let mut group = c.benchmark_group(format!("sorts/{}", case.label()));

        for &algo in all_algorithms() {
            if !is_benchmark_target(algo) {
                continue;
            }
            for &size in &BENCH_SIZES {
                apply_runtime(&mut group, size);
                let seed = seed_for(case, size, algo as u64);
                let base = generate_case(case, size, seed);

                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        let mut rng = StdRng::seed_from_u64(mix_seed(seed));
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            sort_f64_with_rng(algo, &mut data, &mut rng);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }
        }

        for &size in &BENCH_SIZES {
            apply_runtime(&mut group, size);
            let seed = seed_for(case, size, 0xBA5E_0001);
            let base = generate_case(case, size, seed);
            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_unstable_by(f64::total_cmp);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        for &size in &BENCH_SIZES {
            apply_runtime(&mut group, size);
            let seed = seed_for(case, size, 0xBA5E_0002);
            let base = generate_case(case, size, seed);
            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_by(f64::total_cmp);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

#[inline]
fn is_benchmark_target(algo: SortAlgorithm) -> bool {
    !matches!(
        algo,
        SortAlgorithm::BubbleSort | SortAlgorithm::SelectionSort | SortAlgorithm::InsertionSort
    )
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    let tier = RuntimeTier::for_input_size(size);
    if tier == RuntimeTier::Small {
        group.sampling_mode(SamplingMode::Auto);
    } else {
        group.sampling_mode(SamplingMode::Flat);
    }
    bench::apply_runtime_config(group, tier);
}

#[inline]
fn seed_for(case: DataCase, size: usize, salt: u64) -> u64 {
    mix_seed(0x5EED_2026 ^ ((case as u64) << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
