use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataCase {
    Uniform01,
    Ascending,
    Descending,
    AllEqual,
    FewDistinct,
    NearlySorted,
}

impl DataCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform01 => "uniform_01",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::AllEqual => "all_equal",
            Self::FewDistinct => "few_distinct",
            Self::NearlySorted => "nearly_sorted",
        }
    }
}

/// Generates a reproducible dataset: the same `(case, size, seed)` always
/// yields the same values. `Uniform01` draws from [0, 1).
pub fn generate_case(case: DataCase, size: usize, seed: u64) -> Vec<f64> {
    if size == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    match case {
        DataCase::Uniform01 => (0..size).map(|_| rng.random::<f64>()).collect(),
        DataCase::Ascending => (0..size).map(|i| i as f64).collect(),
        DataCase::Descending => (0..size).rev().map(|i| i as f64).collect(),
        DataCase::AllEqual => vec![1.0; size],
        DataCase::FewDistinct => (0..size)
            .map(|_| rng.random_range(0..16_u32) as f64)
            .collect(),
        DataCase::NearlySorted => {
            let mut data: Vec<f64> = (0..size).map(|i| i as f64).collect();
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
            data
        }
    }
}
