use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

/// Runtime budget for a benchmark group, keyed by how many elements one
/// iteration processes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeTier {
    Small,
    Medium,
    Large,
}

impl RuntimeTier {
    pub fn for_input_size(size: usize) -> Self {
        if size <= 16_384 {
            Self::Small
        } else if size <= 65_536 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    fn warm_up(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(100),
            Self::Medium => Duration::from_millis(500),
            Self::Large => Duration::from_millis(800),
        }
    }

    fn measurement(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(200),
            Self::Medium => Duration::from_millis(1000),
            Self::Large => Duration::from_millis(1500),
        }
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tier: RuntimeTier) {
    group.sample_size(tier.sample_size());
    group.warm_up_time(tier.warm_up());
    group.measurement_time(tier.measurement());
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
