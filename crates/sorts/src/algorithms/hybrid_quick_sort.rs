use rand::Rng;

use super::common;
use super::partition::{self, PartitionScheme};

/// Counters filled by [`hybrid_quick_sort_instrumented`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CutoffStats {
    /// Insertion-core invocations, one per finished segment.
    pub insertion_calls: usize,
    /// Longest segment handed to the insertion core.
    pub max_cutoff_len: usize,
}

/// Quicksort that finishes segments of length `<= cutoff` with insertion
/// sort. `cutoff` must be at least 1.
pub fn hybrid_quick_sort<R: Rng + ?Sized>(
    data: &mut [f64],
    scheme: PartitionScheme,
    cutoff: usize,
    rng: &mut R,
) {
    let mut stats = CutoffStats::default();
    hybrid_quick_sort_instrumented(data, scheme, cutoff, rng, &mut stats);
}

/// Same as [`hybrid_quick_sort`], recording every insertion-sort cutoff
/// into `stats`.
pub fn hybrid_quick_sort_instrumented<R: Rng + ?Sized>(
    data: &mut [f64],
    scheme: PartitionScheme,
    cutoff: usize,
    rng: &mut R,
    stats: &mut CutoffStats,
) {
    debug_assert!(cutoff >= 1);
    hybrid_recursive(data, scheme, cutoff, rng, stats);
}

fn hybrid_recursive<R: Rng + ?Sized>(
    mut data: &mut [f64],
    scheme: PartitionScheme,
    cutoff: usize,
    rng: &mut R,
    stats: &mut CutoffStats,
) {
    while data.len() > cutoff {
        let p = partition::partition(data, scheme, rng);
        let (left, rest) = data.split_at_mut(p);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            hybrid_recursive(left, scheme, cutoff, rng, stats);
            data = right;
        } else {
            hybrid_recursive(right, scheme, cutoff, rng, stats);
            data = left;
        }
    }

    stats.insertion_calls += 1;
    stats.max_cutoff_len = stats.max_cutoff_len.max(data.len());
    common::insertion_core(data);
}
