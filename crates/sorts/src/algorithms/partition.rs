use rand::Rng;

use super::pivot;

/// Partition strategy for the quicksort family. Fixed for the duration of
/// one top-level call, never mutated mid-recursion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PartitionScheme {
    /// Two cursors scan toward each other from both ends, swapping stopped
    /// pairs. Fewer swaps on average than the forward scan.
    Inward,
    /// One forward cursor grows a less-than region behind it.
    Forward,
}

impl PartitionScheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inward => "inward",
            Self::Forward => "forward",
        }
    }
}

/// Partitions `data` (`len >= 2`) around a pivot chosen by
/// [`pivot::choose_pivot`] and returns the pivot's resting index: everything
/// before it compares `<=` the pivot, everything after it `>=`.
pub fn partition<R: Rng + ?Sized>(
    data: &mut [f64],
    scheme: PartitionScheme,
    rng: &mut R,
) -> usize {
    debug_assert!(data.len() >= 2);

    // Park the pivot at the last index; it doubles as a scan sentinel.
    let piv_ix = pivot::choose_pivot(data, rng);
    data.swap(piv_ix, data.len() - 1);

    match scheme {
        PartitionScheme::Inward => partition_inward(data),
        PartitionScheme::Forward => partition_forward(data),
    }
}

fn partition_inward(data: &mut [f64]) -> usize {
    let hi = data.len() - 1;
    let pivot = data[hi];
    let mut i = 0;
    let mut j = hi - 1;

    loop {
        while data[i] < pivot {
            i += 1;
        }
        while i < j && data[j] > pivot {
            j -= 1;
        }
        if j <= i {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    data.swap(i, hi);
    i
}

fn partition_forward(data: &mut [f64]) -> usize {
    let hi = data.len() - 1;
    let pivot = data[hi];
    let mut boundary = 0;

    for i in 0..hi {
        if data[i] < pivot {
            data.swap(i, boundary);
            boundary += 1;
        }
    }

    data.swap(boundary, hi);
    boundary
}
