use rand::Rng;

use super::partition::{self, PartitionScheme};

pub fn quick_sort<R: Rng + ?Sized>(data: &mut [f64], scheme: PartitionScheme, rng: &mut R) {
    quick_sort_recursive(data, scheme, rng);
}

fn quick_sort_recursive<R: Rng + ?Sized>(
    mut data: &mut [f64],
    scheme: PartitionScheme,
    rng: &mut R,
) {
    // Recurse into the smaller side and iterate on the larger: stack depth
    // stays logarithmic even when partitions degenerate.
    while data.len() > 1 {
        let p = partition::partition(data, scheme, rng);
        let (left, rest) = data.split_at_mut(p);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort_recursive(left, scheme, rng);
            data = right;
        } else {
            quick_sort_recursive(right, scheme, rng);
            data = left;
        }
    }
}
