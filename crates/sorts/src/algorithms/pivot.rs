use rand::Rng;

/// Randomized median-of-three pivot choice over `data` (`len >= 2`): the
/// fixed middle index plus one uniform sample from each side of it. Returns
/// the index holding the median of the three values, ties toward the middle
/// index first, then the right sample over the left.
pub fn choose_pivot<R: Rng + ?Sized>(data: &[f64], rng: &mut R) -> usize {
    debug_assert!(data.len() >= 2);

    let hi = data.len() - 1;
    let mid = hi / 2;
    let lef = rng.random_range(0..=mid);
    let rig = rng.random_range(mid + 1..=hi);

    if data[lef] <= data[mid] {
        if data[mid] <= data[rig] {
            mid
        } else if data[lef] < data[rig] {
            rig
        } else {
            lef
        }
    } else if data[mid] >= data[rig] {
        mid
    } else if data[lef] > data[rig] {
        rig
    } else {
        lef
    }
}
