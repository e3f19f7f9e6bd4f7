mod algorithms;
pub mod generator;

use rand::Rng;

pub use algorithms::bubble_sort::bubble_sort;
pub use algorithms::heap_sort::heap_sort;
pub use algorithms::hybrid_quick_sort::{
    CutoffStats, hybrid_quick_sort, hybrid_quick_sort_instrumented,
};
pub use algorithms::insertion_sort::insertion_sort;
pub use algorithms::merge_sort_bottom_up::merge_sort_bottom_up;
pub use algorithms::merge_sort_top_down::merge_sort_top_down;
pub use algorithms::partition::PartitionScheme;
pub use algorithms::quick_sort::quick_sort;
pub use algorithms::selection_sort::selection_sort;

/// Segments at or below this length are finished by insertion sort when the
/// hybrid quicksort is dispatched through [`sort_f64`].
pub const HYBRID_CUTOFF: usize = 15;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSortTopDown,
    MergeSortBottomUp,
    HeapSort,
    QuickSortInward,
    QuickSortForward,
    HybridQuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 9] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSortTopDown,
    SortAlgorithm::MergeSortBottomUp,
    SortAlgorithm::HeapSort,
    SortAlgorithm::QuickSortInward,
    SortAlgorithm::QuickSortForward,
    SortAlgorithm::HybridQuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSortTopDown => "merge_sort_top_down",
        SortAlgorithm::MergeSortBottomUp => "merge_sort_bottom_up",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::QuickSortInward => "quick_sort_inward",
        SortAlgorithm::QuickSortForward => "quick_sort_forward",
        SortAlgorithm::HybridQuickSort => "hybrid_quick_sort",
    }
}

/// Whether equal elements keep their relative input order.
///
/// Selection sort swaps the minimum into place, which can reorder equal
/// elements sitting between the swap endpoints, so it is reported unstable
/// even though the scan picks the first occurrence of the minimum.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSort
            | SortAlgorithm::InsertionSort
            | SortAlgorithm::MergeSortTopDown
            | SortAlgorithm::MergeSortBottomUp
    )
}

/// Sorts `data` ascending in place, drawing any pivot randomness from the
/// thread RNG. The hybrid quicksort runs with [`HYBRID_CUTOFF`] and the
/// inward partition scheme.
pub fn sort_f64(algo: SortAlgorithm, data: &mut [f64]) {
    sort_f64_with_rng(algo, data, &mut rand::rng());
}

/// Same as [`sort_f64`] with an injected RNG, so pivot choices (and with
/// them partition outcomes) are reproducible under a seeded generator.
///
/// Inputs must be NaN-free; `<` is only a total order without NaN.
pub fn sort_f64_with_rng<R: Rng + ?Sized>(algo: SortAlgorithm, data: &mut [f64], rng: &mut R) {
    debug_assert!(data.iter().all(|x| !x.is_nan()));

    match algo {
        SortAlgorithm::BubbleSort => bubble_sort(data),
        SortAlgorithm::SelectionSort => selection_sort(data),
        SortAlgorithm::InsertionSort => insertion_sort(data),
        SortAlgorithm::MergeSortTopDown => merge_sort_top_down(data),
        SortAlgorithm::MergeSortBottomUp => merge_sort_bottom_up(data),
        SortAlgorithm::HeapSort => heap_sort(data),
        SortAlgorithm::QuickSortInward => quick_sort(data, PartitionScheme::Inward, rng),
        SortAlgorithm::QuickSortForward => quick_sort(data, PartitionScheme::Forward, rng),
        SortAlgorithm::HybridQuickSort => {
            hybrid_quick_sort(data, PartitionScheme::Inward, HYBRID_CUTOFF, rng)
        }
    }
}

pub fn is_ascending(data: &[f64]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
