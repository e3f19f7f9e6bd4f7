pub mod bubble_sort;
pub mod common;
pub mod heap_sort;
pub mod hybrid_quick_sort;
pub mod insertion_sort;
pub mod merge_sort_bottom_up;
pub mod merge_sort_top_down;
pub mod partition;
pub mod pivot;
pub mod quick_sort;
pub mod selection_sort;
