use super::common;

pub fn insertion_sort(data: &mut [f64]) {
    common::insertion_core(data);
}
