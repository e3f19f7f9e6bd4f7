use super::common;

pub fn merge_sort_top_down(data: &mut [f64]) {
    if data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();
    merge_sort_top_down(&mut left);
    merge_sort_top_down(&mut right);
    common::merge_into(&left, &right, data);
}
