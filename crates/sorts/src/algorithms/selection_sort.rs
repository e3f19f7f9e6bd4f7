pub fn selection_sort(data: &mut [f64]) {
    let len = data.len();
    for i in 0..len {
        // Strict `<` keeps the first occurrence of the minimum.
        let mut min_ix = i;
        for j in (i + 1)..len {
            if data[j] < data[min_ix] {
                min_ix = j;
            }
        }
        data.swap(i, min_ix);
    }
}
