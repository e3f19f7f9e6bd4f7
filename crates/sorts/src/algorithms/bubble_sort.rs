pub fn bubble_sort(data: &mut [f64]) {
    let mut lim = data.len();
    while lim > 1 {
        lim -= 1;
        for i in 0..lim {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
            }
        }
    }
}
