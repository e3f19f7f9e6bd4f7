use super::common;

pub fn merge_sort_bottom_up(data: &mut [f64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let passes = common::ceil_log2(len);
    let mut buf = data.to_vec();
    // An odd pass count must read from the buffer first so that the final
    // pass always writes into `data`.
    let mut src_is_buf = passes % 2 == 1;

    let mut width = 1;
    while width < len {
        if src_is_buf {
            merge_pass(&buf, data, width);
        } else {
            merge_pass(data, &mut buf, width);
        }
        src_is_buf = !src_is_buf;
        width <<= 1;
    }
}

// One full pass: merges every adjacent pair of width-`width` segments of
// `src` into `dst`. A trailing partial segment is copied through.
pub fn merge_pass(src: &[f64], dst: &mut [f64], width: usize) {
    let len = src.len();
    let mut lef = 0;
    while lef < len {
        let mid = (lef + width).min(len);
        let end = (mid + width).min(len);
        common::merge_into(&src[lef..mid], &src[mid..end], &mut dst[lef..end]);
        lef = end;
    }
}
