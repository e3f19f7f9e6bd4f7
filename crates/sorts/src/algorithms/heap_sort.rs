pub fn heap_sort(data: &mut [f64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    // Build the max-heap by rising each index into the heap prefix before
    // it, one insert at a time.
    for end in 1..len {
        sift_up(data, end);
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end);
        end -= 1;
    }
}

// `data[..child]` is a max-heap; rises `data[child]` to its slot.
fn sift_up(data: &mut [f64], mut child: usize) {
    while child > 0 {
        let parent = (child - 1) / 2;
        if data[parent] >= data[child] {
            return;
        }
        data.swap(parent, child);
        child = parent;
    }
}

// Both subtrees below `root` are heaps within `data[..end]`; sinks
// `data[root]` until it dominates its children.
fn sift_down(data: &mut [f64], mut root: usize, end: usize) {
    loop {
        let child = root * 2 + 1;
        if child >= end {
            return;
        }

        let mut swap_ix = child;
        if child + 1 < end && data[child] < data[child + 1] {
            swap_ix = child + 1;
        }

        if data[root] >= data[swap_ix] {
            return;
        }

        data.swap(root, swap_ix);
        root = swap_ix;
    }
}
