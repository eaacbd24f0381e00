use tracing::trace;

/// Exchange the items at `i` and `j`.
///
/// Both indices must be in bounds, out of bounds indices panic.
pub fn swap<T>(slice: &mut [T], i: usize, j: usize) {
    slice.swap(i, j);
}

/// Bubble sort that shrinks the unsorted prefix to the position of the last swap
/// after every pass.
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    bubble_sort_passes(slice);
}

/// Same as [`bubble_sort`] but returns the number of passes over the slice.
pub fn bubble_sort_passes<T: Ord>(slice: &mut [T]) -> usize {
    // slice[unsorted_len..] is sorted and holds the largest items
    let mut unsorted_len = slice.len();
    let mut passes = 0;
    while unsorted_len > 1 {
        // no swap leaves 1, which ends the loop
        let mut last_swap = 1;
        for i in 0..unsorted_len - 1 {
            let j = i + 1;
            if slice[i] > slice[j] {
                swap(slice, i, j);
                last_swap = j;
            }
        }
        passes += 1;
        trace!(pass = passes, unsorted_len = last_swap, "bubble sort pass");
        unsorted_len = last_swap;
    }
    passes
}
