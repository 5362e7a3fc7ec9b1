//! In-place comparison sorts, generic over any totally ordered element type.
//!
//! Every routine sorts ascending and hands the slice back so calls can be
//! chained. Empty and single-element slices are returned untouched. Only
//! [`merge_sort`] is stable.

/// Repeatedly swaps adjacent out-of-order pairs, stopping early once a pass
/// makes no swaps.
pub fn bubble_sort<T: Ord>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    seq
}

/// Grows a sorted prefix, shifting each new element left past every strictly
/// greater one. Already sorted input costs `n - 1` comparisons.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) -> &mut [T] {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && seq[j - 1] > seq[j] {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
    seq
}

pub fn selection_sort<T: Ord>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if seq[j] < seq[min] {
                min = j;
            }
        }
        seq.swap(i, min);
    }
    seq
}

/// Quicksort over the inclusive index range `low..=high`, using a Lomuto
/// partition around `seq[high]`.
///
/// Pending ranges live on an explicit stack instead of the call stack. The
/// smaller side of each partition is handled first, so at most O(log n)
/// ranges are pending even for sorted or reverse-sorted input.
///
/// # Panics
///
/// Panics if `low < high` and `high` is out of bounds.
pub fn quick_sort<T: Ord>(seq: &mut [T], low: usize, high: usize) -> &mut [T] {
    let mut pending = vec![(low, high)];
    while let Some((mut lo, mut hi)) = pending.pop() {
        while lo < hi {
            let p = partition(seq, lo, hi);
            if p - lo < hi - p {
                pending.push((p + 1, hi));
                if p == lo {
                    break;
                }
                hi = p - 1;
            } else {
                if p > lo {
                    pending.push((lo, p - 1));
                }
                lo = p + 1;
            }
        }
    }
    seq
}

/// Moves everything `<= seq[high]` left of a running boundary, then drops the
/// pivot at the boundary. Returns the pivot's final index.
fn partition<T: Ord>(seq: &mut [T], low: usize, high: usize) -> usize {
    let mut boundary = low;
    for j in low..high {
        if seq[j] <= seq[high] {
            seq.swap(boundary, j);
            boundary += 1;
        }
    }
    seq.swap(boundary, high);
    boundary
}

/// Stable top-down merge sort. Each level merges two locally owned halves back
/// into `seq`, preferring the left head on ties.
pub fn merge_sort<T: Ord + Clone>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    if n > 1 {
        let mid = n / 2;
        let mut left = seq[..mid].to_vec();
        let mut right = seq[mid..].to_vec();
        merge_sort(&mut left);
        merge_sort(&mut right);

        let (mut i, mut j) = (0, 0);
        for slot in seq.iter_mut() {
            let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
            if take_left {
                *slot = left[i].clone();
                i += 1;
            } else {
                *slot = right[j].clone();
                j += 1;
            }
        }
    }
    seq
}

pub fn heap_sort<T: Ord>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    // Build max heap
    for i in (0..n / 2).rev() {
        sift_down(seq, i, n);
    }
    // Extract elements from heap
    for end in (1..n).rev() {
        seq.swap(0, end);
        sift_down(seq, 0, end);
    }
    seq
}

/// Restores the max-heap property below `root` within `seq[..len]`.
fn sift_down<T: Ord>(seq: &mut [T], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && seq[left] > seq[largest] {
            largest = left;
        }
        if right < len && seq[right] > seq[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        seq.swap(root, largest);
        root = largest;
    }
}

/// Gapped insertion sort over the gap sequence `n/2, n/4, ..., 1`.
pub fn shell_sort<T: Ord>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && seq[j - gap] > seq[j] {
                seq.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
    seq
}
