use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Merges `k` individually sorted lists into one globally sorted `Vec`.
///
/// The heap is seeded with the first element of every non-empty list. Each
/// round pops the global minimum, appends its value to the output and pushes
/// the successor from the same list, if one remains. With `T` total elements
/// every element is pushed and popped exactly once from a heap of size at most
/// `k`, so the whole merge runs in *O*(*T* \* log(*k*)) — tighter than both a
/// repeated linear scan (*O*(*T* \* *k*)) and an imbalanced pairwise merge
/// cascade.
///
/// Heap entries are `(value, list index, position)` ordered lexicographically
/// (wrapped in [`Reverse`] to turn std's max-heap into a min-heap). The index
/// and position tie-breakers keep the comparison total and the order of equal
/// values deterministic: earlier lists win.
///
/// Every input list must already be sorted ascending. This precondition is
/// not verified — doing so would cost an *O*(*T*) scan per call — and merging
/// unsorted inputs silently produces unsorted output. Empty inner lists
/// contribute nothing; an empty outer slice yields an empty `Vec`.
pub fn merge_k_lists<T: Ord + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let total = lists.iter().map(Vec::len).sum();

    let mut heap = BinaryHeap::with_capacity(lists.len());
    for (list_idx, list) in lists.iter().enumerate() {
        if let Some(first) = list.first() {
            heap.push(Reverse((first, list_idx, 0)));
        }
    }

    let mut out = Vec::with_capacity(total);
    while let Some(Reverse((value, list_idx, pos))) = heap.pop() {
        out.push(value.clone());
        if let Some(next) = lists[list_idx].get(pos + 1) {
            heap.push(Reverse((next, list_idx, pos + 1)));
        }
    }

    out
}
