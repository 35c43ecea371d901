use std::cmp::Ordering;

/// Sorts the slice with insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2)
/// worst-case, with *O*(*n*) comparisons on already sorted input since the
/// inner shift loop never runs.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts the slice with insertion sort and a comparator function.
///
/// The comparator must define a total ordering, otherwise the order of the
/// elements is unspecified.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        // Shift v[i] left past every strictly greater element of the sorted
        // prefix. Stopping on Equal keeps the sort stable.
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
