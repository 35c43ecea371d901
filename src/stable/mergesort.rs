use std::cmp::Ordering;

/// Sorts the slice with top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and performs
/// *O*(*n* \* log(*n*)) comparisons regardless of input distribution.
///
/// # Current implementation
///
/// Plain structural recursion: split at the midpoint, sort both halves, merge
/// them through an auxiliary buffer. Recursion depth is *O*(log(*n*)). Unlike
/// the in-place baselines this allocates *O*(*n*) auxiliary memory per merge
/// level; keeping the routine simple is the point, it is the reference for
/// what the adaptive std sort improves on.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts the slice with top-down merge sort and a comparator function.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut compare);
}

fn merge_sort<T, F>(v: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }

    let mid = v.len() / 2;
    merge_sort(&mut v[..mid], compare);
    merge_sort(&mut v[mid..], compare);

    let merged = merge(&v[..mid], &v[mid..], compare);
    v.clone_from_slice(&merged);
}

/// Merges two sorted slices into one sorted `Vec` in *O*(*n* + *m*).
///
/// Ties pick the left element, which is what makes the overall sort stable.
fn merge<T, F>(left: &[T], right: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) != Ordering::Greater {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of these tails is non-empty.
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}
