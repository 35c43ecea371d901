//! Testbed comparing classic comparison sorts against the std adaptive stable
//! sort, plus a k-way merge of individually pre-sorted lists.
//!
//! The sort implementations live under [`stable`] and all expose the same
//! in-place interface, `sort` and `sort_by`, so the test and benchmark
//! harnesses can drive them interchangeably. The functions at the crate root
//! are the pure counterparts: they leave their input untouched and return a
//! freshly allocated result.

pub mod kway;
pub mod stable;

pub use kway::merge_k_lists;

/// Returns a sorted copy of `v`, sorted with insertion sort.
///
/// Quadratic worst-case, linear on already sorted input. The quadratic
/// baseline of the testbed.
pub fn insertion_sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut out = v.to_vec();
    stable::insertion::sort(&mut out);
    out
}

/// Returns a sorted copy of `v`, sorted with top-down merge sort.
///
/// *O*(*n* \* log(*n*)) comparisons regardless of input distribution.
pub fn merge_sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut out = v.to_vec();
    stable::mergesort::sort(&mut out);
    out
}

/// Returns a sorted copy of `v`, sorted with the std adaptive stable sort.
///
/// The performance baseline the hand-written sorts are measured against.
pub fn adaptive_sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut out = v.to_vec();
    stable::rust_std::sort(&mut out);
    out
}
