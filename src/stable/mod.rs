// Textbook insertion sort, the quadratic baseline.
pub mod insertion;

// Top-down recursive merge sort.
pub mod mergesort;

// Delegates to std's adaptive stable sort.
pub mod rust_std;
