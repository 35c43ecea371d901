//! Shared testing surface for the sort implementations: deterministic input
//! patterns and generic test bodies, instantiated per sort via
//! [`instantiate_sort_tests!`].

use std::cmp::Ordering;

pub mod patterns;

/// The uniform interface every sort under test implements.
///
/// `Clone` is required because the merge-based implementations move elements
/// through auxiliary buffers.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// Generates one `#[test]` fn per generic test body in [`tests`], named
/// `<prefix>_<test>`, for the given [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($prefix:ident, $sort_impl:ty) => {
        $crate::instantiate_sort_test_list!(
            $prefix,
            $sort_impl:
            basic,
            fixed,
            random,
            random_dup,
            random_zipf,
            ascending,
            descending,
            nearly_sorted,
            all_equal,
            stability,
            comparator_reverse,
        );
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! instantiate_sort_test_list {
    ($prefix:ident, $sort_impl:ty: $($test_name:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                #[test]
                fn [<$prefix _ $test_name>]() {
                    $crate::tests::$test_name::<$sort_impl>();
                }
            )+
        }
    };
}
