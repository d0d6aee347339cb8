//! In-place single-pivot quicksort with an explicit inclusive-range API.
//!
//! The partitioning scheme is the classic Lomuto scan around the last element
//! of the range: elements strictly less than the pivot end up in front of it,
//! everything else behind it, and [`partition`] reports the pivot's final
//! index. Two drivers apply the partitioner until every sub-range holds at
//! most one element:
//!
//! - [`recursive`]: direct recursion, the reference form. Allocation-free,
//!   but recursion depth degrades to O(n) on presorted input.
//! - [`iterative`]: an explicit work stack that always defers the larger side
//!   of a partition, bounding auxiliary space to O(log n) entries.
//!
//! Both are unstable sorts (equal elements may be reordered) and both mutate
//! the caller's slice in place. The crate root re-exports the recursive
//! driver's entry points.
//!
//! # Examples
//!
//! ```
//! let mut v = vec![34, 223, 22, 31, 1, 100, 50, 40, 22, 72];
//! lomuto_sort::sort(&mut v);
//! assert_eq!(v, [1, 22, 22, 31, 34, 40, 50, 72, 100, 223]);
//! ```
//!
//! Sorting only part of a slice, bounds are inclusive:
//!
//! ```
//! let mut v = [9, 3, 1, 2, 9];
//! lomuto_sort::sort_range(&mut v, 1, 3).unwrap();
//! assert_eq!(v, [9, 1, 2, 3, 9]);
//! ```

use std::cmp::Ordering;

/// Common interface over the sort drivers.
///
/// Lets the test suite and the benchmarks instantiate the same checks for
/// every implementation.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod error;
pub mod iterative;
pub mod partition;
pub mod patterns;
pub mod recursive;

pub use error::RangeError;
pub use partition::{partition, partition_by};
pub use recursive::{sort, sort_by, sort_range, sort_range_by};
