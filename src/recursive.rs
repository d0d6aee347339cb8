//! Basic recursive quicksort, the reference driver.

use std::cmp::Ordering;

use crate::error::{check_range, RangeError};
use crate::partition::partition_last;

sort_impl!("lomuto_recursive_unstable");

/// Sorts `v` in place into non-decreasing order.
///
/// Unstable (equal elements may be reordered) and allocation-free. With the
/// last-element pivot policy the worst case is O(n^2) comparisons and O(n)
/// recursion depth, hit by already sorted input; random input gives the
/// expected O(n * log(n)) / O(log n). Use [`crate::iterative`] when stack
/// depth on adversarial input is a concern.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

/// Sorts `v` in place with a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `[low, high]` of `v` in place, leaving elements
/// outside the range untouched.
///
/// A range with `low >= high` covers at most one element and is a no-op, even
/// on an empty slice. A non-trivial range with `high >= v.len()` leaves `v`
/// untouched and returns an error.
///
/// # Examples
///
/// ```
/// let mut v = [9, 3, 1, 2, 9];
/// lomuto_sort::recursive::sort_range(&mut v, 1, 3).unwrap();
/// assert_eq!(v, [9, 1, 2, 3, 9]);
/// ```
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize) -> Result<(), RangeError>
where
    T: Ord,
{
    sort_range_by(v, low, high, |a, b| a.cmp(b))
}

/// Like [`sort_range`] but with a comparator function.
pub fn sort_range_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // 0 or 1 elements, already sorted.
    if low >= high {
        return Ok(());
    }
    check_range(v.len(), low, high)?;

    unstable_sort(&mut v[low..=high], |a, b| compare(a, b) == Ordering::Less);
    Ok(())
}

fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if std::mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = partition_last(v, is_less);

        // Recurse into the left side.
        quicksort(&mut v[..mid], is_less);

        // Continue with the right side.
        v = &mut v[(mid + 1)..];
    }
}
