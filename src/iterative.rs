//! Non-recursive quicksort driver with an explicit work stack.
//!
//! Sorts exactly like [`crate::recursive`] but keeps pending sub-ranges on a
//! heap-allocated stack instead of the call stack. The larger side of every
//! partition is deferred and the smaller side processed first, so the stack
//! never holds more than O(log n) entries, even on inputs that drive the
//! recursive driver to O(n) depth.

use std::cmp::Ordering;

use crate::error::{check_range, RangeError};
use crate::partition::partition_last;

sort_impl!("lomuto_iterative_unstable");

/// Sorts `v` in place into non-decreasing order.
///
/// Unstable (equal elements may be reordered). Same comparison count and
/// resulting order as the recursive driver, worst case O(n^2) comparisons
/// with the last-element pivot policy.
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
/// Same contract as [`crate::recursive::sort_range`]: `low >= high` is a
/// no-op base case, a non-trivial range with `high >= v.len()` leaves `v`
/// untouched and returns an error.
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

fn quicksort<T, F>(v_full: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Pending sub-ranges as half-open (begin, end) index pairs into `v_full`.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(32);
    stack.push((0, v_full.len()));

    while let Some((begin, end)) = stack.pop() {
        let v = &mut v_full[begin..end];
        if v.len() < 2 {
            continue;
        }

        let mid = partition_last(v, is_less);

        let left = (begin, begin + mid);
        let right = (begin + mid + 1, end);

        // Push the larger side first so the smaller side is processed next.
        // The side processed next is at most half its parent, so at most
        // log2(len) deferred larger sides can pile up on the stack.
        if left.1 - left.0 >= right.1 - right.0 {
            stack.push(left);
            stack.push(right);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }
}
