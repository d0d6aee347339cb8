//! Lomuto partitioning around the last element of an inclusive range.

use std::cmp::Ordering;

use crate::error::{check_range, RangeError};

/// Partitions `v[low..=high]` around the element at index `high` and returns
/// the pivot's final index.
///
/// On success, with `p` the returned index, every element in `[low, p - 1]`
/// is strictly less than `v[p]` and every element in `[p + 1, high]` is
/// greater than or equal to `v[p]`. The multiset of values in the range is
/// unchanged and elements outside `[low, high]` are not touched.
///
/// Elements equal to the pivot count as "not less" and land on the
/// greater-or-equal side, so equal elements may be reordered relative to each
/// other.
///
/// A single-element range (`low == high`) performs no swaps and returns
/// `low`. Bounds with `low > high` or `high >= v.len()` leave `v` untouched
/// and return an error.
///
/// # Examples
///
/// ```
/// let mut v = [34, 223, 22, 31, 72];
/// let p = lomuto_sort::partition(&mut v, 0, 4).unwrap();
///
/// assert_eq!(v[p], 72);
/// assert!(v[..p].iter().all(|other| *other < 72));
/// assert!(v[p + 1..].iter().all(|other| *other >= 72));
/// ```
#[inline]
pub fn partition<T>(v: &mut [T], low: usize, high: usize) -> Result<usize, RangeError>
where
    T: Ord,
{
    partition_by(v, low, high, |a, b| a.cmp(b))
}

/// Like [`partition`] but with a comparator function.
pub fn partition_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<usize, RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low > high {
        return Err(RangeError {
            low,
            high,
            len: v.len(),
        });
    }
    check_range(v.len(), low, high)?;

    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    Ok(low + partition_last(&mut v[low..=high], &mut is_less))
}

/// Partitions the non-empty slice `v` around its last element. Returns the
/// number of elements that compared less than the pivot, which is also the
/// pivot's final index within `v`.
pub(crate) fn partition_last<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;

    // Split the pivot off, comparing against it must not alias the elements
    // being swapped.
    let (v_without_pivot, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    let lt_count = lomuto_partition(v_without_pivot, pivot, is_less);

    // Place the pivot between the two partitions.
    v.swap(lt_count, last);

    lt_count
}

fn lomuto_partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut l = 0;
    for r in 0..len {
        if is_less(&v[r], pivot) {
            v.swap(l, r);
            l += 1;
        }
    }

    l
}
