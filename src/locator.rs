//! Partition locator: binary search over runs using each run's `[min, max]`
//! range.
//!
//! Because the global ordering invariant guarantees
//! `max(partition i) <= min(partition i + 1)`, the partitions themselves
//! form a sorted sequence of disjoint-or-touching ranges, and a value can be
//! placed by binary-searching those ranges exactly like one would
//! binary-search a sorted array of intervals.

use crate::minmax_heap::peek_max_index;
use crate::partition;

/// Finds the partition that owns (or, for `for_insert = true`, should
/// receive) `v`.
///
/// `a` is the live buffer (length `count`). For a pure search
/// (`for_insert = false`) the result is the partition whose range brackets
/// `v`, or `0` if no partition matches (the caller detects a miss via a
/// local linear scan, since only the local heap order holds within a run).
pub(crate) fn find_partition<T: Ord>(a: &[T], count: usize, v: &T, for_insert: bool) -> usize {
    if count == 0 {
        return 0;
    }
    let final_p = partition::final_partition(count);

    let run_max = |p: usize| -> &T {
        let start = partition::partition_start(p);
        let n = partition::count_in_partition(count, p);
        &a[start + peek_max_index(&a[start..start + n])]
    };
    let run_min = |p: usize| -> &T { &a[partition::partition_start(p)] };

    let mut left = 0usize;
    let mut right = final_p;

    // The four insert-time disjunctive conditions are tried in order as a
    // try-list at each mid; the first that matches wins (see Open Question
    // (i) in the design notes).
    loop {
        if left > right {
            break;
        }
        let mid = left + (right - left) / 2;
        let min_p = run_min(mid);
        let max_p = run_max(mid);

        if *min_p <= *v && *v <= *max_p {
            return mid;
        }
        if for_insert {
            if mid > 0 && *v <= *max_p && *run_max(mid - 1) <= *v {
                return mid;
            }
            if mid == 0 && *v <= *max_p {
                return mid;
            }
            if mid == final_p && *v >= *min_p {
                return mid;
            }
        }

        if *max_p < *v {
            left = mid + 1;
        } else if mid == 0 {
            // Would need to search left of partition 0; nothing further to try.
            break;
        } else {
            right = mid - 1;
        }
    }

    if for_insert {
        final_p
    } else {
        0
    }
}
