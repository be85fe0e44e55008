//! Bulk build: turning an arbitrary freshly-populated buffer into a valid
//! partitioned layout in one pass.
//!
//! A buffer sorted end to end already satisfies the global inter-run
//! ordering for any partitioning of it, since every element in an earlier
//! partition is `<=` every element in a later one by construction. All
//! that's left is re-heapifying each run locally.

use crate::minmax_heap;
use crate::partition;

/// Sorts `a[0..count]` ascending, then heapifies every partition's range in
/// place. Requires `count <= a.len()`.
pub(crate) fn bulk_build<T: Ord>(a: &mut [T], count: usize) {
    a[..count].sort_unstable();
    let final_p = partition::final_partition(count);
    for p in 1..=final_p {
        let start = partition::partition_start(p);
        let n = partition::count_in_partition(count, p);
        minmax_heap::make_heap(&mut a[start..start + n]);
    }
    // Partition 0 always has exactly one element and is trivially heapified.
}
