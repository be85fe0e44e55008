//! Partition geometry: the arithmetic that maps a partition index to the
//! buffer range it owns.
//!
//! Partition `p` (0-indexed) has capacity `2p + 1` and occupies buffer
//! indices `[p^2, p^2 + 2p]`. Stacking runs of sizes `1, 3, 5, ...` this way
//! means storage is always a perfect square, and the highest-indexed
//! non-empty partition (the *final partition*) is the only one ever
//! partially filled.

/// Capacity of partition `p`.
#[inline]
pub(crate) fn partition_size(p: usize) -> usize {
    2 * p + 1
}

/// First buffer index belonging to partition `p`.
#[inline]
pub(crate) fn partition_start(p: usize) -> usize {
    p * p
}

/// Last (inclusive) buffer index belonging to partition `p`.
#[inline]
pub(crate) fn partition_end(p: usize) -> usize {
    p * p + 2 * p
}

/// Smallest `k` with `k * k >= n`.
pub(crate) fn ceil_sqrt(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    // Plain integer binary search rather than floating point sqrt, to
    // avoid precision edge cases right at perfect squares.
    let mut lo = 0usize;
    let mut hi = n;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if mid * mid >= n {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Index of the highest-indexed non-empty partition for a given element
/// count. `0` when `count == 0` (an empty container still nominally owns
/// partition 0).
pub(crate) fn final_partition(count: usize) -> usize {
    if count == 0 {
        0
    } else {
        ceil_sqrt(count) - 1
    }
}

/// Number of live elements partition `p` currently holds, given the
/// container's total element count. Requires `p <= final_partition(count)`.
pub(crate) fn count_in_partition(count: usize, p: usize) -> usize {
    let final_p = final_partition(count);
    if p < final_p {
        partition_size(p)
    } else {
        count - partition_start(p)
    }
}
