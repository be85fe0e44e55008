/*! The partitioned container: a searchable double-ended priority queue.

# About
[`MinMaxPartitionQueue`] ties together every other module in this crate.
Its backing storage is a single `Vec<T>` logically carved into successive
runs of sizes `1, 3, 5, ...` (see [`partition`](crate::partition)). Each run
is independently heap-ordered via [`minmax_heap`](crate::minmax_heap), and
the runs as a whole obey a *global* ordering: every element of run `k` is
`<=` every element of run `k + 1`. That global ordering is what lets
[`locator::find_partition`](crate::locator::find_partition) binary-search
for the run owning a value instead of scanning the whole container.

`len()` (the live element count) is always `self.a.len()` — the buffer
holds exactly its live elements, nothing more. `storage` is tracked
separately as the container's current allocated capacity (always a perfect
square once at least one growth has happened, per the design notes below)
and governs when [`insert`](Self::insert) must [`grow`](Self::grow) before
it can place a new element.

# Example

```rust
use minmax_partition_queue::queue::MinMaxPartitionQueue;

let mut q = MinMaxPartitionQueue::from_slice(&[8, 2, 5, 7, 1, 4, 3, 6, 0], true);
assert_eq!(q.len(), 9);
assert_eq!(q.min(), Ok(&0));
assert_eq!(q.max(), Ok(&8));

assert!(q.remove(&0));
assert_eq!(q.len(), 8);
assert_eq!(q.min(), Ok(&1));
```
*/

use std::fmt;
use std::ops::Index;

use crate::build;
use crate::error::Error;
use crate::locator;
use crate::minmax_heap;
use crate::partition;

/// Capacity a freshly-grown, never-before-allocated queue starts at.
const MIN_ALLOCATION: usize = 4;

/// A searchable double-ended priority queue backed by a single buffer of
/// min-max-heap-ordered partitions.
///
/// See the [module-level documentation](crate::queue) for the layout this
/// type maintains. `T` needs only [`Ord`]; [`Clone`] is required solely by
/// the bulk-build-from-slice and whole-container [`Clone`] paths.
pub struct MinMaxPartitionQueue<T: Ord> {
    /// Live elements only; `a.len()` is always the container's `count`.
    a: Vec<T>,
    /// Current allocated capacity. `0 <= a.len() <= storage`.
    storage: usize,
    /// `true` once the container has been told it may never grow.
    fixed: bool,
}

impl<T: Ord> Default for MinMaxPartitionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinMaxPartitionQueue<T> {
    /// Creates a new, empty, growable queue.
    pub fn new() -> Self {
        MinMaxPartitionQueue {
            a: Vec::new(),
            storage: 0,
            fixed: false,
        }
    }

    /// Creates a new, empty queue reserving exactly `n` slots up front (no
    /// rounding to a perfect square — see design note (ii) in
    /// `DESIGN.md`). When `allow_resize` is `false` the queue can never
    /// grow past `n` and `insert` past capacity fails with
    /// [`Error::CapacityExceeded`].
    pub fn with_capacity(n: usize, allow_resize: bool) -> Self {
        MinMaxPartitionQueue {
            a: Vec::with_capacity(n),
            storage: n,
            fixed: !allow_resize,
        }
    }

    /// Builds a queue from an owned `Vec<T>`, reserving exactly
    /// `physical_end` slots of storage (`physical_end` must be `>= v.len()`;
    /// it is clamped up to `v.len()` otherwise) before running the bulk
    /// build (§4.F): the buffer is sorted once, then every partition's
    /// sub-range is heapified independently.
    pub fn from_vec_with_capacity(v: Vec<T>, physical_end: usize, allow_resize: bool) -> Self {
        let count = v.len();
        let target = physical_end.max(count);
        let mut q = MinMaxPartitionQueue {
            a: Vec::new(),
            storage: 0,
            fixed: false,
        };
        q.resize(target, allow_resize)
            .expect("a fresh, non-fixed queue's resize cannot fail");
        q.a = v;
        build::bulk_build(&mut q.a, count);
        q.fixed = !allow_resize;
        q
    }

    /// Builds a queue from an owned `Vec<T>`, sizing storage to exactly the
    /// vector's length (rounded up to a perfect square when `allow_resize`
    /// is `true`).
    pub fn from_vec(v: Vec<T>, allow_resize: bool) -> Self {
        let len = v.len();
        Self::from_vec_with_capacity(v, len, allow_resize)
    }

    /// Builds a queue from a borrowed slice, cloning every element.
    pub fn from_slice(s: &[T], allow_resize: bool) -> Self
    where
        T: Clone,
    {
        Self::from_vec(s.to_vec(), allow_resize)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Current allocated capacity (`>= len()`).
    pub fn capacity(&self) -> usize {
        self.storage
    }

    /// Reallocates storage to `n` slots (rounded up to the next perfect
    /// square when `round_up` is `true`), preserving `min(len(), n)`
    /// existing elements. Fails with [`Error::ResizeForbidden`] on a fixed
    /// queue.
    pub fn resize(&mut self, n: usize, round_up: bool) -> Result<(), Error> {
        if self.fixed {
            return Err(Error::ResizeForbidden);
        }
        if n == 0 {
            self.a = Vec::new();
            self.storage = 0;
            return Ok(());
        }
        let n = if round_up {
            let k = partition::ceil_sqrt(n);
            k * k
        } else {
            n
        };
        let keep = self.a.len().min(n);
        self.a.truncate(keep);
        if n > self.a.capacity() {
            self.a.reserve_exact(n - self.a.len());
        }
        self.storage = n;
        Ok(())
    }

    /// Doubles storage (or allocates [`MIN_ALLOCATION`] from nothing), then
    /// rounds up to a perfect square.
    fn grow(&mut self) -> Result<(), Error> {
        let new_size = if self.storage == 0 {
            MIN_ALLOCATION
        } else {
            2 * self.storage
        };
        self.resize(new_size, true)
    }

    /// Inserts `v`, rippling any displaced maximum forward through
    /// successive partitions. Grows the buffer first if it is full and
    /// growable; fails with [`Error::CapacityExceeded`] if it is full and
    /// fixed.
    pub fn insert(&mut self, mut v: T) -> Result<(), Error> {
        if self.a.len() == self.storage {
            if self.fixed {
                return Err(Error::CapacityExceeded);
            }
            self.grow()?;
        }

        let mut p = locator::find_partition(&self.a, self.a.len(), &v, true);
        loop {
            let start = partition::partition_start(p);
            let n = partition::count_in_partition(self.a.len(), p);
            let capacity = partition::partition_size(p);
            let (overflowed, evicted) = minmax_heap::ripple_add(&mut self.a, start, n, capacity, v);
            match evicted {
                Some(carried) if overflowed => {
                    v = carried;
                    p += 1;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Locates `v`, returning its absolute buffer index, owning partition,
    /// and partition-local index.
    fn locate(&self, v: &T) -> Option<(usize, usize, usize)> {
        if self.a.is_empty() {
            return None;
        }
        let p = locator::find_partition(&self.a, self.a.len(), v, false);
        let start = partition::partition_start(p);
        let n = partition::count_in_partition(self.a.len(), p);
        (0..n)
            .find(|&i| self.a[start + i] == *v)
            .map(|i| (start + i, p, i))
    }

    /// Returns the absolute buffer index of `v`, or `None` if it is not
    /// present. Runs in `O(sqrt(N))`: a binary search over partitions
    /// followed by a single linear scan of one partition.
    pub fn find(&self, v: &T) -> Option<usize> {
        self.locate(v).map(|(idx, _, _)| idx)
    }

    /// `true` if `v` is present.
    pub fn contains(&self, v: &T) -> bool {
        self.find(v).is_some()
    }

    /// Removes one occurrence of `v` if present, restoring the global
    /// ordering invariant by rippling the final partition's minimum
    /// backward through every intermediate partition. Returns `false`
    /// (and leaves the queue unchanged) if `v` is absent — this is not an
    /// error.
    pub fn remove(&mut self, v: &T) -> bool {
        let (_, p, idx_in_part) = match self.locate(v) {
            Some(found) => found,
            None => return false,
        };

        let orig_count = self.a.len();
        let final_p = partition::final_partition(orig_count);

        if p == final_p {
            let start = partition::partition_start(p);
            let n = partition::count_in_partition(orig_count, p);
            minmax_heap::remove_at_index(&mut self.a, start, n, idx_in_part);
        } else {
            let final_start = partition::partition_start(final_p);
            let final_n = partition::count_in_partition(orig_count, final_p);
            let mut carry = minmax_heap::remove_min(&mut self.a, final_start, final_n);

            for q in (p + 1..final_p).rev() {
                let start = partition::partition_start(q);
                let cap = partition::partition_size(q);
                carry = minmax_heap::replace_at_index(&mut self.a[start..start + cap], 0, carry);
            }

            let start = partition::partition_start(p);
            let cap = partition::partition_size(p);
            minmax_heap::replace_at_index(&mut self.a[start..start + cap], idx_in_part, carry);
        }

        true
    }

    /// The minimum live element. `O(1)`.
    pub fn min(&self) -> Result<&T, Error> {
        self.a.first().ok_or(Error::Empty)
    }

    /// The maximum live element. `O(1)`.
    pub fn max(&self) -> Result<&T, Error> {
        if self.a.is_empty() {
            return Err(Error::Empty);
        }
        let final_p = partition::final_partition(self.a.len());
        let start = partition::partition_start(final_p);
        let n = partition::count_in_partition(self.a.len(), final_p);
        let slice = &self.a[start..start + n];
        Ok(&slice[minmax_heap::peek_max_index(slice)])
    }

    /// A read-only, bounds-checked view into raw storage. The ordering
    /// this exposes is an implementation detail (partition-major, heap
    /// order within each partition) and is not part of the contract.
    pub fn get(&self, i: usize) -> Result<&T, Error> {
        self.a.get(i).ok_or(Error::OutOfRange)
    }

    /// Borrowing iterator over the live elements in raw buffer order. No
    /// ordering guarantee; provided for inspection and test assertions.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.a.iter()
    }
}

impl<T: Ord> Index<usize> for MinMaxPartitionQueue<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        self.get(i).expect("index out of range")
    }
}

impl<T: Ord + Clone> Clone for MinMaxPartitionQueue<T> {
    fn clone(&self) -> Self {
        MinMaxPartitionQueue {
            a: self.a.clone(),
            storage: self.storage,
            fixed: self.fixed,
        }
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for MinMaxPartitionQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxPartitionQueue")
            .field("a", &self.a)
            .field("storage", &self.storage)
            .field("fixed", &self.fixed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_min_max_heap_range(a: &[i32]) -> bool {
        for i in 0..a.len() {
            let l = crate::index::left(i);
            let r = crate::index::right(i);
            for d in [l, r] {
                if d < a.len() {
                    let ok = if crate::index::min_level(i) {
                        a[i] <= a[d]
                    } else {
                        a[i] >= a[d]
                    };
                    if !ok {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn check_invariants(q: &MinMaxPartitionQueue<i32>) {
        // Invariant 1: storage squareness (or 0).
        let k = partition::ceil_sqrt(q.storage);
        assert!(q.storage == 0 || k * k == q.storage, "storage {} not a perfect square", q.storage);
        assert!(q.a.len() <= q.storage);

        let final_p = partition::final_partition(q.a.len());
        for p in 0..=final_p {
            let start = partition::partition_start(p);
            let n = partition::count_in_partition(q.a.len(), p);

            // Invariant 2: local heap order.
            assert!(is_min_max_heap_range(&q.a[start..start + n]));

            // Invariant 4: completeness of prior partitions.
            if p < final_p {
                assert_eq!(n, partition::partition_size(p));
            } else {
                assert!(n <= partition::partition_size(p));
            }

            // Invariant 3: global ordering between adjacent partitions.
            if p < final_p {
                let max_here = q.a[start..start + n]
                    .iter()
                    .max()
                    .expect("non-empty partition");
                let next_start = partition::partition_start(p + 1);
                assert!(*max_here <= q.a[next_start]);
            }
        }
    }

    #[test]
    fn s1_small_insert_sequence() {
        let mut q = MinMaxPartitionQueue::new();
        for v in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
            q.insert(v).unwrap();
            check_invariants(&q);
        }
        assert_eq!(q.len(), 11);
        assert_eq!(q.min(), Ok(&1));
        assert_eq!(q.max(), Ok(&9));
        assert!(q.contains(&4));
        assert!(!q.contains(&7));
    }

    #[test]
    fn s2_ripple_eviction_on_fixed_queue() {
        let mut q: MinMaxPartitionQueue<i32> = MinMaxPartitionQueue::with_capacity(1, false);
        assert!(q.insert(10).is_ok());
        assert_eq!(q.insert(20), Err(Error::CapacityExceeded));
    }

    #[test]
    fn s3_bulk_build() {
        let q = MinMaxPartitionQueue::from_slice(&[8, 2, 5, 7, 1, 4, 3, 6, 0], true);
        assert_eq!(q.len(), 9);
        assert_eq!(q.capacity(), 9);
        assert_eq!(q.min(), Ok(&0));
        assert_eq!(q.max(), Ok(&8));
        check_invariants(&q);
    }

    #[test]
    fn s4_delete_ripple_across_partitions() {
        let data: Vec<i32> = (0..9).collect();
        let mut q = MinMaxPartitionQueue::from_vec(data, true);
        assert!(q.remove(&0));
        assert_eq!(q.len(), 8);
        assert_eq!(q.min(), Ok(&1));
        assert_eq!(q.max(), Ok(&8));
        check_invariants(&q);
    }

    #[test]
    fn s5_negative_remove() {
        let mut q = MinMaxPartitionQueue::from_slice(&[8, 2, 5, 7, 1, 4, 3, 6, 0], true);
        let len_before = q.len();
        assert!(!q.remove(&42));
        assert_eq!(q.len(), len_before);
    }

    #[test]
    fn s6_growth_stays_square_and_monotonic() {
        let mut q = MinMaxPartitionQueue::new();
        let mut prev_storage = 0;
        for v in 0..=16 {
            q.insert(v).unwrap();
            let k = partition::ceil_sqrt(q.capacity());
            assert_eq!(k * k, q.capacity());
            assert!(q.capacity() >= q.len());
            assert!(q.capacity() >= prev_storage);
            prev_storage = q.capacity();
        }
        assert_eq!(q.capacity(), 25);
    }

    #[test]
    fn insert_then_remove_is_inverse_on_the_multiset() {
        let mut q = MinMaxPartitionQueue::from_vec(vec![5, 1, 9, 3, 7], true);
        let before: Vec<i32> = {
            let mut v: Vec<i32> = q.iter().copied().collect();
            v.sort_unstable();
            v
        };
        q.insert(42).unwrap();
        assert!(q.remove(&42));
        let mut after: Vec<i32> = q.iter().copied().collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn find_and_get_agree() {
        let q = MinMaxPartitionQueue::from_slice(&[8, 2, 5, 7, 1, 4, 3, 6, 0], true);
        for v in 0..9 {
            let idx = q.find(&v).expect("value must be present");
            assert_eq!(q.get(idx), Ok(&v));
            assert_eq!(q[idx], v);
        }
        assert_eq!(q.find(&42), None);
    }

    #[test]
    fn out_of_range_get() {
        let q = MinMaxPartitionQueue::from_slice(&[1, 2, 3], false);
        assert_eq!(q.get(100), Err(Error::OutOfRange));
    }

    #[test]
    fn empty_min_max_report_empty() {
        let q: MinMaxPartitionQueue<i32> = MinMaxPartitionQueue::new();
        assert_eq!(q.min(), Err(Error::Empty));
        assert_eq!(q.max(), Err(Error::Empty));
    }

    #[test]
    fn clone_is_a_deep_independent_copy() {
        let mut q = MinMaxPartitionQueue::from_vec(vec![5, 1, 9, 3, 7], true);
        let mut cloned = q.clone();
        q.insert(100).unwrap();
        assert!(!cloned.contains(&100));
        assert!(q.contains(&100));
        cloned.insert(200).unwrap();
        assert!(!q.contains(&200));
    }

    #[test]
    fn resize_forbidden_on_fixed_queue() {
        let mut q: MinMaxPartitionQueue<i32> = MinMaxPartitionQueue::with_capacity(4, false);
        assert_eq!(q.resize(16, true), Err(Error::ResizeForbidden));
    }

    // Ambient property tests, driven by `rand`, checked against a sorted
    // `Vec<i32>` oracle.
    mod properties {
        use super::*;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        #[test]
        fn p1_random_insert_contains() {
            let mut rng = StdRng::seed_from_u64(0xC0FFEE);
            let mut q: MinMaxPartitionQueue<i32> = MinMaxPartitionQueue::new();
            for _ in 0..400 {
                let v = rng.random_range(-1000..1000);
                q.insert(v).unwrap();
                assert!(q.contains(&v));
                check_invariants(&q);
            }
        }

        #[test]
        fn p2_random_insert_remove_against_sorted_vec_oracle() {
            let mut rng = StdRng::seed_from_u64(0xDECAF);
            let mut q: MinMaxPartitionQueue<i32> = MinMaxPartitionQueue::new();
            let mut oracle: Vec<i32> = Vec::new();

            for _ in 0..800 {
                let do_insert = oracle.is_empty() || rng.random_bool(0.6);
                if do_insert {
                    let v = rng.random_range(-500..500);
                    q.insert(v).unwrap();
                    let pos = oracle.partition_point(|&x| x < v);
                    oracle.insert(pos, v);
                } else {
                    let idx = rng.random_range(0..oracle.len());
                    let v = oracle[idx];
                    assert!(q.remove(&v));
                    let pos = oracle.iter().position(|&x| x == v).unwrap();
                    oracle.remove(pos);
                }

                assert_eq!(q.len(), oracle.len());
                if let Some(&min) = oracle.iter().min() {
                    assert_eq!(q.min(), Ok(&min));
                }
                if let Some(&max) = oracle.iter().max() {
                    assert_eq!(q.max(), Ok(&max));
                }
            }
        }

        #[test]
        fn p3_growth_is_monotonic_and_square_under_pure_insertion() {
            let mut rng = StdRng::seed_from_u64(0xFEED);
            let mut q: MinMaxPartitionQueue<i32> = MinMaxPartitionQueue::new();
            let mut prev_capacity = 0;
            for _ in 0..500 {
                let v = rng.random_range(i32::MIN..i32::MAX);
                q.insert(v).unwrap();
                assert!(q.capacity() >= prev_capacity);
                let k = partition::ceil_sqrt(q.capacity());
                assert_eq!(k * k, q.capacity());
                prev_capacity = q.capacity();
            }
        }
    }
}
