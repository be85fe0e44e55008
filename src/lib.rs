/*! # About
A searchable double-ended priority queue backed by a single contiguous
buffer partitioned into successively larger min-max heaps.

# Core idea
An ordinary binary heap gives `O(log n)` access to one extreme (a min-heap
to the min, a max-heap to the max) but no efficient way to ask "is `v` in
here?" without a side index. This structure buys both extremes *and*
membership search by splitting its backing buffer into runs of sizes
1, 3, 5, … (so total storage is always a perfect square) where:

- every run is independently heap-ordered as a [min-max heap](crate::minmax_heap),
  giving `O(1)` peek-min/peek-max *within* a run;
- runs are kept in a *global* order relative to each other — every element
  in run `k` is `<=` every element in run `k + 1` — so the run owning (or
  that should own) a value can be found by binary search over run ranges
  ([`locator`]) rather than a linear scan.

Insertion ripples a displaced maximum forward through successive runs;
deletion ripples the final run's minimum backward to refill the vacated
slot. [`queue`] ties these pieces together into the public
[`MinMaxPartitionQueue`](crate::queue::MinMaxPartitionQueue) container;
[`minmax_heap`] is the per-run heap primitive it's built on, and
[`index`], [`partition`], and [`build`] hold the supporting arithmetic.

# Example

```rust
use minmax_partition_queue::queue::MinMaxPartitionQueue;

let mut q = MinMaxPartitionQueue::new();
for v in [3, 1, 4, 1, 5, 9, 2, 6] {
    q.insert(v).unwrap();
}
assert_eq!(q.len(), 8);
assert_eq!(q.min(), Ok(&1));
assert_eq!(q.max(), Ok(&9));
assert!(q.contains(&4));
assert!(q.remove(&4));
assert!(!q.contains(&4));
```
*/

pub mod build;
pub mod error;
pub mod index;
pub mod locator;
pub mod minmax_heap;
pub mod partition;
pub mod queue;
