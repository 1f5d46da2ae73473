//! A priority queue implemented with a binary heap.
//!
//! The heap is ordered by a runtime [`TotalOrder`] rather than by the [`Ord`]
//! implementation of its items: whichever item the order ranks *least* has the
//! highest priority and sits at the top.
//!
//! Insertion and popping the top element have *O*(log(*n*)) time complexity.
//! Checking the top element is *O*(1). Converting a vector to a binary heap
//! can be done in-place, and has *O*(*n*) complexity. A binary heap can also be
//! converted to a sorted vector in-place, allowing it to be used for an *O*(*n* * log(*n*))
//! in-place heapsort.
//!
//! # Examples
//!
//! This is a larger example that implements [Dijkstra's algorithm][dijkstra]
//! to solve the [shortest path problem][sssp] on a [directed graph][dir_graph].
//! It shows how to use [`BinaryHeap`] with custom types and a custom order.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [sssp]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [dir_graph]: https://en.wikipedia.org/wiki/Directed_graph
//!
//! ```
//! use core::cmp::Ordering;
//! use knoll::{BinaryHeap, TotalOrder};
//!
//! #[derive(Copy, Clone)]
//! struct State {
//!     cost: usize,
//!     position: usize,
//! }
//!
//! // Cheapest state first, with ties broken by position so that the order
//! // is total.
//! struct CostOrder;
//!
//! impl TotalOrder for CostOrder {
//!     type OrderedType = State;
//!
//!     fn cmp(&self, this: &State, that: &State) -> Ordering {
//!         this.cost
//!             .cmp(&that.cost)
//!             .then_with(|| this.position.cmp(&that.position))
//!     }
//! }
//!
//! // Each node is represented as a `usize`, for a shorter implementation.
//! struct Edge {
//!     node: usize,
//!     cost: usize,
//! }
//!
//! // Dijkstra's shortest path algorithm.
//!
//! // Start at `start` and use `dist` to track the current shortest distance
//! // to each node. This implementation isn't memory-efficient as it may leave duplicate
//! // nodes in the queue. It also uses `usize::MAX` as a sentinel value,
//! // for a simpler implementation.
//! fn shortest_path(adj_list: &Vec<Vec<Edge>>, start: usize, goal: usize) -> Option<usize> {
//!     // dist[node] = current shortest distance from `start` to `node`
//!     let mut dist: Vec<_> = (0..adj_list.len()).map(|_| usize::MAX).collect();
//!
//!     let mut heap = BinaryHeap::new(CostOrder);
//!
//!     // We're at `start`, with a zero cost
//!     dist[start] = 0;
//!     heap.push(State { cost: 0, position: start });
//!
//!     // Examine the frontier with lower cost nodes first
//!     while let Some(State { cost, position }) = heap.pop() {
//!         // Alternatively we could have continued to find all shortest paths
//!         if position == goal { return Some(cost); }
//!
//!         // Important as we may have already found a better way
//!         if cost > dist[position] { continue; }
//!
//!         // For each node we can reach, see if we can find a way with
//!         // a lower cost going through this node
//!         for edge in &adj_list[position] {
//!             let next = State { cost: cost + edge.cost, position: edge.node };
//!
//!             // If so, add it to the frontier and continue
//!             if next.cost < dist[next.position] {
//!                 heap.push(next);
//!                 // Relaxation, we have now found a better way
//!                 dist[next.position] = next.cost;
//!             }
//!         }
//!     }
//!
//!     // Goal not reachable
//!     None
//! }
//!
//! fn main() {
//!     // This is the directed graph we're going to use.
//!     // The node numbers correspond to the different states,
//!     // and the edge weights symbolize the cost of moving
//!     // from one node to another.
//!     // Note that the edges are one-way.
//!     //
//!     //                  7
//!     //          +-----------------+
//!     //          |                 |
//!     //          v   1        2    |  2
//!     //          0 -----> 1 -----> 3 ---> 4
//!     //          |        ^        ^      ^
//!     //          |        | 1      |      |
//!     //          |        |        | 3    | 1
//!     //          +------> 2 -------+      |
//!     //           10      |               |
//!     //                   +---------------+
//!     //
//!     // The graph is represented as an adjacency list where each index,
//!     // corresponding to a node value, has a list of outgoing edges.
//!     // Chosen for its efficiency.
//!     let graph = vec![
//!         // Node 0
//!         vec![Edge { node: 2, cost: 10 },
//!              Edge { node: 1, cost: 1 }],
//!         // Node 1
//!         vec![Edge { node: 3, cost: 2 }],
//!         // Node 2
//!         vec![Edge { node: 1, cost: 1 },
//!              Edge { node: 3, cost: 3 },
//!              Edge { node: 4, cost: 1 }],
//!         // Node 3
//!         vec![Edge { node: 0, cost: 7 },
//!              Edge { node: 4, cost: 2 }],
//!         // Node 4
//!         vec![]];
//!
//!     assert_eq!(shortest_path(&graph, 0, 1), Some(1));
//!     assert_eq!(shortest_path(&graph, 0, 3), Some(3));
//!     assert_eq!(shortest_path(&graph, 3, 0), Some(7));
//!     assert_eq!(shortest_path(&graph, 0, 4), Some(5));
//!     assert_eq!(shortest_path(&graph, 4, 0), None);
//! }
//! ```

use core::borrow::Borrow;
use core::fmt;
#[cfg(feature = "trusted_len")]
use core::iter::TrustedLen;
use core::iter::{FromIterator, FusedIterator};
use core::mem::{swap, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;

use alloc::collections::TryReserveError;
use alloc::slice;
use alloc::vec::{self, Vec};
use cfg_if::cfg_if;

use crate::{OrdTotalOrder, TotalOrder};

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary heap.
///
/// The item at the top is the one that the heap's [`TotalOrder`] ranks least, so
/// under the default [`OrdTotalOrder`] this is a min-heap.
///
/// It is a logic error for an item or the order to be modified (except via the
/// [`order_mut`] method) in such a way that the item's ranking relative to any
/// other item, as determined by that order, changes while they are in the
/// heap. This is normally only possible through [`Cell`], [`RefCell`], global
/// state, I/O, or unsafe code. The behavior resulting from such a logic error is
/// not specified, but will be encapsulated to the `BinaryHeap` that observed the
/// logic error and not result in undefined behavior. This could include panics,
/// incorrect results, aborts, memory leaks, and non-termination.
///
/// As long as no elements change their relative order while being in the heap
/// as described above, the API of `BinaryHeap` guarantees that the heap
/// invariant remains intact i.e. its methods all behave as documented, even in
/// the presence of closures getting unwinded out of. Should the order itself
/// panic part way through an operation, every item still remains in the heap
/// exactly once.
///
/// # Examples
///
/// ```
/// use knoll::BinaryHeap;
///
/// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
///
/// // We can use peek to look at the next item in the heap. In this case,
/// // there's no items in there yet so we get None.
/// assert_eq!(heap.peek(), None);
///
/// // Let's add some scores...
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// // Now peek shows the most important item in the heap, which under the
/// // default order is the least.
/// assert_eq!(heap.peek(), Some(&1));
///
/// // We can check the length of a heap.
/// assert_eq!(heap.len(), 3);
///
/// // We can iterate over the items in the heap, although they are returned in
/// // a random order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // If we instead pop these scores, they should come back in order.
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), None);
///
/// // We can clear the heap of any remaining items.
/// heap.clear();
///
/// // The heap should now be empty.
/// assert!(heap.is_empty())
/// ```
///
/// A `BinaryHeap` with a known list of items can be initialized from an array:
///
/// ```
/// use knoll::BinaryHeap;
///
/// let heap: BinaryHeap<_> = BinaryHeap::from([1, 5, 2]);
/// ```
///
/// ## Max-heap
///
/// Either [`Reversed`], a comparison function given to [`by_fn`] or a custom
/// [`TotalOrder`] implementation can be used to make `BinaryHeap` a max-heap.
/// This makes `heap.pop()` return the greatest value instead of the least.
///
/// ```
/// use knoll::{by_fn, BinaryHeap};
///
/// let mut heap = BinaryHeap::new(by_fn(|a: &i32, b: &i32| b.cmp(a)));
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// // If we pop these scores now, they should come back greatest first.
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek]/[peek\_mut] | [build] |
/// |---------|---------------|--------------------|---------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1)             | *O*(*n*) |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [`order_mut`]: Self::order_mut
/// [`Reversed`]: crate::Reversed
/// [`by_fn`]: crate::by_fn
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
/// [peek\_mut]: BinaryHeap::peek_mut
/// [build]: BinaryHeap::build
pub struct BinaryHeap<T, O = OrdTotalOrder<T>> {
    data: Vec<T>,
    order: O,
}

/// Whether `this` must sit nearer the top of the heap than `that`.
#[inline]
fn outranks<T, O>(order: &O, this: &T, that: &T) -> bool
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    order.lt(this.borrow(), that.borrow())
}

/// Structure wrapping a mutable reference to the top item on a
/// `BinaryHeap`.
///
/// This `struct` is created by the [`peek_mut`] method on [`BinaryHeap`]. See
/// its documentation for more.
///
/// [`peek_mut`]: BinaryHeap::peek_mut
pub struct PeekMut<'a, T, O = OrdTotalOrder<T>>
where
    T: 'a + Borrow<O::OrderedType>,
    O: TotalOrder,
{
    heap: &'a mut BinaryHeap<T, O>,
    // Set once a `&mut T` has been handed out, after which the top may be
    // out of place.
    sift: bool,
}

impl<T, O> fmt::Debug for PeekMut<'_, T, O>
where
    T: Borrow<O::OrderedType> + fmt::Debug,
    O: TotalOrder,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

impl<T, O> Drop for PeekMut<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    fn drop(&mut self) {
        if self.sift {
            // SAFETY: PeekMut is only instantiated for non-empty heaps.
            unsafe { self.heap.sift_down(0) };
        }
    }
}

impl<T, O> Deref for PeekMut<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    type Target = T;
    fn deref(&self) -> &T {
        debug_assert!(!self.heap.is_empty());
        &self.heap.data[0]
    }
}

impl<T, O> DerefMut for PeekMut<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    fn deref_mut(&mut self) -> &mut T {
        debug_assert!(!self.heap.is_empty());
        self.sift = true;
        &mut self.heap.data[0]
    }
}

impl<'a, T, O> PeekMut<'a, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    /// Removes the peeked value from the heap and returns it.
    pub fn pop(mut this: PeekMut<'a, T, O>) -> T {
        // The top is leaving the heap, so whatever was done to it through this
        // guard no longer needs sifting.
        this.sift = false;
        let top = this.heap.data.swap_remove(0);
        if !this.heap.is_empty() {
            // SAFETY: the heap is non-empty, so 0 < self.len().
            unsafe { this.heap.sift_down(0) };
        }
        top
    }
}

impl<T: Clone, O: Clone> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        BinaryHeap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O> Default for BinaryHeap<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder + Default,
{
    /// Creates an empty `BinaryHeap<T, O>` under the default order.
    #[inline]
    fn default() -> BinaryHeap<T, O> {
        BinaryHeap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O> BinaryHeap<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    /// Creates an empty `BinaryHeap` that prioritises items by `order`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::{BinaryHeap, OrdTotalOrder};
    /// let mut heap = BinaryHeap::new(OrdTotalOrder::<i32>::default());
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(order: O) -> BinaryHeap<T, O> {
        BinaryHeap { data: Vec::new(), order }
    }

    /// Creates an empty `BinaryHeap` with at least the specified capacity.
    ///
    /// The binary heap will be able to hold at least `capacity` elements without
    /// reallocating. This method is allowed to allocate for more elements than
    /// `capacity`. If `capacity` is 0, the binary heap will not allocate. The
    /// capacity has no bearing on [`len`].
    ///
    /// [`len`]: BinaryHeap::len
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::{BinaryHeap, OrdTotalOrder};
    /// let mut heap = BinaryHeap::with_capacity(10, OrdTotalOrder::<i32>::default());
    /// assert_eq!(heap.len(), 0);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize, order: O) -> BinaryHeap<T, O> {
        BinaryHeap { data: Vec::with_capacity(capacity), order }
    }

    /// Converts `vec` into a `BinaryHeap` prioritised by `order`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::{by_fn, BinaryHeap};
    ///
    /// let heap = BinaryHeap::from_vec(vec![3, 1, 2], by_fn(|a: &i32, b: &i32| b.cmp(a)));
    /// assert_eq!(heap.peek(), Some(&3));
    /// ```
    pub fn from_vec(vec: Vec<T>, order: O) -> BinaryHeap<T, O> {
        let mut heap = BinaryHeap { data: vec, order };
        heap.rebuild();
        heap
    }

    /// Creates a `BinaryHeap` prioritised by `order` holding copies of `values`.
    ///
    /// Runs in *O*(*n*) time; see [`build`].
    ///
    /// [`build`]: BinaryHeap::build
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::{BinaryHeap, OrdTotalOrder};
    ///
    /// let values = [5, 3, 8];
    /// let heap = BinaryHeap::from_slice(&values, OrdTotalOrder::<i32>::default());
    /// assert_eq!(heap.len(), values.len());
    /// assert_eq!(heap.peek(), Some(&3));
    /// ```
    pub fn from_slice(values: &[T], order: O) -> BinaryHeap<T, O>
    where
        T: Clone,
    {
        BinaryHeap::from_vec(values.to_vec(), order)
    }

    /// Replaces the contents of the heap with `values`.
    ///
    /// Any existing allocation is reused where it is large enough. The new items are
    /// heapified bottom-up, which takes *O*(*n*) time and at most 2*n* comparisons;
    /// prefer this to pushing the items one by one when filling a heap in bulk.
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from([42]);
    /// heap.build([9, 4, 7]);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.into_sorted_vec(), [4, 7, 9]);
    /// ```
    pub fn build<I: IntoIterator<Item = T>>(&mut self, values: I) {
        struct RebuildOnDrop<'a, T, O>(&'a mut BinaryHeap<T, O>)
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder;

        impl<T, O> Drop for RebuildOnDrop<'_, T, O>
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder,
        {
            fn drop(&mut self) {
                self.0.rebuild();
            }
        }

        // Whatever `values` yields before it panics is still left heapified.
        let guard = RebuildOnDrop(self);
        guard.0.data.clear();
        guard.0.data.extend(values);
    }

    /// Returns a mutable reference to the top item in the binary heap, or
    /// `None` if it is empty.
    ///
    /// Note: If the `PeekMut` value is leaked, the heap may be left with its top
    /// item out of place.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// assert!(heap.peek_mut().is_none());
    ///
    /// heap.push(1);
    /// heap.push(5);
    /// heap.push(2);
    /// {
    ///     let mut val = heap.peek_mut().unwrap();
    ///     *val = 8;
    /// }
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    ///
    /// # Time complexity
    ///
    /// If the item is modified then the worst case time complexity is *O*(log(*n*)),
    /// otherwise it's *O*(1).
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T, O>> {
        if self.is_empty() { None } else { Some(PeekMut { heap: self, sift: false }) }
    }

    /// Removes the top item from the binary heap and returns it, or `None` if it
    /// is empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([3, 1]);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.sift_down(0) };
            }
            item
        })
    }

    /// Removes up to `k` items from the top of the heap, returning them in
    /// priority order, or `None` if the heap is empty.
    ///
    /// Asking for more items than the heap holds is not an error: every item is
    /// returned and the heap is left empty. Asking a non-empty heap for no items
    /// returns an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::{by_fn, BinaryHeap};
    ///
    /// let mut heap = BinaryHeap::new(by_fn(|a: &i32, b: &i32| b.cmp(a)));
    /// heap.push_many([10, 20]);
    ///
    /// assert_eq!(heap.pop_many(4), Some(vec![20, 10]));
    /// assert_eq!(heap.pop_many(4), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*k* * log(*n*)).
    pub fn pop_many(&mut self, k: usize) -> Option<Vec<T>> {
        if self.is_empty() {
            return None;
        }

        let mut popped = Vec::with_capacity(k.min(self.len()));
        popped.extend((0..k).map_while(|_| self.pop()));
        Some(popped)
    }

    /// Pushes an item onto the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). This is the most meaningful cost metric when pushing
    /// elements that are *not* already in any sorted pattern.
    ///
    /// The time complexity degrades if elements are pushed in predominantly
    /// priority-ascending order. In the worst case the amortized cost per push
    /// is *O*(log(*n*)) against a heap containing *n* elements.
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*). The worst case
    /// occurs when capacity is exhausted and needs a resize. The resize cost
    /// has been amortized in the previous figures.
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
    }

    /// Pushes every item of `items` onto the heap, one at a time and in order.
    ///
    /// The result is the same as calling [`push`] for each item. To replace the
    /// whole contents of the heap in linear time, use [`build`] instead.
    ///
    /// [`push`]: BinaryHeap::push
    /// [`build`]: BinaryHeap::build
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// heap.push_many([10, 30, 20]);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.pop(), Some(10));
    /// ```
    pub fn push_many<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let iterator = items.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |item| self.push(item));
    }

    /// Consumes the `BinaryHeap` and returns a vector sorted in ascending order
    /// under the heap's order, i.e. in the order [`pop`] would have yielded.
    ///
    /// [`pop`]: BinaryHeap::pop
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// let vec = heap.into_sorted_vec();
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // Park the current top just past the shrinking heap; the tail thus
            // fills up from the back in priority order.
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            //  Which means 0 < end and end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        self.data.reverse();
        self.into_vec()
    }

    // Sifting moves one element out of the vector (leaving behind a hole),
    // shifts the others along and writes the removed element back into the
    // final location of the hole. The `Hole` type fills the hole back in when
    // it goes out of scope, even if a comparison unwinds. This does half the
    // moves that repeated swapping would.

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        // Take out the value at `pos` and create a hole.
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // Equal items stay where they are.
            // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
            //  and so hole.pos() - 1 can't underflow.
            //  This guarantees that parent < hole.pos() so
            //  it's a valid index and also != hole.pos().
            if !outranks(&self.order, hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Take an element at `pos` and move it down the heap,
    /// while one of its children outranks it.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // Prefer the left child unless the right one strictly outranks it.
            // SAFETY: child < end - 1 < self.len() and
            //  child + 1 < end <= self.len(), so they're valid indexes.
            //  child == 2 * hole.pos() + 1 != hole.pos() and
            //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
            child += unsafe { outranks(&self.order, hole.get(child + 1), hole.get(child)) }
                as usize;

            // if we are already in order, stop.
            // SAFETY: child is now either the old child or the old child+1
            //  We already proven that both are < self.len() and != hole.pos()
            if !outranks(&self.order, unsafe { hole.get(child) }, hole.element()) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // SAFETY: && short circuit, which means that in the
        //  second condition it's already true that child == end - 1 < self.len().
        if child == end - 1 && outranks(&self.order, unsafe { hole.get(child) }, hole.element())
        {
            // SAFETY: child is already proven to be a valid index and
            //  child == 2 * hole.pos() + 1 != hole.pos().
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Rebuild assuming data[0..start] is still a proper heap.
    fn rebuild_tail(&mut self, start: usize) {
        if start == self.len() {
            return;
        }

        let tail_len = self.len() - start;

        #[inline(always)]
        fn log2_fast(x: usize) -> usize {
            (usize::BITS - x.leading_zeros() - 1) as usize
        }

        // `rebuild` takes O(self.len()) operations
        // and about 2 * self.len() comparisons in the worst case
        // while repeating `sift_up` takes O(tail_len * log(start)) operations
        // and about 1 * tail_len * log_2(start) comparisons in the worst case,
        // assuming start >= tail_len. For larger heaps, the crossover point
        // no longer follows this reasoning and was determined empirically.
        let better_to_rebuild = if start < tail_len {
            true
        } else if self.len() <= 2048 {
            2 * self.len() < tail_len * log2_fast(start)
        } else {
            2 * self.len() < tail_len * 11
        };

        if better_to_rebuild {
            self.rebuild();
        } else {
            for i in start..self.len() {
                // SAFETY: The index `i` is always less than self.len().
                unsafe { self.sift_up(0, i) };
            }
        }
    }

    /// Bottom-up heapify: sift down every parent, last one first.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// `self` keeps its own order; the items of `other` are re-ranked under it.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    ///
    /// let mut a: BinaryHeap<_> = BinaryHeap::from([-10, 1, 2, 3, 3]);
    /// let mut b: BinaryHeap<_> = BinaryHeap::from([-20, 5, 43]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.len() < other.len() {
            // Keep the larger allocation. Its contents were arranged under
            // `other`'s order, which need not agree with ours.
            swap(&mut self.data, &mut other.data);
            self.data.append(&mut other.data);
            self.rebuild();
        } else {
            let start = self.data.len();
            self.data.append(&mut other.data);
            self.rebuild_tail(start);
        }
    }

    /// Clears the binary heap, returning an iterator over the removed elements
    /// in priority order. If the iterator is dropped before being fully consumed,
    /// it drops the remaining elements in priority order.
    ///
    /// The returned iterator keeps a mutable borrow on the heap to optimize
    /// its implementation.
    ///
    /// Note:
    /// * `.drain_sorted()` is *O*(*n* \* log(*n*)); much slower than `.drain()`.
    ///   You should use the latter for most cases.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 3, 4, 5]);
    /// assert_eq!(heap.len(), 5);
    ///
    /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// assert_eq!(heap.len(), 0);
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { inner: self }
    }

    /// Returns an iterator which retrieves elements in priority order.
    /// This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O> {
        IntoIterSorted { inner: self }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns
    /// `false`. The elements are visited in unsorted (and unspecified) order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([-10, -5, 1, 2, 4, 13]);
    ///
    /// heap.retain(|x| x % 2 == 0); // only keep even numbers
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4])
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        struct RebuildOnDrop<'a, T, O>
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder,
        {
            heap: &'a mut BinaryHeap<T, O>,
            first_removed: usize,
        }

        impl<T, O> Drop for RebuildOnDrop<'_, T, O>
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder,
        {
            fn drop(&mut self) {
                // data[..first_removed] is untouched, so we only need to
                // rebuild the tail:
                self.heap.rebuild_tail(self.first_removed);
            }
        }

        let mut guard = RebuildOnDrop { first_removed: self.len(), heap: self };

        let mut i = 0;
        let first_removed = &mut guard.first_removed;
        guard.heap.data.retain(|e| {
            let keep = f(e);
            if !keep && i < *first_removed {
                *first_removed = i;
            }
            i += 1;
            keep
        });
    }

    /// Mutably borrow this heap's order.  When the returned guard is dropped, the
    /// heap will be rebuilt under the (possibly changed) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use knoll::{BinaryHeap, TotalOrder};
    ///
    /// // Ranks numbers by their remainder modulo `self.0`.
    /// struct Modulo(u32);
    ///
    /// impl TotalOrder for Modulo {
    ///     type OrderedType = u32;
    ///
    ///     fn cmp(&self, this: &u32, that: &u32) -> Ordering {
    ///         (this % self.0).cmp(&(that % self.0))
    ///     }
    /// }
    ///
    /// let mut heap = BinaryHeap::new(Modulo(10));
    /// heap.push_many([12, 21, 7]);
    /// assert_eq!(heap.peek(), Some(&21));
    ///
    /// heap.order_mut().0 = 4;
    /// assert_eq!(heap.peek(), Some(&12));
    /// ```
    pub fn order_mut(&mut self) -> OrderMut<'_, T, O> {
        OrderMut(self)
    }
}

/// Guarded mutable access to the order of a [`BinaryHeap`], which restores the
/// heap property when dropped.
///
/// This `struct` is created by [`BinaryHeap::order_mut`].
pub struct OrderMut<'a, T, O = OrdTotalOrder<T>>(&'a mut BinaryHeap<T, O>)
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder;

impl<T, O> Deref for OrderMut<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    type Target = O;
    fn deref(&self) -> &Self::Target {
        &self.0.order
    }
}

impl<T, O> DerefMut for OrderMut<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0.order
    }
}

impl<T, O> Drop for OrderMut<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    fn drop(&mut self) {
        self.0.rebuild()
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Returns an iterator visiting all values in the underlying vector, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the top item in the binary heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(5);
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&1));
    ///
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Borrow this heap's order.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements the binary heap can hold without reallocating.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::{BinaryHeap, OrdTotalOrder};
    /// let mut heap = BinaryHeap::with_capacity(100, OrdTotalOrder::<i32>::default());
    /// assert!(heap.capacity() >= 100);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for at least `additional` elements more than
    /// the current length. Unlike [`reserve`], this will not
    /// deliberately over-allocate to speculatively avoid frequent allocations.
    /// After calling `reserve_exact`, capacity will be greater than or equal to
    /// `self.len() + additional`. Does nothing if the capacity is already
    /// sufficient.
    ///
    /// [`reserve`]: BinaryHeap::reserve
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length. The allocator may reserve more space to speculatively
    /// avoid frequent allocations. After calling `reserve`,
    /// capacity will be greater than or equal to `self.len() + additional`.
    /// Does nothing if capacity is already sufficient.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// heap.reserve(100);
    /// assert!(heap.capacity() >= 100);
    /// heap.push(4);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Tries to reserve the minimum capacity for at least `additional` elements
    /// more than the current length. Unlike [`try_reserve`], this will not
    /// deliberately over-allocate to speculatively avoid frequent allocations.
    ///
    /// [`try_reserve`]: BinaryHeap::try_reserve
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned.
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve_exact(additional)
    }

    /// Tries to reserve capacity for at least `additional` elements more than the
    /// current length. The allocator may reserve more space to speculatively
    /// avoid frequent allocations. This method preserves the contents even if an
    /// error occurs.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// use std::collections::TryReserveError;
    ///
    /// fn find_min_slow(data: &[u32]) -> Result<Option<u32>, TryReserveError> {
    ///     let mut heap: BinaryHeap<u32> = BinaryHeap::default();
    ///
    ///     // Pre-reserve the memory, exiting if we can't
    ///     heap.try_reserve(data.len())?;
    ///
    ///     // Now we know this can't OOM in the middle of our complex work
    ///     heap.extend(data.iter());
    ///
    ///     Ok(heap.pop())
    /// }
    /// # find_min_slow(&[1, 2, 3]).expect("why is the test harness OOMing on 12 bytes?");
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Discards capacity with a lower bound.
    ///
    /// The capacity will remain at least as large as both the length
    /// and the supplied value.
    ///
    /// If the current capacity is less than the lower limit, this is a no-op.
    #[inline]
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.data.shrink_to(min_capacity)
    }

    /// Returns a slice of all values in the underlying vector, in arbitrary
    /// order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns a copy of every value in the heap, in arbitrary (storage) order.
    ///
    /// The copy is independent of the heap: changing it leaves the heap as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([4, 1, 3]);
    ///
    /// let mut values = heap.values();
    /// values.sort();
    /// assert_eq!(values, [1, 3, 4]);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector
    /// in arbitrary order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the length of the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the binary heap, returning an iterator over the removed elements
    /// in arbitrary order. If the iterator is dropped before being fully
    /// consumed, it drops the remaining elements in arbitrary order.
    ///
    /// The returned iterator keeps a mutable borrow on the heap to optimize
    /// its implementation.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// for x in heap.drain() {
    ///     println!("{x}");
    /// }
    ///
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the binary heap, keeping its allocation for reuse.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let mut heap: BinaryHeap<_> = BinaryHeap::from([1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// heap.clear();
    ///
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 2);
    /// ```
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// An owning iterator over the elements of a `BinaryHeap`, in priority order.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, O = OrdTotalOrder<T>> {
    inner: BinaryHeap<T, O>,
}

impl<T, O> Iterator for IntoIterSorted<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O> ExactSizeIterator for IntoIterSorted<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
}

impl<T, O> FusedIterator for IntoIterSorted<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
}

/// A draining iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::drain()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

/// A draining iterator over the elements of a `BinaryHeap`, in priority order.
///
/// This `struct` is created by [`BinaryHeap::drain_sorted()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct DrainSorted<'a, T, O = OrdTotalOrder<T>>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    inner: &'a mut BinaryHeap<T, O>,
}

impl<'a, T, O> Drop for DrainSorted<'a, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    /// Removes heap elements in priority order.
    fn drop(&mut self) {
        struct DropGuard<'r, 'a, T, O>(&'r mut DrainSorted<'a, T, O>)
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder;

        impl<'r, 'a, T, O> Drop for DropGuard<'r, 'a, T, O>
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder,
        {
            fn drop(&mut self) {
                while self.0.inner.pop().is_some() {}
            }
        }

        while let Some(item) = self.inner.pop() {
            let guard = DropGuard(self);
            drop(item);
            core::mem::forget(guard);
        }
    }
}

impl<T, O> Iterator for DrainSorted<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O> ExactSizeIterator for DrainSorted<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
}

impl<T, O> FusedIterator for DrainSorted<'_, T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
}

cfg_if! {
    if #[cfg(feature = "trusted_len")] {
        unsafe impl<T, O> TrustedLen for IntoIterSorted<T, O>
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder,
        {
        }

        unsafe impl<T, O> TrustedLen for DrainSorted<'_, T, O>
        where
            T: Borrow<O::OrderedType>,
            O: TotalOrder,
        {
        }
    }
}

impl<T, O> From<Vec<T>> for BinaryHeap<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder + Default,
{
    /// Converts a `Vec<T>` into a `BinaryHeap<T, O>` under the default order.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> BinaryHeap<T, O> {
        BinaryHeap::from_vec(vec, O::default())
    }
}

impl<T, O, const N: usize> From<[T; N]> for BinaryHeap<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder + Default,
{
    /// ```
    /// use knoll::BinaryHeap;
    ///
    /// let mut h1: BinaryHeap<_> = BinaryHeap::from([1, 4, 2, 3]);
    /// let mut h2: BinaryHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<BinaryHeap<T, O>> for Vec<T> {
    /// Converts a `BinaryHeap<T, O>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O> FromIterator<T> for BinaryHeap<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, O> {
        BinaryHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for BinaryHeap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the binary heap in arbitrary order. The binary heap cannot be used
    /// after calling this.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use knoll::BinaryHeap;
    /// let heap: BinaryHeap<_> = BinaryHeap::from([1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.into_iter() {
    ///     // x has type i32, not &i32
    ///     println!("{x}");
    /// }
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O> Extend<T> for BinaryHeap<T, O>
where
    T: Borrow<O::OrderedType>,
    O: TotalOrder,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_many(iter);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a, T, O> Extend<&'a T> for BinaryHeap<T, O>
where
    T: 'a + Borrow<O::OrderedType> + Copy,
    O: TotalOrder,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push_many(iter.into_iter().copied());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
