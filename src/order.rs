//! Adapters for building a [`TotalOrder`] out of other things.

use crate::TotalOrder;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A total order defined by a comparison function.
///
/// Created with [`by_fn`].
pub struct FnTotalOrder<T: ?Sized, F> {
    compare: F,
    _marker: PhantomData<fn(&T)>,
}

/// Wraps the comparison function `compare` as a [`TotalOrder`] over `T`.
///
/// `compare(a, b)` returning [`Ordering::Less`] gives `a` the higher priority.
///
/// # Examples
///
/// ```
/// use knoll::{by_fn, BinaryHeap};
///
/// // Largest first.
/// let mut heap = BinaryHeap::new(by_fn(|a: &i32, b: &i32| b.cmp(a)));
/// heap.push_many([3, 9, 4]);
/// assert_eq!(heap.pop(), Some(9));
/// ```
pub fn by_fn<T, F>(compare: F) -> FnTotalOrder<T, F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FnTotalOrder { compare, _marker: PhantomData }
}

impl<T: ?Sized, F: Clone> Clone for FnTotalOrder<T, F> {
    fn clone(&self) -> Self {
        FnTotalOrder { compare: self.compare.clone(), _marker: PhantomData }
    }
}

impl<T: ?Sized, F: Copy> Copy for FnTotalOrder<T, F> {}

impl<T: ?Sized, F> fmt::Debug for FnTotalOrder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnTotalOrder")
    }
}

impl<T, F> TotalOrder for FnTotalOrder<T, F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.compare)(this, that)
    }
}

/// Reverses another total order, so that what it ranks last is ranked first.
///
/// # Examples
///
/// ```
/// use knoll::{BinaryHeap, OrdTotalOrder, Reversed};
///
/// let mut heap = BinaryHeap::new(Reversed(OrdTotalOrder::<i32>::default()));
/// heap.push_many([1, 7, 3]);
/// assert_eq!(heap.pop_many(2), Some(vec![7, 3]));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O>(pub O);

impl<O: TotalOrder> TotalOrder for Reversed<O> {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        self.0.cmp(that, this)
    }

    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.eq(that, this)
    }
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.ne(that, this)
    }

    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.ge(that, this)
    }
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.gt(that, this)
    }
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.le(that, this)
    }
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.0.lt(that, this)
    }
}
