#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

use core::cmp::Ordering;

mod polyfill;

mod default;
mod order;

// port of stdlib implementation
mod liballoc;

pub use default::OrdTotalOrder;
pub use liballoc::collections::binary_heap;
pub use order::{by_fn, FnTotalOrder, Reversed};

#[doc(no_inline)]
pub use binary_heap::BinaryHeap;

/// A total order over a type, supplied at runtime.
///
/// Implementors define [`cmp`] and may override the derived comparisons if they can
/// answer them more cheaply.  Elements that compare [`Less`] are given the *higher*
/// priority by a [`BinaryHeap`], and are therefore popped first.
///
/// It is a logic error for an implementation not to be a total preorder: `cmp` must be
/// consistent from one call to the next, transitive, and antisymmetric.  The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the
/// collection that observed it and will not result in undefined behavior.
///
/// [`cmp`]: TotalOrder::cmp
/// [`Less`]: Ordering::Less
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use knoll::{BinaryHeap, TotalOrder};
///
/// // Orders strings by their length alone.
/// struct ByLength;
///
/// impl TotalOrder for ByLength {
///     type OrderedType = str;
///
///     fn cmp(&self, this: &str, that: &str) -> Ordering {
///         this.len().cmp(&that.len())
///     }
/// }
///
/// let mut heap = BinaryHeap::<&str, _>::new(ByLength);
/// heap.push_many(["copse", "a", "knoll"]);
/// assert_eq!(heap.pop(), Some("a"));
/// ```
pub trait TotalOrder {
    /// The type over which this order is defined.
    type OrderedType: ?Sized;

    /// Compare two values.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering;

    /// Test whether two values are equal under this order.
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Test whether two values are unequal under this order.
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Test whether `this` is greater than or equal to `that` under this order.
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Test whether `this` is strictly greater than `that` under this order.
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Test whether `this` is less than or equal to `that` under this order.
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Test whether `this` is strictly less than `that` under this order.
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<O: ?Sized + TotalOrder> TotalOrder for &O {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        O::cmp(*self, this, that)
    }

    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        O::eq(*self, this, that)
    }
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        O::ne(*self, this, that)
    }

    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        O::ge(*self, this, that)
    }
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        O::gt(*self, this, that)
    }
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        O::le(*self, this, that)
    }
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        O::lt(*self, this, that)
    }
}
