use super::*;
use crate::liballoc::test_helpers::test_rng;
use crate::liballoc::testing::crash_test::{CrashTestDummy, Panic};
use crate::liballoc::testing::rng::DeterministicRng;
use crate::polyfill::*;
use crate::{by_fn, Reversed};
use core::cell::Cell;
use core::cmp::Ordering;
use rand::seq::SliceRandom;
use rand::Rng;
use std::panic::{catch_unwind, AssertUnwindSafe};

type MaxOrder = Reversed<OrdTotalOrder<i32>>;

fn max_heap() -> BinaryHeap<i32, MaxOrder> {
    BinaryHeap::default()
}

// Asserts that no item outranks its parent.
fn check_heap<T, O>(heap: &BinaryHeap<T, O>)
where
    T: Borrow<O::OrderedType> + fmt::Debug,
    O: TotalOrder,
{
    for i in 1..heap.data.len() {
        let parent = (i - 1) / 2;
        assert!(
            !outranks(&heap.order, &heap.data[i], &heap.data[parent]),
            "{:?} at {} outranks its parent {:?} at {}",
            heap.data[i],
            i,
            heap.data[parent],
            parent,
        );
    }
}

/// An order over `u32` that counts how often it is consulted.
struct CountingOrder<'a>(&'a Cell<usize>);

impl TotalOrder for CountingOrder<'_> {
    type OrderedType = u32;

    fn cmp(&self, this: &u32, that: &u32) -> Ordering {
        self.0.set(self.0.get() + 1);
        this.cmp(that)
    }
}

/// Ranks numbers by their remainder, so that two heaps of the same type can
/// disagree about order.
#[derive(Clone, Copy, Debug)]
struct Modulo(u32);

impl TotalOrder for Modulo {
    type OrderedType = u32;

    fn cmp(&self, this: &u32, that: &u32) -> Ordering {
        (this % self.0).cmp(&(that % self.0)).then(this.cmp(that))
    }
}

#[test]
fn test_iterator() {
    let data = vec![5, 9, 3];
    let iterout = [3, 5, 9];
    let heap: BinaryHeap<_> = BinaryHeap::from(data);
    let mut i = 0;
    for el in &heap {
        assert!(iterout.contains(el));
        i += 1;
    }
    assert_eq!(i, 3);
    assert_eq!(heap.iter().len(), 3);
    assert_eq!(heap.peek(), Some(&3));
}

#[test]
fn test_iter_rev_cloned_collect() {
    let data = vec![5, 9, 3];
    let heap: BinaryHeap<_> = BinaryHeap::from(data.clone());

    let mut v: Vec<_> = heap.iter().rev().cloned().collect();
    v.sort();
    let mut expected = data;
    expected.sort();
    assert_eq!(v, expected);
}

#[test]
fn test_into_iter_collect() {
    let data = vec![5, 9, 3];
    let heap: BinaryHeap<_> = BinaryHeap::from(data);

    let mut v: Vec<_> = heap.into_iter().collect();
    v.sort();
    assert_eq!(v, [3, 5, 9]);
}

#[test]
fn test_into_iter_size_hint() {
    let data = vec![5, 9];
    let pq: BinaryHeap<_> = BinaryHeap::from(data);

    let mut it = pq.into_iter();

    assert_eq!(it.size_hint(), (2, Some(2)));
    assert!(it.next().is_some());

    assert_eq!(it.size_hint(), (1, Some(1)));
    assert!(it.next().is_some());

    assert_eq!(it.size_hint(), (0, Some(0)));
    assert_eq!(it.next(), None);
    assert!(it.is_empty());
}

#[test]
fn test_into_iter_sorted_collect() {
    let heap: BinaryHeap<_> = BinaryHeap::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let it = heap.into_iter_sorted();
    assert_eq!(it.len(), 13);
    let sorted: Vec<_> = it.collect();
    assert_eq!(sorted, [0, 1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_drain_sorted_collect() {
    let mut heap: BinaryHeap<_> = BinaryHeap::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let it = heap.drain_sorted();
    let sorted: Vec<_> = it.collect();
    assert_eq!(sorted, [0, 1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(heap.is_empty());
}

#[test]
fn test_drain_sorted_drop_clears_rest() {
    let mut heap: BinaryHeap<_> = BinaryHeap::from(vec![5, 1, 4, 2, 3]);
    let mut it = heap.drain_sorted();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.size_hint(), (4, Some(4)));
    drop(it);
    assert!(heap.is_empty());
}

#[test]
fn test_drain() {
    let mut heap: BinaryHeap<_> = BinaryHeap::from_iter(0..10);

    assert_eq!(heap.drain().count(), 10);
    assert!(heap.is_empty());
}

#[test]
fn test_peek_and_pop() {
    let data = vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1];
    let mut sorted = data.clone();
    sorted.sort();
    let mut heap: BinaryHeap<_> = BinaryHeap::from(data);
    for expected in sorted {
        assert_eq!(heap.peek(), Some(&expected));
        assert_eq!(heap.pop(), Some(expected));
        check_heap(&heap);
    }
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_full_drain_descending() {
    let mut heap = max_heap();
    for x in [1, 2, 3, 7, 17, 19, 25, 36, 100] {
        heap.push(x);
        check_heap(&heap);
    }

    let mut drained = Vec::new();
    while let Some(x) = heap.pop() {
        drained.push(x);
    }
    assert_eq!(drained, [100, 36, 25, 19, 17, 7, 3, 2, 1]);
}

#[test]
fn test_push_then_drain_scenario() {
    let mut heap = BinaryHeap::new(by_fn(|a: &i32, b: &i32| a.cmp(b)));

    heap.push(100);
    for i in 0..10 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 11);
    check_heap(&heap);

    let mut values = heap.values();
    values.sort();
    assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 100]);

    for i in 0..10 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert_eq!(heap.peek(), Some(&100));

    heap.push_many([10, 20, 30]);
    for i in 1..=3 {
        assert_eq!(heap.pop(), Some(i * 10));
    }

    heap.push_many([10, 20]);
    assert_eq!(heap.pop_many(4), Some(vec![10, 20, 100]));
    assert!(heap.is_empty());
}

#[test]
fn test_build_and_reset() {
    let values: Vec<i32> = (0..100).map(|i| if i <= 50 { i } else { 100 - i }).collect();

    let mut heap = BinaryHeap::from_slice(&values, OrdTotalOrder::<i32>::default());
    assert_eq!(heap.len(), 100);
    check_heap(&heap);

    assert_eq!(heap.pop(), Some(0));
    for i in 1..50 {
        assert_eq!(heap.pop(), Some(i));
        assert_eq!(heap.pop(), Some(i));
    }
    assert_eq!(heap.len(), 1);

    let capacity = heap.capacity();
    heap.clear();
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.capacity(), capacity);
}

#[test]
fn test_build_replaces_contents() {
    let mut heap = max_heap();
    heap.push_many([1000, 2000, 3000, 4000]);
    let capacity = heap.capacity();

    heap.build([5, 1, 8]);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.capacity(), capacity);
    check_heap(&heap);
    assert_eq!(heap.into_sorted_vec(), [8, 5, 1]);
}

#[test]
fn test_build_panicking_iterator_leaves_a_heap() {
    let mut heap = max_heap();
    heap.push_many([50, 60]);

    let built = catch_unwind(AssertUnwindSafe(|| {
        heap.build((0..10).map(|x| if x == 9 { panic!() } else { x }));
    }));
    assert!(built.is_err());

    assert_eq!(heap.len(), 9);
    check_heap(&heap);
    assert_eq!(heap.into_sorted_vec(), [8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_build_comparison_count() {
    let mut rng = DeterministicRng::new();
    let inputs: [Vec<u32>; 3] = [
        (0..10_000).map(|_| rng.next()).collect(),
        (0..10_000).collect(),
        (0..10_000).rev().collect(),
    ];

    for input in inputs {
        let n = input.len();
        let calls = Cell::new(0);
        let mut heap = BinaryHeap::new(CountingOrder(&calls));
        heap.build(input);

        assert_eq!(heap.len(), n);
        assert!(calls.get() <= 2 * n, "{} comparisons to build {} items", calls.get(), n);
        check_heap(&heap);
    }
}

#[test]
fn test_from_vec_comparison_count() {
    let calls = Cell::new(0);
    let heap = BinaryHeap::from_vec((0..4096).rev().collect(), CountingOrder(&calls));
    assert!(calls.get() <= 2 * 4096);
    assert_eq!(heap.peek(), Some(&0));
}

#[test]
fn test_empty_heap_signals_absence() {
    let mut heap = max_heap();
    for _ in 0..3 {
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop_many(100), None);
        assert_eq!(heap.pop_many(0), None);
        assert!(heap.peek_mut().is_none());
        assert_eq!(heap.len(), 0);
    }
}

#[test]
fn test_pop_many() {
    let mut heap = max_heap();
    heap.push_many([10, 20]);
    assert_eq!(heap.pop_many(4), Some(vec![20, 10]));
    assert!(heap.is_empty());

    heap.push_many([3, 1, 4, 1, 5, 9, 2, 6]);
    assert_eq!(heap.pop_many(0), Some(vec![]));
    assert_eq!(heap.len(), 8);
    assert_eq!(heap.pop_many(3), Some(vec![9, 6, 5]));
    check_heap(&heap);
    assert_eq!(heap.pop_many(5), Some(vec![4, 3, 2, 1, 1]));
    assert_eq!(heap.pop_many(1), None);
}

#[test]
fn test_size_accounting() {
    let mut rng = test_rng();
    let mut heap: BinaryHeap<u8> = BinaryHeap::default();
    let mut expected = 0;

    for _ in 0..1000 {
        if rng.gen::<bool>() {
            heap.push(rng.gen());
            expected += 1;
        } else if heap.pop().is_some() {
            expected -= 1;
        }
        assert_eq!(heap.len(), expected);
    }
}

#[test]
fn test_random_operations_match_sorted_model() {
    let mut rng = test_rng();
    let mut heap = max_heap();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2000 {
        match rng.gen_range(0..5) {
            0 | 1 => {
                let x = rng.gen_range(-50..50);
                heap.push(x);
                model.push(x);
            }
            2 => {
                model.sort();
                assert_eq!(heap.pop(), model.pop());
            }
            3 => {
                let k = rng.gen_range(0..4);
                if model.is_empty() {
                    assert_eq!(heap.pop_many(k), None);
                } else {
                    model.sort();
                    let expected: Vec<_> = model.iter().rev().take(k).copied().collect();
                    model.truncate(model.len() - expected.len());
                    assert_eq!(heap.pop_many(k), Some(expected));
                }
            }
            _ => {
                let extra: Vec<i32> = (0..rng.gen_range(0..8)).map(|_| rng.gen_range(-50..50)).collect();
                heap.push_many(extra.iter().copied());
                model.extend(extra);
            }
        }
        check_heap(&heap);
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek(), model.iter().max());
    }
}

#[test]
fn test_ties_pop_together() {
    let mut heap = BinaryHeap::new(by_fn(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0)));
    heap.push_many([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
    check_heap(&heap);

    let keys: Vec<u8> = heap.into_iter_sorted().map(|(k, _)| k).collect();
    assert_eq!(keys, [0, 1, 1, 2, 2]);
}

#[test]
fn test_peek_mut() {
    let data = vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1];
    let mut heap = BinaryHeap::from_vec(data, Reversed(OrdTotalOrder::<i32>::default()));
    assert_eq!(heap.peek(), Some(&10));
    {
        let mut top = heap.peek_mut().unwrap();
        assert_eq!(*top, 10);
        *top -= 2;
    }
    assert_eq!(heap.peek(), Some(&9));
    check_heap(&heap);
}

#[test]
fn test_peek_mut_leek() {
    let data = vec![4, 2, 7];
    let mut heap = BinaryHeap::from_vec(data, Reversed(OrdTotalOrder::<i32>::default()));
    let mut max = heap.peek_mut().unwrap();
    *max = -1;

    // The guard is leaked, so the top is left out of place rather than
    // anything being lost.
    core::mem::forget(max);
    assert_eq!(heap.len(), 3);

    let mut values = heap.values();
    values.sort();
    assert_eq!(values, [-1, 2, 4]);
}

#[test]
fn test_peek_mut_pop() {
    let data = vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1];
    let mut heap = BinaryHeap::from_vec(data, Reversed(OrdTotalOrder::<i32>::default()));
    assert_eq!(heap.peek(), Some(&10));
    {
        let mut top = heap.peek_mut().unwrap();
        *top += 100;
        assert_eq!(PeekMut::pop(top), 110);
    }
    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.len(), 12);
    check_heap(&heap);
}

#[test]
fn test_push_unique() {
    let mut heap: BinaryHeap<Box<i32>> = BinaryHeap::from(vec![Box::new(2), Box::new(4), Box::new(9)]);
    assert_eq!(heap.len(), 3);
    assert_eq!(**heap.peek().unwrap(), 2);
    heap.push(Box::new(11));
    assert_eq!(heap.len(), 4);
    assert_eq!(**heap.peek().unwrap(), 2);
    heap.push(Box::new(1));
    assert_eq!(heap.len(), 5);
    assert_eq!(**heap.peek().unwrap(), 1);
    check_heap(&heap);
}

#[test]
fn test_values_is_a_snapshot() {
    let mut heap: BinaryHeap<_> = BinaryHeap::from([3, 1, 2]);
    let mut snapshot = heap.values();
    snapshot.clear();
    snapshot.push(-7);

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop(), Some(1));
}

#[test]
fn test_to_vec() {
    fn check_to_vec(mut data: Vec<i32>) {
        let heap: BinaryHeap<_> = BinaryHeap::from(data.clone());
        let mut v = heap.clone().into_vec();
        v.sort();
        data.sort();

        assert_eq!(v, data);
        assert_eq!(heap.into_sorted_vec(), data);
    }
    check_to_vec(vec![]);
    check_to_vec(vec![5]);
    check_to_vec(vec![3, 2]);
    check_to_vec(vec![2, 3]);
    check_to_vec(vec![5, 1, 2]);
    check_to_vec(vec![1, 100, 2, 3]);
    check_to_vec(vec![1, 3, 5, 7, 9, 2, 4, 6, 8, 0]);
    check_to_vec(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    check_to_vec(vec![9, 11, 9, 9, 9, 9, 11, 2, 3, 4, 11, 9, 0, 0, 0, 0]);
    check_to_vec(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    check_to_vec(vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    check_to_vec(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 0, 1, 2]);
    check_to_vec(vec![5, 4, 3, 2, 1, 5, 4, 3, 2, 1, 5, 4, 3, 2, 1]);
}

#[test]
fn test_into_sorted_vec_under_custom_order() {
    let mut data: Vec<i32> = (0..200).collect();
    data.shuffle(&mut test_rng());

    let heap = BinaryHeap::from_vec(data, Reversed(OrdTotalOrder::<i32>::default()));
    let sorted = heap.into_sorted_vec();
    assert_eq!(sorted, (0..200).rev().collect::<Vec<_>>());
}

#[test]
fn test_from_vec_reuses_allocation() {
    let src: Vec<usize> = vec![3, 1, 2];
    let src_ptr = src.as_ptr();
    let heap: BinaryHeap<_> = BinaryHeap::from(src);
    assert_eq!(heap.as_slice().as_ptr(), src_ptr);
    assert_eq!(Vec::from(heap).as_ptr(), src_ptr);
}

#[test]
fn test_extend_ref() {
    let mut a: BinaryHeap<i32> = BinaryHeap::default();
    a.push(1);
    a.push(2);

    a.extend(&[3, 4, 5]);

    assert_eq!(a.len(), 5);
    assert_eq!(a.into_sorted_vec(), [1, 2, 3, 4, 5]);

    let mut a: BinaryHeap<i32> = BinaryHeap::default();
    a.push(1);
    a.push(2);
    let mut b: BinaryHeap<i32> = BinaryHeap::default();
    b.push(5);
    b.push(4);
    b.push(3);

    a.extend(&b);

    assert_eq!(a.len(), 5);
    assert_eq!(a.into_sorted_vec(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_append() {
    let mut a: BinaryHeap<_> = BinaryHeap::from(vec![-10, 1, 2, 3, 3]);
    let mut b: BinaryHeap<_> = BinaryHeap::from(vec![-20, 5, 43]);

    a.append(&mut b);

    assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    assert!(b.is_empty());
}

#[test]
fn test_append_to_empty() {
    let mut a: BinaryHeap<i32> = BinaryHeap::default();
    let mut b: BinaryHeap<_> = BinaryHeap::from(vec![-20, 5, 43]);

    a.append(&mut b);

    assert_eq!(a.into_sorted_vec(), [-20, 5, 43]);
    assert!(b.is_empty());
}

#[test]
fn test_append_keeps_own_order() {
    let mut small = BinaryHeap::from_vec(vec![20, 31], Modulo(10));
    let mut large = BinaryHeap::from_vec((0..50).collect(), Modulo(7));

    small.append(&mut large);
    assert!(large.is_empty());
    assert_eq!(small.len(), 52);
    check_heap(&small);
    assert_eq!(small.pop_many(7), Some(vec![0, 10, 20, 20, 30, 40, 1]));
}

#[test]
fn test_extend_specialization() {
    let mut a: BinaryHeap<_> = BinaryHeap::from(vec![-10, 1, 2, 3, 3]);
    let b: BinaryHeap<_> = BinaryHeap::from(vec![-20, 5, 43]);

    a.extend(b);

    assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
}

#[test]
fn test_retain() {
    let mut a: BinaryHeap<_> = BinaryHeap::from(vec![100, 10, 50, 1, 2, 20, 30]);
    a.retain(|&x| x != 2);
    check_heap(&a);
    assert_eq!(a.clone().into_sorted_vec(), [1, 10, 20, 30, 50, 100]);

    a.retain(|_| true);
    assert_eq!(a.clone().into_sorted_vec(), [1, 10, 20, 30, 50, 100]);

    a.retain(|&x| x < 50);
    assert_eq!(a.clone().into_sorted_vec(), [1, 10, 20, 30]);

    a.retain(|_| false);
    assert!(a.is_empty());
}

#[test]
fn test_retain_catch_unwind() {
    let mut heap: BinaryHeap<_> = BinaryHeap::from(vec![3, 1, 2]);

    // Removes the 3, then unwinds out of retain.
    let _ = catch_unwind(AssertUnwindSafe(|| {
        heap.retain(|e| {
            if *e == 2 {
                panic!();
            }
            *e != 3
        });
    }));

    // The remaining items are still a valid heap.
    check_heap(&heap);
    assert_eq!(heap.clone().into_sorted_vec(), [1, 2]);
}

#[test]
fn test_order_mut_rebuilds() {
    let mut heap = BinaryHeap::from_vec((0..30).collect(), Modulo(10));
    assert_eq!(heap.peek(), Some(&0));

    (*heap.order_mut()).0 = 7;
    check_heap(&heap);
    assert_eq!(heap.pop_many(5), Some(vec![0, 7, 14, 21, 28]));

    *heap.order_mut() = Modulo(3);
    check_heap(&heap);
    assert_eq!(heap.peek(), Some(&3));
    assert_eq!(heap.order().0, 3);
}

#[test]
fn test_clone_from_takes_order() {
    let source = BinaryHeap::from_vec(vec![5, 12, 3], Modulo(10));
    let mut target = BinaryHeap::new(Modulo(4));
    target.push(8);

    target.clone_from(&source);
    assert_eq!(target.order().0, 10);
    assert_eq!(target.into_sorted_vec(), [12, 3, 5]);
}

#[test]
fn test_debug() {
    let heap: BinaryHeap<_> = BinaryHeap::from([7]);
    assert_eq!(format!("{heap:?}"), "[7]");

    let mut heap = heap;
    let top = heap.peek_mut().unwrap();
    assert_eq!(format!("{top:?}"), "PeekMut(7)");
}

#[test]
fn test_with_capacity_is_only_a_hint() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(64, OrdTotalOrder::default());
    assert!(heap.capacity() >= 64);
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());

    heap.reserve_exact(100);
    assert!(heap.capacity() >= 100);
    heap.try_reserve(10).unwrap();
    heap.shrink_to_fit();
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_try_reserve_overflow() {
    let mut heap: BinaryHeap<u64> = BinaryHeap::default();
    assert!(heap.try_reserve(usize::MAX).is_err());
    assert!(heap.try_reserve_exact(usize::MAX).is_err());
    assert!(heap.is_empty());
}

#[test]
fn test_push_panicking_order_keeps_every_item() {
    let dummies: Vec<CrashTestDummy> = (0..10).map(CrashTestDummy::new).collect();

    let mut heap: BinaryHeap<_> = BinaryHeap::default();
    for d in &dummies[1..] {
        heap.push(d.spawn(Panic::Never));
    }
    assert!(dummies[1..].iter().all(|d| d.queried() > 0 || d.id == 1));

    let pushed = catch_unwind(AssertUnwindSafe(|| heap.push(dummies[0].spawn(Panic::InQuery))));
    assert!(pushed.is_err());
    assert_eq!(dummies[0].queried(), 1);

    assert_eq!(heap.len(), 10);
    assert!(dummies.iter().all(|d| d.dropped() == 0));
    let mut ids: Vec<usize> = heap.iter().map(|i| i.id()).collect();
    ids.sort();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());

    drop(heap);
    assert!(dummies.iter().all(|d| d.dropped() == 1));
}

#[test]
fn test_from_slice_clones() {
    let dummies: Vec<CrashTestDummy> = (0..5).map(CrashTestDummy::new).collect();
    let instances: Vec<_> = dummies.iter().rev().map(|d| d.spawn(Panic::Never)).collect();

    let mut heap: BinaryHeap<_> = BinaryHeap::from_slice(&instances, OrdTotalOrder::default());
    assert!(dummies.iter().all(|d| d.cloned() == 1));
    assert_eq!(heap.pop().map(|i| i.id()), Some(0));

    drop(instances);
    drop(heap);
    assert!(dummies.iter().all(|d| d.dropped() == 2));
}

#[test]
fn test_drain_sorted_panicking_drop() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let c = CrashTestDummy::new(2);
    let mut heap: BinaryHeap<_> = BinaryHeap::default();
    heap.push(a.spawn(Panic::Never));
    heap.push(b.spawn(Panic::InDrop));
    heap.push(c.spawn(Panic::Never));

    catch_unwind(AssertUnwindSafe(|| drop(heap.drain_sorted()))).unwrap_err();
    assert_eq!(a.dropped(), 1);
    assert_eq!(b.dropped(), 1);
    assert_eq!(c.dropped(), 1);
    assert!(heap.is_empty());
}
