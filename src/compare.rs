use std::cmp::Ordering;

/// A total order over the interval bounds `K` stored in an
/// [`IntervalMap`](crate::IntervalMap).
///
/// Every key comparison performed by the map is routed through the
/// comparator: tree descent, interval validation, overlap tests and the
/// subtree maximum bookkeeping.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a [`Comparator`]:
///
/// ```
/// use interval_avl_map::IntervalMap;
///
/// // Order bounds from largest to smallest.
/// let mut t = IntervalMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
///
/// // Under the reversed order, 9 "precedes" 3.
/// t.insert(9_u32, 3, "reversed").unwrap();
/// assert!(t.insert(3, 9, "inverted").is_err());
/// ```
pub trait Comparator<K> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if `a` is strictly less than `b`.
    fn lt(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns the greater of `a` and `b`, preferring `b` when they are equal.
    fn max<'a>(&self, a: &'a K, b: &'a K) -> &'a K {
        match self.compare(a, b) {
            Ordering::Greater => a,
            Ordering::Less | Ordering::Equal => b,
        }
    }
}

/// The [`Ord`] ordering of `K`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K> Comparator<K> for NaturalOrder
where
    K: Ord,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
