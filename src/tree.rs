use log::debug;

use crate::{
    interval::Interval,
    iter::Overlaps,
    node::{self, Node},
    Comparator, Error, NaturalOrder,
};

/// A map of half-open intervals `[lo, hi)` to values of type `V`, stored in an
/// AVL balanced binary search tree ordered by the lower bound `lo`.
///
/// Every node caches the largest upper bound in its subtree, allowing
/// [`IntervalMap::find()`] and [`IntervalMap::overlaps()`] to skip subtrees
/// that cannot contain an overlapping interval.
///
/// Lower bounds are unique: inserting an interval with a lower bound already
/// present in the map replaces the value of the existing entry.
///
/// Bounds are ordered by the comparator `C`, which defaults to the [`Ord`]
/// implementation of `K`.
///
/// ```
/// use interval_avl_map::IntervalMap;
///
/// let mut t = IntervalMap::new();
///
/// t.insert(15, 20, "a").unwrap();
/// t.insert(10, 30, "b").unwrap();
/// t.insert(5, 6, "c").unwrap();
///
/// // Some interval overlapping [14, 16) is found.
/// let n = t.find(&14, &16).unwrap();
/// assert!(*n.interval().lo() < 16 && 14 < *n.interval().hi());
///
/// // [5, 6) ends where [6, 7) begins.
/// assert!(t.find(&6, &7).is_none());
///
/// // Inverted intervals are rejected.
/// assert!(t.insert(9, 8, "d").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IntervalMap<K, V, C = NaturalOrder> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
    cmp: C,
}

impl<K, V, C> Default for IntervalMap<K, V, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord,
{
    /// Construct an empty map ordering bounds by their [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V, C> IntervalMap<K, V, C> {
    /// Construct an empty map that orders bounds with `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The comparator ordering the bounds of this map.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The number of intervals stored in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree, where a single node has height 0 and an empty
    /// map has height -1.
    pub fn height(&self) -> i16 {
        node::height(self.root.as_deref())
    }

    /// Remove all intervals from the map.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K, V, C> IntervalMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Insert the half-open interval `[lo, hi)` mapped to `value`.
    ///
    /// Returns `Ok(None)` if no interval with a lower bound of `lo` was
    /// present. Otherwise the existing entry's value is replaced and the old
    /// value is returned. The existing entry's upper bound is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] without modifying the map if `hi`
    /// is ordered before `lo`.
    pub fn insert(&mut self, lo: K, hi: K, value: V) -> Result<Option<V>, Error>
    where
        K: Clone,
    {
        let interval = Interval::new(lo, hi, &self.cmp).inspect_err(|_| {
            debug!("rejecting insert of inverted interval");
        })?;

        let replaced = node::insert(&mut self.root, interval, value, &self.cmp);
        if replaced.is_none() {
            self.len += 1;
        }

        Ok(replaced)
    }

    /// Return a node holding an interval that overlaps the half-open query
    /// `[lo, hi)`, if any.
    ///
    /// At most one node is returned, and it is not necessarily the overlapping
    /// interval with the lowest bound, nor the shortest. The search visits a
    /// single root-to-leaf path, and is guaranteed to return a match whenever
    /// one exists. Use [`IntervalMap::overlaps()`] to visit every overlapping
    /// interval.
    pub fn find(&self, lo: &K, hi: &K) -> Option<&Node<K, V>> {
        node::find(self.root.as_deref(), lo, hi, &self.cmp)
    }

    /// Return an iterator of all nodes holding intervals that overlap the
    /// half-open query `[lo, hi)`, in ascending lower bound order.
    pub fn overlaps<'a>(&'a self, lo: &'a K, hi: &'a K) -> Overlaps<'a, K, V, C> {
        Overlaps::new(self.root.as_deref(), lo, hi, &self.cmp)
    }

    /// Remove the interval with a lower bound of `lo`, returning its value.
    ///
    /// Removing a lower bound that is not in the map is a no-op.
    pub fn remove(&mut self, lo: &K) -> Option<V>
    where
        K: Clone,
    {
        let removed = node::remove(&mut self.root, lo, &self.cmp)?;
        self.len -= 1;
        Some(removed)
    }

    /// Return the value of the interval with a lower bound of `lo`.
    pub fn get(&self, lo: &K) -> Option<&V> {
        node::get(self.root.as_deref(), lo, &self.cmp).map(|v| v.value())
    }

    /// Return a mutable reference to the value of the interval with a lower
    /// bound of `lo`.
    pub fn get_mut(&mut self, lo: &K) -> Option<&mut V> {
        node::get_mut(self.root.as_deref_mut(), lo, &self.cmp).map(|v| v.value_mut())
    }

    /// Returns true if the map holds an interval with a lower bound of `lo`.
    pub fn contains_key(&self, lo: &K) -> bool {
        self.get(lo).is_some()
    }
}
