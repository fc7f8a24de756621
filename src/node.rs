use std::{cmp::Ordering, mem};

use log::trace;

use crate::{interval::Interval, Comparator};

/// A node in the [`IntervalMap`](crate::IntervalMap) tree, holding one
/// interval and its value.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    /// Child nodes pointers.
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: K,

    interval: Interval<K>,
    value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(interval: Interval<K>, value: V) -> Self
    where
        K: Clone,
    {
        Self {
            subtree_max: interval.hi().clone(),
            interval,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The interval stored in this node.
    pub fn interval(&self) -> &Interval<K> {
        &self.interval
    }

    /// The value mapped to [`Node::interval()`].
    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// The largest upper bound of any interval in the subtree rooted at this
    /// node, including this node's own interval.
    pub fn subtree_max(&self) -> &K {
        &self.subtree_max
    }

    /// The height of the subtree rooted at this node. A leaf has height 0.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The left child, holding strictly lower intervals.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding strictly greater intervals.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Insert `interval` -> `value` into the subtree owned by `slot`, rebalancing
/// every node on the path back up.
///
/// If a node with an equal lower bound exists, only its value is replaced and
/// the old value returned. The stored interval is left unchanged.
pub(crate) fn insert<K, V, C>(
    slot: &mut Option<Box<Node<K, V>>>,
    interval: Interval<K>,
    value: V,
    cmp: &C,
) -> Option<V>
where
    K: Clone,
    C: Comparator<K>,
{
    let node = match slot {
        Some(v) => v,
        None => {
            *slot = Some(Box::new(Node::new(interval, value)));
            return None;
        }
    };

    let child = match cmp.compare(interval.lo(), node.interval.lo()) {
        Ordering::Less => &mut node.left,
        Ordering::Greater => &mut node.right,
        Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
    };

    let replaced = insert(child, interval, value, cmp);
    if replaced.is_some() {
        // The tree structure has not been modified, so it does not require
        // rebalancing.
        return replaced;
    }

    rebalance(node, cmp);
    None
}

/// Remove the node with a lower bound equal to `lo` from the subtree owned by
/// `slot`, returning its value.
pub(crate) fn remove<K, V, C>(slot: &mut Option<Box<Node<K, V>>>, lo: &K, cmp: &C) -> Option<V>
where
    K: Clone,
    C: Comparator<K>,
{
    let node = slot.as_mut()?;

    let child = match cmp.compare(lo, node.interval.lo()) {
        Ordering::Less => &mut node.left,
        Ordering::Greater => &mut node.right,
        Ordering::Equal => {
            let (removed, replacement) = unlink(slot.take()?, cmp);
            *slot = replacement;
            return Some(removed);
        }
    };

    let removed = remove(child, lo, cmp)?;

    // The subtree below "node" lost a node, which may have been the source of
    // this node's subtree max.
    rebalance(node, cmp);
    Some(removed)
}

/// Unlink `node` from the tree, returning its value and the subtree that
/// takes its place.
fn unlink<K, V, C>(mut node: Box<Node<K, V>>, cmp: &C) -> (V, Option<Box<Node<K, V>>>)
where
    K: Clone,
    C: Comparator<K>,
{
    let (left, right) = match (node.left.take(), node.right.take()) {
        // A leaf is dropped, leaving the parent's link empty.
        (None, None) => return (node.value, None),

        // A node with one child is replaced by that child.
        (Some(child), None) | (None, Some(child)) => return (node.value, Some(child)),

        (Some(left), Some(right)) => (left, right),
    };

    // The node has two children.
    //
    // Detach the in-order successor (the left-most node of "right") and move
    // its interval and value into "node", which stays in place. The
    // successor's own node is dropped.
    trace!("promoting in-order successor, height={}", node.height);

    let (successor, right) = take_min(right, cmp);
    debug_assert!(successor.left.is_none());
    debug_assert!(successor.right.is_none());

    let Node {
        interval, value, ..
    } = *successor;

    node.interval = interval;
    let old = mem::replace(&mut node.value, value);

    node.left = Some(left);
    node.right = right;
    rebalance(&mut node, cmp);

    (old, Some(node))
}

/// Detach the node holding the minimum lower bound from the subtree `root`.
///
/// Returns the detached node and the (rebalanced) remainder of the subtree.
/// The detached node has no children.
fn take_min<K, V, C>(
    mut root: Box<Node<K, V>>,
    cmp: &C,
) -> (Box<Node<K, V>>, Option<Box<Node<K, V>>>)
where
    K: Clone,
    C: Comparator<K>,
{
    match root.left.take() {
        None => {
            // "root" is the end of the left edge. Its right subtree (if any)
            // takes its place.
            let rest = root.right.take();
            (root, rest)
        }
        Some(left) => {
            let (min, rest) = take_min(left, cmp);
            root.left = rest;
            rebalance(&mut root, cmp);
            (min, Some(root))
        }
    }
}

/// Search the subtree rooted at `node` for any interval overlapping the
/// half-open query `[lo, hi)`.
///
/// The descent follows a single path: the left subtree is visited when its
/// subtree max exceeds `lo`, otherwise the right. When the left subtree can
/// reach the query but contains no overlap, no interval in the right subtree
/// can overlap either, so a match is always found when one exists. Which
/// match is returned depends on the tree shape.
pub(crate) fn find<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    lo: &K,
    hi: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: Comparator<K>,
{
    while let Some(n) = node {
        if n.interval.overlaps(lo, hi, cmp) {
            return Some(n);
        }

        node = match n.left() {
            Some(l) if cmp.lt(lo, l.subtree_max()) => Some(l),
            _ => n.right(),
        };
    }

    None
}

/// Locate the node with a lower bound equal to `lo`.
pub(crate) fn get<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    lo: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: Comparator<K>,
{
    while let Some(n) = node {
        node = match cmp.compare(lo, n.interval.lo()) {
            Ordering::Less => n.left(),
            Ordering::Greater => n.right(),
            Ordering::Equal => return Some(n),
        };
    }

    None
}

pub(crate) fn get_mut<'a, K, V, C>(
    mut node: Option<&'a mut Node<K, V>>,
    lo: &K,
    cmp: &C,
) -> Option<&'a mut Node<K, V>>
where
    C: Comparator<K>,
{
    while let Some(n) = node {
        node = match cmp.compare(lo, n.interval.lo()) {
            Ordering::Less => n.left.as_deref_mut(),
            Ordering::Greater => n.right.as_deref_mut(),
            Ordering::Equal => return Some(n),
        };
    }

    None
}

/// The height of the (possibly absent) subtree `n`, where an absent subtree
/// has a height of -1.
pub(crate) fn height<K, V>(n: Option<&Node<K, V>>) -> i16 {
    n.map(|v| i16::from(v.height)).unwrap_or(-1)
}

fn update_height<K, V>(n: &mut Node<K, V>) {
    let h = 1 + height(n.left()).max(height(n.right()));

    // Correctness: h is at least 0 (both children absent), and cannot exceed
    // u8::MAX for any tree that fits in memory.
    n.height = h as u8;
}

fn update_subtree_max<K, V, C>(n: &mut Node<K, V>, cmp: &C)
where
    K: Clone,
    C: Comparator<K>,
{
    let mut new_max = n.interval.hi();
    for child in [n.left(), n.right()].into_iter().flatten() {
        new_max = cmp.max(child.subtree_max(), new_max);
    }

    n.subtree_max = new_max.clone();
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<K, V>(n: &Node<K, V>) -> i16 {
    height(n.left()) - height(n.right())
}

/// Restore the AVL balance of the subtree rooted at `n` with at most two
/// rotations, then recompute the height and subtree max of the subtree root.
///
/// Both children of `n` must already be balanced and carry correct cached
/// heights and maxes.
fn rebalance<K, V, C>(n: &mut Box<Node<K, V>>, cmp: &C)
where
    K: Clone,
    C: Comparator<K>,
{
    match balance(n) {
        // Right-heavy
        (..=-2) => {
            if n.right().map_or(0, balance) >= 1 {
                if let Some(r) = n.right.as_mut() {
                    rotate_right(r, cmp);
                }
            }
            rotate_left(n, cmp);
        }
        // Left-heavy
        (2..) => {
            if n.left().map_or(0, balance) <= -1 {
                if let Some(l) = n.left.as_mut() {
                    rotate_left(l, cmp);
                }
            }
            rotate_right(n, cmp);
        }
        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    update_height(n);
    update_subtree_max(n, cmp);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A no-op if `x` has no right child.
fn rotate_left<K, V, C>(x: &mut Box<Node<K, V>>, cmp: &C)
where
    K: Clone,
    C: Comparator<K>,
{
    let Some(mut p) = x.right.take() else {
        return;
    };
    trace!("rotate left, height={}", x.height);

    std::mem::swap(x, &mut p);

    // "p" is now the old subtree root, and adopts the left subtree of the
    // pivot in place of the pivot itself.
    p.right = x.left.take();
    update_height(&mut p);
    update_subtree_max(&mut p, cmp);

    x.left = Some(p);
    update_height(x);
    update_subtree_max(x, cmp);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A no-op if `y` has no left child.
fn rotate_right<K, V, C>(y: &mut Box<Node<K, V>>, cmp: &C)
where
    K: Clone,
    C: Comparator<K>,
{
    let Some(mut p) = y.left.take() else {
        return;
    };
    trace!("rotate right, height={}", y.height);

    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);
    update_subtree_max(&mut p, cmp);

    y.right = Some(p);
    update_height(y);
    update_subtree_max(y, cmp);
}
