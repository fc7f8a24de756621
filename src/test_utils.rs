use std::{cmp::Ordering, fmt::Debug};

use proptest::prelude::*;

use crate::{
    node::{height, Node},
    Comparator,
};

pub(crate) const BOUND_MAX: usize = 20;

/// Generate arbitrary (potentially inverted!) `(lo, hi)` bounds from
/// [0..[`BOUND_MAX`]).
pub(crate) fn arbitrary_bounds() -> impl Strategy<Value = (usize, usize)> {
    (0..BOUND_MAX, 0..BOUND_MAX)
}

/// Generate `(lo, hi)` bounds that always satisfy `lo <= hi`.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = (usize, usize)> {
    arbitrary_bounds().prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// Assert the BST, AVL and interval tree properties of the subtree rooted at
/// `root`, returning the number of nodes it contains.
pub(crate) fn validate_tree_structure<K, V, C>(root: Option<&Node<K, V>>, cmp: &C) -> usize
where
    K: Debug,
    V: Debug,
    C: Comparator<K>,
{
    let root = match root {
        Some(v) => v,
        None => return 0,
    };

    // Invariant 1: an in-order walk visits strictly increasing lower bounds,
    // which holds iff every left subtree is strictly less than its parent and
    // every right subtree strictly greater.
    let mut in_order = vec![];
    collect_in_order(root, &mut in_order);
    for w in in_order.windows(2) {
        assert_eq!(
            cmp.compare(w[0].interval().lo(), w[1].interval().lo()),
            Ordering::Less,
            "out of order nodes {:?} and {:?}",
            w[0].interval(),
            w[1].interval(),
        );
    }

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 2: every stored interval is well-formed.
        assert!(!cmp.lt(n.interval().hi(), n.interval().lo()));

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height, where an absent child has height -1.
        let left_height = height(n.left());
        let right_height = height(n.right());
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            i16::from(n.height()),
            want_height,
            "expect node with interval {:?} to have height {}, has {}",
            n.interval(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height - right_height).abs();
        assert!(balance <= 1, "balance={balance}, node={n:?}");

        // Invariant 5: the subtree max of "n" must be equal to either the
        // largest of the two child subtree maxes, or its own upper bound.
        let mut want_max = n.interval().hi();
        for child in [n.left(), n.right()].into_iter().flatten() {
            if cmp.lt(want_max, child.subtree_max()) {
                want_max = child.subtree_max();
            }
        }
        assert_eq!(
            cmp.compare(want_max, n.subtree_max()),
            Ordering::Equal,
            "expect node with interval {:?} to have subtree max {:?}, has {:?}",
            n.interval(),
            want_max,
            n.subtree_max(),
        );
    }

    in_order.len()
}

fn collect_in_order<'a, K, V>(n: &'a Node<K, V>, out: &mut Vec<&'a Node<K, V>>) {
    if let Some(l) = n.left() {
        collect_in_order(l, out);
    }
    out.push(n);
    if let Some(r) = n.right() {
        collect_in_order(r, out);
    }
}
