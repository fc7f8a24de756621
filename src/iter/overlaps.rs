use crate::{node::Node, Comparator};

/// An [`Iterator`] yielding every [`Node`] whose interval overlaps a half-open
/// query range, in ascending lower bound order.
///
/// Constructed by [`IntervalMap::overlaps()`](crate::IntervalMap::overlaps).
#[derive(Debug)]
pub struct Overlaps<'a, K, V, C> {
    lo: &'a K,
    hi: &'a K,
    cmp: &'a C,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V, C> Overlaps<'a, K, V, C>
where
    C: Comparator<K>,
{
    pub(crate) fn new(root: Option<&'a Node<K, V>>, lo: &'a K, hi: &'a K, cmp: &'a C) -> Self {
        let mut this = Self {
            lo,
            hi,
            cmp,
            stack: vec![],
        };

        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    /// Stack `subtree_root` and its chain of left descendants, stopping at the
    /// first node whose subtree ends at or before the query's lower bound.
    fn push_subtree(&mut self, subtree_root: &'a Node<K, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            // Nothing below "v" reaches past `lo`.
            if !self.cmp.lt(self.lo, v.subtree_max()) {
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, K, V, C> Iterator for Overlaps<'a, K, V, C>
where
    C: Comparator<K>,
{
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            // Nodes are popped in ascending `lo` order, so once one starts at
            // or after `hi` so does everything still stacked.
            if !self.cmp.lt(v.interval().lo(), self.hi) {
                self.stack.clear();
                return None;
            }

            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            if v.interval().overlaps(self.lo, self.hi, self.cmp) {
                return Some(v);
            }
        }
    }
}
