//! An interval map backed by an AVL balanced binary search tree, augmented
//! with the maximum upper bound of each subtree.
//!
//! [`IntervalMap`] maps half-open intervals `[lo, hi)` to values. Intervals
//! are ordered by their lower bound, which is unique within a map. The cached
//! subtree maximum lets overlap queries skip every subtree that ends before
//! the query begins:
//!
//! * [`IntervalMap::find()`] returns *an* overlapping interval, walking a
//!   single root-to-leaf path.
//! * [`IntervalMap::overlaps()`] yields *every* overlapping interval.
//!
//! Bounds are compared through a [`Comparator`], which defaults to the [`Ord`]
//! implementation of the bound type.
//!
//! ```
//! use interval_avl_map::IntervalMap;
//!
//! let mut t = IntervalMap::new();
//! t.insert(15, 20, "a").unwrap();
//! t.insert(10, 30, "b").unwrap();
//! t.insert(30, 40, "c").unwrap();
//!
//! let all = t.overlaps(&18, &32).map(|n| *n.value()).collect::<Vec<_>>();
//! assert_eq!(all, ["b", "a", "c"]);
//!
//! assert_eq!(t.remove(&10), Some("b"));
//! assert!(t.find(&25, &30).is_none());
//! ```

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs, missing_debug_implementations, unused_must_use)]

mod compare;
mod error;
mod interval;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use compare::{Comparator, NaturalOrder};
pub use error::Error;
pub use interval::Interval;
pub use iter::Overlaps;
pub use node::Node;
pub use tree::IntervalMap;
