use std::ops::Range;

use crate::{Comparator, Error, NaturalOrder};

/// A validated half-open interval `[lo, hi)`.
///
/// An [`Interval`] always satisfies `lo <= hi` under the comparator it was
/// constructed with. Empty intervals (`lo == hi`) are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<K> {
    lo: K,
    hi: K,
}

impl<K> Interval<K> {
    /// Construct the interval `[lo, hi)`, ordering the bounds with `cmp`.
    ///
    /// Returns [`Error::InvalidInterval`] if `hi` is ordered before `lo`.
    pub fn new<C>(lo: K, hi: K, cmp: &C) -> Result<Self, Error>
    where
        C: Comparator<K>,
    {
        if cmp.lt(&hi, &lo) {
            return Err(Error::InvalidInterval);
        }
        Ok(Self { lo, hi })
    }

    /// The inclusive lower bound.
    pub fn lo(&self) -> &K {
        &self.lo
    }

    /// The exclusive upper bound.
    pub fn hi(&self) -> &K {
        &self.hi
    }

    /// Returns true if this interval overlaps the half-open query `[lo, hi)`.
    ///
    /// Intervals that only touch at an endpoint do not overlap: `[5, 6)` and
    /// `[6, 7)` share no point.
    pub fn overlaps<C>(&self, lo: &K, hi: &K, cmp: &C) -> bool
    where
        C: Comparator<K>,
    {
        cmp.lt(&self.lo, hi) && cmp.lt(lo, &self.hi)
    }

    /// Split this interval into its `(lo, hi)` bounds.
    pub fn into_bounds(self) -> (K, K) {
        (self.lo, self.hi)
    }
}

impl<K> TryFrom<Range<K>> for Interval<K>
where
    K: Ord,
{
    type Error = Error;

    fn try_from(value: Range<K>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end, &NaturalOrder)
    }
}

impl<K> PartialEq<Range<K>> for Interval<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Range<K>) -> bool {
        self.lo == other.start && self.hi == other.end
    }
}
