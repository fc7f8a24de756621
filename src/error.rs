use thiserror::Error;

/// Errors returned by [`IntervalMap`](crate::IntervalMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The upper bound of an interval is ordered before its lower bound.
    #[error("interval upper bound precedes its lower bound")]
    InvalidInterval,
}
