mod overlaps;

pub use overlaps::*;
