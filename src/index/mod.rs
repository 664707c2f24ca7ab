mod interval_rtree;

pub use interval_rtree::{IntervalRTree, DEFAULT_DEGREE};
