use itertools::Itertools;
use std::fmt;
use std::ops::RangeInclusive;

/// Closed range of page numbers: `start`, `end` and every integer in between.
///
/// A page set with `start > end` is empty. It renders as nothing but still
/// takes part in merging as a boundary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSet {
    pub start: i64,
    pub end: i64,
}

impl PageSet {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Page numbers covered by the set, in ascending order.
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl fmt::Display for PageSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pages().format(" "))
    }
}
