use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// Anything that can label a segment.
///
/// Identifiers must be totally ordered so membership sets and the segment
/// lists of overlap records come out sorted: numerically for integer ids,
/// lexicographically for string ids.
pub trait SegmentId: Ord + Clone + Debug + Display + FromStr + Send + Sync {}

impl<T> SegmentId for T where T: Ord + Clone + Debug + Display + FromStr + Send + Sync {}

///
/// Segment struct, a closed interval `[start, end]` with an identifier.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<I: SegmentId> {
    pub id: I,
    pub start: f64,
    pub end: f64,
}

impl<I: SegmentId> Segment<I> {
    pub fn new(id: I, start: f64, end: f64) -> Self {
        Segment { id, start, end }
    }

    ///
    /// Get the length of the segment
    ///
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Check whether a point lies within the segment, both ends inclusive.
    #[inline]
    pub fn covers(&self, point: f64) -> bool {
        point >= self.start && point <= self.end
    }
}

impl<I: SegmentId> Display for Segment<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.id, self.start, self.end)
    }
}
