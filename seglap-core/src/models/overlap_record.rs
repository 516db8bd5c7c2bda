use super::SegmentId;

///
/// One overlap span: the stretch between two boundary points together with
/// the segments that cover both of them.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapRecord<I: SegmentId> {
    pub start: f64,
    pub end: f64,
    pub length: f64,
    pub segment_count: usize,
    pub segments: Vec<I>,
}

impl<I: SegmentId> OverlapRecord<I> {
    /// Build a record from its bounds and the (already sorted) shared segments.
    pub fn new(start: f64, end: f64, segments: Vec<I>) -> Self {
        OverlapRecord {
            start,
            end,
            length: end - start,
            segment_count: segments.len(),
            segments,
        }
    }
}
