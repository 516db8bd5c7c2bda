use seglap_core::models::{OverlapRecord, SegmentId};

///
/// Collects overlap records and hands them back in a fixed order: ascending
/// by start, then by end.
///
/// Scanners produce records in whatever order suits them (and in no
/// predictable order when running in parallel), so this is the one place the
/// output order is decided.
///
#[derive(Debug, Clone)]
pub struct ResultAssembler<I: SegmentId> {
    records: Vec<OverlapRecord<I>>,
}

impl<I: SegmentId> Default for ResultAssembler<I> {
    fn default() -> Self {
        ResultAssembler {
            records: Vec::new(),
        }
    }
}

impl<I: SegmentId> ResultAssembler<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OverlapRecord<I>) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort and return the collected records.
    pub fn finish(mut self) -> Vec<OverlapRecord<I>> {
        self.records.sort_by(|a, b| {
            a.start
                .total_cmp(&b.start)
                .then_with(|| a.end.total_cmp(&b.end))
                .then_with(|| a.segments.cmp(&b.segments))
        });
        self.records
    }
}

impl<I: SegmentId> Extend<OverlapRecord<I>> for ResultAssembler<I> {
    fn extend<T: IntoIterator<Item = OverlapRecord<I>>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl<I: SegmentId> FromIterator<OverlapRecord<I>> for ResultAssembler<I> {
    fn from_iter<T: IntoIterator<Item = OverlapRecord<I>>>(iter: T) -> Self {
        ResultAssembler {
            records: iter.into_iter().collect(),
        }
    }
}
