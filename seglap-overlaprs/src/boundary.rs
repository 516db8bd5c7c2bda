use seglap_core::models::{SegmentId, SegmentStore};

///
/// The sorted, de-duplicated set of every segment endpoint.
///
/// Points are compared by value, so two segments sharing an endpoint
/// contribute a single point. `-0.0` is folded into `0.0` before sorting.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryIndex {
    points: Vec<f64>,
}

impl BoundaryIndex {
    pub fn build<I: SegmentId>(store: &SegmentStore<I>) -> Self {
        let mut points: Vec<f64> = store
            .iter()
            .flat_map(|segment| [segment.start, segment.end])
            .map(|value| value + 0.0)
            .collect();

        points.sort_by(f64::total_cmp);
        points.dedup();

        BoundaryIndex { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.points.get(position).copied()
    }

    /// Find the position of a value in the index, if it is one of the points.
    pub fn position(&self, value: f64) -> Option<usize> {
        let value = value + 0.0;
        self.points
            .binary_search_by(|probe| probe.total_cmp(&value))
            .ok()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
