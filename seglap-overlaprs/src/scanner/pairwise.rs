use rayon::prelude::*;

use seglap_core::models::{OverlapRecord, SegmentId, SegmentStore};

use super::{Scanner, to_record};
use crate::boundary::BoundaryIndex;
use crate::membership::{Membership, intersect_sorted};

///
/// The literal formulation: resolve the membership of every point, then
/// intersect the memberships of every pair `(i, j)` with `i < j`.
///
/// With `parallel` set, both membership resolution and the outer loop over
/// `i` run on the rayon thread pool.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseScanner {
    pub parallel: bool,
}

impl PairwiseScanner {
    pub fn new(parallel: bool) -> Self {
        PairwiseScanner { parallel }
    }
}

impl<I: SegmentId> Scanner<I> for PairwiseScanner {
    fn scan(
        &self,
        store: &SegmentStore<I>,
        index: &BoundaryIndex,
        threshold: usize,
    ) -> Vec<OverlapRecord<I>> {
        let membership = Membership::resolve(store, index, self.parallel);
        let points = index.points();

        let scan_from = |i: usize| -> Vec<OverlapRecord<I>> {
            let at_start = membership.at(i);
            // nothing after i can share more than what covers i
            if at_start.len() < threshold {
                return Vec::new();
            }

            ((i + 1)..points.len())
                .filter_map(|j| {
                    let shared = intersect_sorted(at_start, membership.at(j));
                    (shared.len() >= threshold)
                        .then(|| to_record(store, points[i], points[j], &shared))
                })
                .collect()
        };

        if self.parallel {
            (0..points.len())
                .into_par_iter()
                .flat_map_iter(scan_from)
                .collect()
        } else {
            (0..points.len()).flat_map(scan_from).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use seglap_core::models::Segment;

    fn scan(segments: Vec<Segment<String>>, threshold: usize, parallel: bool) -> Vec<OverlapRecord<String>> {
        let store = SegmentStore::new(segments).unwrap();
        let index = BoundaryIndex::build(&store);
        PairwiseScanner::new(parallel).scan(&store, &index, threshold)
    }

    fn seg(id: &str, start: f64, end: f64) -> Segment<String> {
        Segment::new(id.to_string(), start, end)
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_two_segments(#[case] parallel: bool) {
        let records = scan(vec![seg("a", 0.0, 10.0), seg("b", 5.0, 15.0)], 2, parallel);
        assert_eq!(
            records,
            vec![OverlapRecord::new(5.0, 10.0, vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[rstest]
    fn test_single_segment_never_overlaps_itself() {
        let records = scan(vec![seg("a", 0.0, 10.0)], 2, false);
        assert!(records.is_empty());
    }

    #[rstest]
    fn test_threshold_one_reports_single_segments() {
        let records = scan(vec![seg("a", 0.0, 10.0)], 1, false);
        assert_eq!(records, vec![OverlapRecord::new(0.0, 10.0, vec!["a".to_string()])]);
    }

    #[rstest]
    fn test_touching_segments_share_their_common_point_only() {
        // the pair (10, 10) is a self pair and is never scanned
        let records = scan(vec![seg("a", 0.0, 10.0), seg("b", 10.0, 20.0)], 2, false);
        assert!(records.is_empty());
    }
}
