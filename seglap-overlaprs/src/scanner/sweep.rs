use std::collections::BTreeSet;

use seglap_core::models::{OverlapRecord, SegmentId, SegmentStore};

use super::{Scanner, to_record};
use crate::boundary::BoundaryIndex;

///
/// Sweep-line scanner.
///
/// Points are visited left to right while a running set of active segments
/// is maintained: a segment enters once the sweep reaches its start and
/// leaves once the sweep has passed its end. The active set at point `i` is
/// exactly the membership of `i`.
///
/// A segment active at `i` also covers a later point `j` iff its end is at
/// least `j`, so the segments shared by `i` and `j` are the active ones that
/// reach `j`. That set only shrinks as `j` moves right, so the scan from `i`
/// stops as soon as fewer than `threshold` segments reach `j`. The cut-off is
/// the `threshold`-th largest end among the active segments.
///
/// Cost is O(S log S + P) for the sweep itself plus O(A) per emitted record,
/// A being the size of the active set.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepScanner;

impl<I: SegmentId> Scanner<I> for SweepScanner {
    fn scan(
        &self,
        store: &SegmentStore<I>,
        index: &BoundaryIndex,
        threshold: usize,
    ) -> Vec<OverlapRecord<I>> {
        let segments = store.segments();
        let points = index.points();

        let mut by_start: Vec<usize> = (0..segments.len()).collect();
        by_start.sort_by(|&a, &b| segments[a].start.total_cmp(&segments[b].start));
        let mut by_end: Vec<usize> = (0..segments.len()).collect();
        by_end.sort_by(|&a, &b| segments[a].end.total_cmp(&segments[b].end));

        // ordered by store position, which is identifier order
        let mut active: BTreeSet<usize> = BTreeSet::new();
        let mut entering = by_start.iter().peekable();
        let mut leaving = by_end.iter().peekable();

        let mut records = Vec::new();
        let mut ends: Vec<f64> = Vec::new();

        for (i, &point) in points.iter().enumerate() {
            while let Some(&&member) = entering.peek() {
                if segments[member].start > point {
                    break;
                }
                active.insert(member);
                entering.next();
            }
            while let Some(&&member) = leaving.peek() {
                if segments[member].end >= point {
                    break;
                }
                active.remove(&member);
                leaving.next();
            }

            if threshold == 0 || active.len() < threshold {
                continue;
            }

            ends.clear();
            ends.extend(active.iter().map(|&member| segments[member].end));
            let (_, &mut reach, _) =
                ends.select_nth_unstable_by(threshold - 1, |a, b| b.total_cmp(a));

            let mut shared: Vec<usize> = active.iter().copied().collect();
            for &later in points[i + 1..].iter().take_while(|&&later| later <= reach) {
                shared.retain(|&member| segments[member].end >= later);
                records.push(to_record(store, point, later, &shared));
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use seglap_core::models::Segment;

    fn scan(segments: Vec<(i64, f64, f64)>, threshold: usize) -> Vec<OverlapRecord<i64>> {
        let store = SegmentStore::new(
            segments
                .into_iter()
                .map(|(id, start, end)| Segment::new(id, start, end))
                .collect(),
        )
        .unwrap();
        let index = BoundaryIndex::build(&store);
        SweepScanner.scan(&store, &index, threshold)
    }

    #[rstest]
    fn test_two_segments() {
        let records = scan(vec![(1, 0.0, 10.0), (2, 5.0, 15.0)], 2);
        assert_eq!(records, vec![OverlapRecord::new(5.0, 10.0, vec![1, 2])]);
    }

    #[rstest]
    fn test_nested_triple() {
        let records = scan(vec![(1, 0.0, 100.0), (2, 50.0, 150.0), (3, 90.0, 95.0)], 2);

        // emitted in sweep order: by start, then by end
        assert_eq!(
            records,
            vec![
                OverlapRecord::new(50.0, 90.0, vec![1, 2]),
                OverlapRecord::new(50.0, 95.0, vec![1, 2]),
                OverlapRecord::new(50.0, 100.0, vec![1, 2]),
                OverlapRecord::new(90.0, 95.0, vec![1, 2, 3]),
                OverlapRecord::new(90.0, 100.0, vec![1, 2]),
                OverlapRecord::new(95.0, 100.0, vec![1, 2]),
            ]
        );
    }

    #[rstest]
    fn test_segment_ending_on_a_point_is_still_active_there() {
        let records = scan(vec![(1, 0.0, 10.0), (2, 10.0, 20.0), (3, 0.0, 20.0)], 2);
        assert_eq!(
            records,
            vec![
                OverlapRecord::new(0.0, 10.0, vec![1, 3]),
                OverlapRecord::new(10.0, 20.0, vec![2, 3]),
            ]
        );
    }

    #[rstest]
    fn test_duplicate_ids_are_counted_per_segment() {
        let records = scan(vec![(1, 0.0, 10.0), (1, 2.0, 8.0)], 2);
        assert_eq!(records, vec![OverlapRecord::new(2.0, 8.0, vec![1, 1])]);
    }

    #[rstest]
    fn test_disjoint_segments_do_not_overlap() {
        let records = scan(vec![(1, 0.0, 1.0), (2, 2.0, 3.0), (3, 4.0, 5.0)], 2);
        assert!(records.is_empty());
    }
}
