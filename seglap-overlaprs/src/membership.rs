use std::cmp::Ordering;

use rayon::prelude::*;

use seglap_core::models::{SegmentId, SegmentStore};

use crate::boundary::BoundaryIndex;

///
/// For every point of a [BoundaryIndex], the segments whose closed interval
/// covers it.
///
/// Members are stored as positions into the [SegmentStore]. The store is
/// sorted by identifier, so each member list is in identifier order as well.
///
/// Resolution scans every segment for every point: O(P·S), the dominant cost
/// of the pairwise scan.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    members: Vec<Vec<usize>>,
}

impl Membership {
    ///
    /// Resolve the membership of every point in the index.
    ///
    /// # Arguments
    /// - store: the segments to test against each point
    /// - index: the boundary points
    /// - parallel: spread the points over the rayon thread pool
    ///
    pub fn resolve<I: SegmentId>(
        store: &SegmentStore<I>,
        index: &BoundaryIndex,
        parallel: bool,
    ) -> Self {
        let members_at = |point: &f64| -> Vec<usize> {
            store
                .iter()
                .enumerate()
                .filter(|(_, segment)| segment.covers(*point))
                .map(|(position, _)| position)
                .collect()
        };

        let members = if parallel {
            index.points().par_iter().map(members_at).collect()
        } else {
            index.points().iter().map(members_at).collect()
        };

        Membership { members }
    }

    /// Store positions of the segments covering the point at `position`.
    pub fn at(&self, position: usize) -> &[usize] {
        self.members.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Identifiers of the segments covering the point at `position`, in order.
    pub fn ids<'a, I: SegmentId>(&self, store: &'a SegmentStore<I>, position: usize) -> Vec<&'a I> {
        self.at(position)
            .iter()
            .filter_map(|&member| store.get(member).map(|segment| &segment.id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

///
/// Intersect two ascending lists with a single ordered merge.
///
pub fn intersect_sorted(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut shared = Vec::with_capacity(left.len().min(right.len()));
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        match left[l].cmp(&right[r]) {
            Ordering::Less => l += 1,
            Ordering::Greater => r += 1,
            Ordering::Equal => {
                shared.push(left[l]);
                l += 1;
                r += 1;
            }
        }
    }

    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use seglap_core::models::Segment;

    #[fixture]
    fn nested() -> SegmentStore<i64> {
        SegmentStore::new(vec![
            Segment::new(3, 90.0, 95.0),
            Segment::new(1, 0.0, 100.0),
            Segment::new(2, 50.0, 150.0),
        ])
        .unwrap()
    }

    #[rstest]
    fn test_resolve_nested(nested: SegmentStore<i64>) {
        let index = BoundaryIndex::build(&nested);
        let membership = Membership::resolve(&nested, &index, false);

        let ids: Vec<Vec<i64>> = (0..index.len())
            .map(|p| membership.ids(&nested, p).into_iter().copied().collect())
            .collect();

        // points: 0, 50, 90, 95, 100, 150
        assert_eq!(
            ids,
            vec![
                vec![1],
                vec![1, 2],
                vec![1, 2, 3],
                vec![1, 2, 3],
                vec![1, 2],
                vec![2],
            ]
        );
    }

    #[rstest]
    fn test_parallel_resolution_matches_sequential(nested: SegmentStore<i64>) {
        let index = BoundaryIndex::build(&nested);
        assert_eq!(
            Membership::resolve(&nested, &index, true),
            Membership::resolve(&nested, &index, false)
        );
    }

    #[rstest]
    fn test_string_ids_are_lexicographic() {
        let store = SegmentStore::new(vec![
            Segment::new("foo".to_string(), 50.0, 150.0),
            Segment::new("bar".to_string(), 100.0, 200.0),
        ])
        .unwrap();
        let index = BoundaryIndex::build(&store);
        let membership = Membership::resolve(&store, &index, false);

        let position = index.position(100.0).unwrap();
        assert_eq!(membership.ids(&store, position), vec!["bar", "foo"]);
    }

    #[rstest]
    fn test_at_out_of_range_is_empty(nested: SegmentStore<i64>) {
        let index = BoundaryIndex::build(&nested);
        let membership = Membership::resolve(&nested, &index, false);
        assert!(membership.at(100).is_empty());
    }

    #[rstest]
    #[case(&[0, 1, 2], &[1, 2, 3], &[1, 2])]
    #[case(&[0, 2, 4], &[1, 3, 5], &[])]
    #[case(&[], &[1, 2], &[])]
    #[case(&[5], &[5], &[5])]
    fn test_intersect_sorted(#[case] left: &[usize], #[case] right: &[usize], #[case] expected: &[usize]) {
        assert_eq!(intersect_sorted(left, right), expected.to_vec());
    }
}
