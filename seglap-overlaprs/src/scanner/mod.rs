use std::fmt::{self, Display};
use std::str::FromStr;

use seglap_core::models::{OverlapRecord, SegmentId, SegmentStore};

use crate::boundary::BoundaryIndex;

pub mod pairwise;
pub mod sweep;

pub use self::pairwise::PairwiseScanner;
pub use self::sweep::SweepScanner;

///
/// Finds every pair of boundary points shared by at least `threshold`
/// segments.
///
/// Implementations only differ in cost. For the same store, index and
/// threshold they return the same set of records, in no particular order.
/// `threshold` is at least 1, [crate::CalculateOptions::validate] enforces it.
///
pub trait Scanner<I: SegmentId>: Send + Sync {
    fn scan(
        &self,
        store: &SegmentStore<I>,
        index: &BoundaryIndex,
        threshold: usize,
    ) -> Vec<OverlapRecord<I>>;
}

/// The scan strategy to use.
///
/// # Variants
///
/// * `Pairwise` - Compare the membership of every pair of points. O(P²) pairs
///   on top of O(P·S) membership resolution.
/// * `Sweep` - Walk the points once with a running active set and only visit
///   pairs that produce a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScannerType {
    Pairwise,
    #[default]
    Sweep,
}

impl ScannerType {
    pub fn build<I: SegmentId>(self, parallel: bool) -> Box<dyn Scanner<I>> {
        match self {
            ScannerType::Pairwise => Box::new(PairwiseScanner::new(parallel)),
            ScannerType::Sweep => Box::new(SweepScanner),
        }
    }
}

impl FromStr for ScannerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pairwise" => Ok(ScannerType::Pairwise),
            "sweep" => Ok(ScannerType::Sweep),
            _ => Err(format!(
                "Invalid scanner type: {}. Valid options are 'pairwise' or 'sweep'",
                s
            )),
        }
    }
}

impl Display for ScannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScannerType::Pairwise => write!(f, "pairwise"),
            ScannerType::Sweep => write!(f, "sweep"),
        }
    }
}

/// Turn store positions shared by two points into an overlap record.
pub(crate) fn to_record<I: SegmentId>(
    store: &SegmentStore<I>,
    start: f64,
    end: f64,
    shared: &[usize],
) -> OverlapRecord<I> {
    let segments = shared
        .iter()
        .filter_map(|&member| store.get(member))
        .map(|segment| segment.id.clone())
        .collect();
    OverlapRecord::new(start, end, segments)
}
