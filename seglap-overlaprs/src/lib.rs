//! Overlap detection over labeled numeric segments.
//!
//! Given a set of closed intervals, each with an identifier, this crate finds
//! every pair of interval endpoints that is covered by at least a configurable
//! number of the same segments, and reports the span between them together
//! with the sorted identifiers of the segments involved.
//!
//! The computation runs in stages, each consuming the whole output of the
//! previous one:
//!
//! 1. [SegmentStore] validates the input,
//! 2. [BoundaryIndex] collects the distinct endpoints,
//! 3. a [Scanner] pairs points up, either through the per-point
//!    [Membership] map ([PairwiseScanner]) or with a sweep line
//!    ([SweepScanner]),
//! 4. [ResultAssembler] puts the records in a fixed order.
//!
//! ## Quick Start
//!
//! ```rust
//! use seglap_core::models::RawRecord;
//! use seglap_overlaprs::{CalculateOptions, calculate};
//!
//! let records = vec![
//!     RawRecord::new(1, ["a", "0", "10"]),
//!     RawRecord::new(2, ["b", "5", "15"]),
//! ];
//!
//! let overlaps = calculate::<String, _>(records, &CalculateOptions::default()).unwrap();
//!
//! assert_eq!(overlaps.len(), 1);
//! assert_eq!(overlaps[0].start, 5.0);
//! assert_eq!(overlaps[0].end, 10.0);
//! assert_eq!(overlaps[0].segments, vec!["a", "b"]);
//! ```
//!
//! Nothing here performs I/O or keeps global state; concurrent calculations
//! over independent inputs never interact.

pub mod assembler;
pub mod boundary;
pub mod membership;
pub mod options;
pub mod scanner;

use log::debug;

use seglap_core::errors::{Result, SegmentError};
use seglap_core::models::{OverlapRecord, RawRecord, SegmentId, SegmentStore};

// re-exports
pub use self::assembler::ResultAssembler;
pub use self::boundary::BoundaryIndex;
pub use self::membership::Membership;
pub use self::options::CalculateOptions;
pub use self::scanner::{PairwiseScanner, Scanner, ScannerType, SweepScanner};

/// Constants used throughout the crate.
pub mod consts {
    pub const DEFAULT_MINIMUM_SHARED_SEGMENTS: usize = 2;
}

///
/// Parse raw records and compute their overlaps.
///
/// # Arguments
/// - records: pre-split input rows of `id, start, end`
/// - options: threshold and strategy for the calculation
///
/// All validation happens before any scanning and the first problem aborts
/// the whole calculation; there are no partial results.
///
pub fn calculate<I, R>(records: R, options: &CalculateOptions) -> Result<Vec<OverlapRecord<I>>>
where
    I: SegmentId,
    R: IntoIterator<Item = RawRecord>,
{
    options.validate()?;
    let store = SegmentStore::<I>::from_records(records)?;
    calculate_segments(&store, options)
}

///
/// Compute the overlaps of an already validated segment store.
///
pub fn calculate_segments<I: SegmentId>(
    store: &SegmentStore<I>,
    options: &CalculateOptions,
) -> Result<Vec<OverlapRecord<I>>> {
    options.validate()?;
    if store.is_empty() && options.require_segments {
        return Err(SegmentError::EmptyInput);
    }
    debug!("Number of segments: {}", store.len());

    let index = BoundaryIndex::build(store);
    debug!("Number of unique points: {}", index.len());

    let scanner = options.scanner.build::<I>(options.parallel);
    let assembler: ResultAssembler<I> = scanner
        .scan(store, &index, options.minimum_shared_segments)
        .into_iter()
        .collect();

    let overlaps = assembler.finish();
    debug!(
        "Found {} overlaps with the {} scanner (minimum shared segments: {})",
        overlaps.len(),
        options.scanner,
        options.minimum_shared_segments
    );

    Ok(overlaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn raw(rows: &[[&str; 3]]) -> Vec<RawRecord> {
        rows.iter()
            .enumerate()
            .map(|(i, fields)| RawRecord::new(i + 1, fields.iter().copied()))
            .collect()
    }

    #[rstest]
    fn test_empty_input_gives_no_records() {
        let overlaps = calculate::<String, _>(Vec::new(), &CalculateOptions::default()).unwrap();
        assert!(overlaps.is_empty());
    }

    #[rstest]
    fn test_empty_input_fails_when_segments_are_required() {
        let options = CalculateOptions::default().with_require_segments(true);
        let result = calculate::<String, _>(Vec::new(), &options);
        assert_eq!(result, Err(SegmentError::EmptyInput));
    }

    #[rstest]
    fn test_zero_threshold_is_rejected() {
        let options = CalculateOptions::default().with_minimum_shared_segments(0);
        let result = calculate::<i64, _>(raw(&[["1", "0", "1"]]), &options);
        assert_eq!(result, Err(SegmentError::InvalidThreshold(0)));
    }

    #[rstest]
    fn test_malformed_row_aborts_everything() {
        let result = calculate::<i64, _>(
            raw(&[["1", "0", "10"], ["2", "abc", "2"], ["3", "5", "15"]]),
            &CalculateOptions::default(),
        );
        assert!(matches!(
            result,
            Err(SegmentError::FieldParseError { column: 2, row: 2, .. })
        ));
    }
}
