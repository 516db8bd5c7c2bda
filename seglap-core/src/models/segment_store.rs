use std::any::type_name;

use crate::errors::{Result, SegmentError};
use crate::models::{RawRecord, Segment, SegmentId};

/// Number of fields every input record must carry: id, start, end.
pub const FIELDS_PER_RECORD: usize = 3;

const NUMBER_TYPE: &str = "a finite number";

///
/// SegmentStore struct, the validated, immutable collection of segments one
/// calculation works on.
///
/// Segments are kept stably sorted by identifier, so a segment's position in
/// the store is also its rank in identifier order. Later stages rely on this to
/// keep membership sets sorted without comparing identifiers again.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStore<I: SegmentId> {
    segments: Vec<Segment<I>>,
}

impl<I: SegmentId> SegmentStore<I> {
    ///
    /// Create a store from already parsed segments.
    ///
    /// # Arguments
    /// - segments: the segments to validate and own
    ///
    /// Fails with [SegmentError::InvalidRange] for the first segment whose
    /// bounds are not finite or whose start lies after its end.
    pub fn new(mut segments: Vec<Segment<I>>) -> Result<Self> {
        for segment in &segments {
            check_range(segment)?;
        }
        segments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(SegmentStore { segments })
    }

    ///
    /// Parse and validate raw records into a store.
    ///
    /// Validation is eager and stops at the first offending record.
    pub fn from_records<R>(records: R) -> Result<Self>
    where
        R: IntoIterator<Item = RawRecord>,
    {
        let segments = records
            .into_iter()
            .map(|record| Self::parse_record(&record))
            .collect::<Result<Vec<_>>>()?;
        Self::new(segments)
    }

    ///
    /// Parse a single raw record into a segment.
    ///
    /// Fields are trimmed before parsing. Columns in errors are 1-based.
    pub fn parse_record(record: &RawRecord) -> Result<Segment<I>> {
        if record.len() != FIELDS_PER_RECORD {
            return Err(SegmentError::MalformedRecord {
                row: record.row,
                expected: FIELDS_PER_RECORD,
                actual: record.len(),
            });
        }

        let raw_id = record.fields[0].trim();
        let id = raw_id
            .parse::<I>()
            .map_err(|_| SegmentError::FieldParseError {
                column: 1,
                row: record.row,
                value: raw_id.to_string(),
                expected: type_name::<I>(),
            })?;
        let start = parse_number(record, 1)?;
        let end = parse_number(record, 2)?;

        let segment = Segment { id, start, end };
        check_range(&segment)?;
        Ok(segment)
    }

    pub fn segments(&self) -> &[Segment<I>] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment<I>> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<I>> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<I: SegmentId> TryFrom<Vec<RawRecord>> for SegmentStore<I> {
    type Error = SegmentError;

    fn try_from(value: Vec<RawRecord>) -> Result<Self> {
        SegmentStore::from_records(value)
    }
}

impl<'a, I: SegmentId> IntoIterator for &'a SegmentStore<I> {
    type Item = &'a Segment<I>;
    type IntoIter = std::slice::Iter<'a, Segment<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_number(record: &RawRecord, index: usize) -> Result<f64> {
    let raw = record.fields[index].trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SegmentError::FieldParseError {
            column: index + 1,
            row: record.row,
            value: raw.to_string(),
            expected: NUMBER_TYPE,
        }),
    }
}

fn check_range<I: SegmentId>(segment: &Segment<I>) -> Result<()> {
    let valid = segment.start.is_finite() && segment.end.is_finite() && segment.start <= segment.end;
    if !valid {
        return Err(SegmentError::InvalidRange {
            id: segment.id.to_string(),
            start: segment.start,
            end: segment.end,
        });
    }
    Ok(())
}
