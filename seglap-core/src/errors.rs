use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    #[error("Malformed record at row {row}: expected {expected} fields, got {actual} instead")]
    MalformedRecord {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Could not convert element {value:?} in column {column}, row {row} to {expected}")]
    FieldParseError {
        column: usize,
        row: usize,
        value: String,
        expected: &'static str,
    },

    #[error("Segment {id} has a start ({start}) greater than its end ({end})")]
    InvalidRange { id: String, start: f64, end: f64 },

    #[error("No segments found in the input")]
    EmptyInput,

    #[error("Minimum shared segment count must be at least 1, got {0}")]
    InvalidThreshold(usize),
}

pub type Result<T> = std::result::Result<T, SegmentError>;
