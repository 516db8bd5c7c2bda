//! Core models for seglap.
//!
//! This crate holds the data types every other seglap crate speaks: raw input
//! records, validated [Segment]s collected in a [SegmentStore], and the
//! [OverlapRecord]s produced by `seglap-overlaprs`. It does no I/O.
//!
//! ```rust
//! use seglap_core::models::{RawRecord, SegmentStore};
//!
//! let store = SegmentStore::<String>::from_records(vec![
//!     RawRecord::new(1, ["a", "0", "10"]),
//!     RawRecord::new(2, ["b", "5", "15"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(store.len(), 2);
//! ```
pub mod errors;
pub mod models;

pub use self::errors::{Result, SegmentError};
pub use self::models::{OverlapRecord, RawRecord, Segment, SegmentId, SegmentStore};
