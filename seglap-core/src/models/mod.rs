pub mod overlap_record;
pub mod raw_record;
pub mod segment;
pub mod segment_store;

// re-export for cleaner imports
pub use self::overlap_record::OverlapRecord;
pub use self::raw_record::RawRecord;
pub use self::segment::{Segment, SegmentId};
pub use self::segment_store::SegmentStore;
