//! # Input/Output utilities for segment data.
//!
//! This small crate reads delimited segment files (`id start end` per line,
//! plain or gzip'd) into the raw records `seglap-overlaprs` validates, and
//! writes overlap records back out as TSV, CSV or JSON.
//!
pub mod error;
pub mod reader;
pub mod utils;
pub mod writer;

// re-expose core functions
pub use error::*;
pub use reader::*;
pub use utils::*;
pub use writer::*;
