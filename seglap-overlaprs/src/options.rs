use seglap_core::errors::{Result, SegmentError};

use crate::consts::DEFAULT_MINIMUM_SHARED_SEGMENTS;
use crate::scanner::ScannerType;

///
/// Settings for one overlap calculation.
///
/// `minimum_shared_segments` is the smallest number of segments two points
/// must share to be reported. The default of 2 reports only real overlaps
/// between distinct segments; 1 also reports every span covered by a single
/// segment.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculateOptions {
    pub minimum_shared_segments: usize,
    pub scanner: ScannerType,
    /// Fail with [SegmentError::EmptyInput] instead of returning no records
    /// when the input holds no segments.
    pub require_segments: bool,
    pub parallel: bool,
}

impl Default for CalculateOptions {
    fn default() -> Self {
        CalculateOptions {
            minimum_shared_segments: DEFAULT_MINIMUM_SHARED_SEGMENTS,
            scanner: ScannerType::default(),
            require_segments: false,
            parallel: false,
        }
    }
}

impl CalculateOptions {
    pub fn with_minimum_shared_segments(mut self, minimum: usize) -> Self {
        self.minimum_shared_segments = minimum;
        self
    }

    pub fn with_scanner(mut self, scanner: ScannerType) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn with_require_segments(mut self, require: bool) -> Self {
        self.require_segments = require;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.minimum_shared_segments == 0 {
            return Err(SegmentError::InvalidThreshold(self.minimum_shared_segments));
        }
        Ok(())
    }
}
