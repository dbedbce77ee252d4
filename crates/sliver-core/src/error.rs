//! Error types for sequence view operations.
//!
//! Both [`SliceError`] variants are caller-induced misuse and are reported
//! synchronously by the call that triggered them. There is no transient or
//! retryable category: every operation is deterministic in its inputs.

use std::error::Error;
use std::fmt;

/// Errors from element access and sub-viewing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// Element index outside `[0, len)`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The view's length at the time of the call.
        len: usize,
    },
    /// Malformed sub-view bounds.
    ///
    /// Raised when `lo > hi`, `hi > len`, or for the capacity-limited form
    /// when `hi > max` or `max > capacity`.
    InvalidRange {
        /// Requested lower bound.
        lo: usize,
        /// Requested upper bound.
        hi: usize,
        /// Requested capacity bound (`None` for the two-bound form).
        max: Option<usize>,
        /// The parent view's length.
        len: usize,
        /// The parent view's capacity.
        capacity: usize,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range [{index}] with length {len}")
            }
            Self::InvalidRange {
                lo,
                hi,
                max,
                len,
                capacity,
            } => {
                write!(f, "invalid sub-view bounds [{lo}:{hi}")?;
                if let Some(max) = max {
                    write!(f, ":{max}")?;
                }
                write!(f, "] for length {len}, capacity {capacity}")
            }
        }
    }
}

impl Error for SliceError {}

/// Errors detected while validating a growth configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `doubling_threshold` is zero, which would leave no doubling regime
    /// and make the first growth step from capacity 1 ambiguous.
    ZeroDoublingThreshold,
    /// `large_growth_divisor` is zero (division by zero in the
    /// proportional growth step).
    ZeroGrowthDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDoublingThreshold => write!(f, "doubling threshold must be at least 1"),
            Self::ZeroGrowthDivisor => write!(f, "large growth divisor must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
