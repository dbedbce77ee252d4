//! Growth configuration parameters.

use sliver_core::ConfigError;

/// Configuration for the capacity growth schedule.
///
/// Controls where growth switches from doubling to proportional steps and
/// how large the proportional steps are. The default reproduces the
/// standard schedule exactly: doubling below 1024 elements, then
/// `capacity + ceil(capacity / 4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Capacities strictly below this value double on each growth step.
    ///
    /// Default: 1024. Must be at least 1.
    pub doubling_threshold: usize,

    /// At or above the threshold, each growth step adds
    /// `ceil(capacity / large_growth_divisor)` elements.
    ///
    /// Default: 4 (≈25% growth). Must be at least 1.
    pub large_growth_divisor: usize,
}

impl GrowthConfig {
    /// Default doubling threshold in elements.
    pub const DEFAULT_DOUBLING_THRESHOLD: usize = 1024;

    /// Default divisor for the proportional growth regime.
    pub const DEFAULT_LARGE_GROWTH_DIVISOR: usize = 4;

    /// Create a config with the standard schedule.
    pub const fn new() -> Self {
        Self {
            doubling_threshold: Self::DEFAULT_DOUBLING_THRESHOLD,
            large_growth_divisor: Self::DEFAULT_LARGE_GROWTH_DIVISOR,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.doubling_threshold == 0 {
            return Err(ConfigError::ZeroDoublingThreshold);
        }
        if self.large_growth_divisor == 0 {
            return Err(ConfigError::ZeroGrowthDivisor);
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new()
    }
}
