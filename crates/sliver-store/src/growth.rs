//! Capacity growth policy.
//!
//! [`GrowthPolicy::grow`] is a pure function from `(old_capacity,
//! needed_len)` to the capacity of the replacement store. It is consulted
//! only by append, and only when the requested length no longer fits.
//!
//! The schedule is part of the observable contract, not a tuning knob:
//!
//! | old capacity | new capacity |
//! |---|---|
//! | `0` | `max(1, needed)` |
//! | `< 1024` | `old * 2`, repeated until `>= needed` |
//! | `>= 1024` | `old + ceil(old / 4)`, repeated until `>= needed` |
//!
//! Each repetition re-checks the regime, so a batch that carries a small
//! store past the threshold finishes in the proportional regime.

use crate::config::GrowthConfig;
use sliver_core::ConfigError;

/// A validated capacity growth schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    doubling_threshold: usize,
    large_growth_divisor: usize,
}

impl GrowthPolicy {
    /// The standard schedule (doubling below 1024, then ≈25%).
    pub const STANDARD: Self = Self {
        doubling_threshold: GrowthConfig::DEFAULT_DOUBLING_THRESHOLD,
        large_growth_divisor: GrowthConfig::DEFAULT_LARGE_GROWTH_DIVISOR,
    };

    /// Build a policy from a config, validating it first.
    pub fn new(config: &GrowthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            doubling_threshold: config.doubling_threshold,
            large_growth_divisor: config.large_growth_divisor,
        })
    }

    /// The config this policy was built from.
    pub fn config(&self) -> GrowthConfig {
        GrowthConfig {
            doubling_threshold: self.doubling_threshold,
            large_growth_divisor: self.large_growth_divisor,
        }
    }

    /// Capacity for a replacement store that must hold `needed` elements.
    ///
    /// Computes the final capacity in one call, so a batch append of `k`
    /// elements reallocates at most once. Returns `old_capacity` unchanged
    /// if it already fits `needed`.
    pub fn grow(&self, old_capacity: usize, needed: usize) -> usize {
        if old_capacity == 0 {
            return needed.max(1);
        }
        let mut capacity = old_capacity;
        while capacity < needed {
            capacity = self.step(capacity);
        }
        capacity
    }

    /// One growth step. Strictly increasing for any `capacity` in
    /// `1..usize::MAX`, so `grow` always terminates.
    fn step(&self, capacity: usize) -> usize {
        if capacity < self.doubling_threshold {
            capacity.saturating_mul(2)
        } else {
            capacity.saturating_add(capacity.div_ceil(self.large_growth_divisor))
        }
    }

    /// Capacity changes seen while appending `appends` elements one at a
    /// time to an empty view.
    pub fn trace(&self, appends: usize) -> GrowthTrace {
        GrowthTrace {
            policy: *self,
            capacity: 0,
            appends,
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One reallocation observed by a [`GrowthTrace`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityChange {
    /// 1-based number of the append that triggered the reallocation.
    pub index: usize,
    /// Capacity before the append.
    pub old_capacity: usize,
    /// Capacity after the append.
    pub capacity: usize,
    /// Growth relative to `old_capacity`, in percent. `None` when growing
    /// from an empty store.
    pub percent: Option<f64>,
}

/// Iterator over the reallocations of a one-at-a-time append sequence.
///
/// Skips directly from one reallocation to the next, so it is cheap even
/// for long sequences.
#[derive(Clone, Debug)]
pub struct GrowthTrace {
    policy: GrowthPolicy,
    capacity: usize,
    appends: usize,
}

impl Iterator for GrowthTrace {
    type Item = CapacityChange;

    fn next(&mut self) -> Option<Self::Item> {
        // After `capacity` appends the view is full; the next one reallocates.
        let index = self.capacity.checked_add(1)?;
        if index > self.appends {
            return None;
        }
        let old_capacity = self.capacity;
        let capacity = self.policy.grow(old_capacity, index);
        self.capacity = capacity;
        let percent = (old_capacity > 0)
            .then(|| (capacity - old_capacity) as f64 / old_capacity as f64 * 100.0);
        Some(CapacityChange {
            index,
            old_capacity,
            capacity,
            percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_grows_to_needed_or_one() {
        let policy = GrowthPolicy::STANDARD;
        assert_eq!(policy.grow(0, 1), 1);
        assert_eq!(policy.grow(0, 0), 1);
        assert_eq!(policy.grow(0, 5), 5);
    }

    #[test]
    fn small_capacities_double() {
        let policy = GrowthPolicy::STANDARD;
        assert_eq!(policy.grow(1, 2), 2);
        assert_eq!(policy.grow(4, 5), 8);
        assert_eq!(policy.grow(512, 513), 1024);
    }

    #[test]
    fn batch_doubles_repeatedly() {
        let policy = GrowthPolicy::STANDARD;
        assert_eq!(policy.grow(4, 9), 16);
        assert_eq!(policy.grow(4, 33), 64);
    }

    #[test]
    fn large_capacities_grow_by_a_quarter() {
        let policy = GrowthPolicy::STANDARD;
        assert_eq!(policy.grow(1024, 1025), 1280);
        assert_eq!(policy.grow(1280, 1281), 1600);
        // ceil(1025 / 4) = 257
        assert_eq!(policy.grow(1025, 1026), 1282);
    }

    #[test]
    fn batch_crossing_threshold_switches_regime() {
        let policy = GrowthPolicy::STANDARD;
        // 512 -> 1024 (double) -> 1280 (quarter)
        assert_eq!(policy.grow(512, 1100), 1280);
    }

    #[test]
    fn fitting_request_is_unchanged() {
        assert_eq!(GrowthPolicy::STANDARD.grow(8, 3), 8);
    }

    #[test]
    fn custom_policy_respects_config() {
        let policy = GrowthPolicy::new(&GrowthConfig {
            doubling_threshold: 4,
            large_growth_divisor: 2,
        })
        .unwrap();
        assert_eq!(policy.grow(2, 3), 4);
        assert_eq!(policy.grow(4, 5), 6);
        assert_eq!(policy.config().large_growth_divisor, 2);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = GrowthConfig {
            large_growth_divisor: 0,
            ..GrowthConfig::default()
        };
        assert_eq!(
            GrowthPolicy::new(&config),
            Err(ConfigError::ZeroGrowthDivisor)
        );
    }

    #[test]
    fn near_max_saturates_instead_of_overflowing() {
        let policy = GrowthPolicy::STANDARD;
        assert_eq!(policy.grow(usize::MAX - 1, usize::MAX), usize::MAX);
    }

    #[test]
    fn trace_matches_one_at_a_time_appends() {
        let caps: Vec<usize> = GrowthPolicy::STANDARD
            .trace(5)
            .map(|c| c.capacity)
            .collect();
        assert_eq!(caps, vec![1, 2, 4, 8]);
        let indices: Vec<usize> = GrowthPolicy::STANDARD
            .trace(5)
            .map(|c| c.index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 5]);
    }

    #[test]
    fn trace_reports_percent_growth() {
        let changes: Vec<_> = GrowthPolicy::STANDARD.trace(1025).collect();
        assert_eq!(changes[0].percent, None);
        assert_eq!(changes[1].percent, Some(100.0));
        let last = changes.last().unwrap();
        assert_eq!(last.old_capacity, 1024);
        assert_eq!(last.capacity, 1280);
        assert_eq!(last.index, 1025);
        assert_eq!(last.percent, Some(25.0));
    }

    #[test]
    fn trace_of_zero_appends_is_empty() {
        assert_eq!(GrowthPolicy::STANDARD.trace(0).count(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grow_always_fits_needed(old in 0usize..100_000, extra in 1usize..10_000) {
                let needed = old + extra;
                let cap = GrowthPolicy::STANDARD.grow(old, needed);
                prop_assert!(cap >= needed);
            }

            #[test]
            fn doubling_regime_yields_power_of_two_multiple(
                shift in 0u32..10,
                extra in 1usize..512,
            ) {
                let old = 1usize << shift;
                let cap = GrowthPolicy::STANDARD.grow(old, old + extra);
                prop_assert_eq!(cap % old, 0);
                prop_assert!((cap / old).is_power_of_two());
            }

            #[test]
            fn single_step_growth_is_bounded_above_threshold(old in 1024usize..1_000_000) {
                let cap = GrowthPolicy::STANDARD.grow(old, old + 1);
                prop_assert_eq!(cap, old + old.div_ceil(4));
            }
        }
    }
}
