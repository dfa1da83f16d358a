//! Numeric policy for position keys.
//!
//! # Overview
//!
//! Position keys are `f64` values spaced `increment` apart. New keys are
//! bisected between neighbors (fractional indexing), which halves the local
//! gap on every insertion between the same pair. [`OrderKeySpace`] owns the
//! one piece of numeric subtlety in the crate: deciding when a gap has
//! degraded too far to bisect again. That predicate is the sole trigger for
//! a scope rebalance — both the interactive and bulk paths share it.
//!
//! # Design
//!
//! Exhaustion fires when the gap is at or below a fixed ratio of the
//! increment (1/1000 of it), or when `f64` itself can no longer produce a
//! midpoint strictly between the bounds. The ratio floor means a default
//! keyspace tolerates roughly ten bisections of the same gap before a
//! rebalance, while appends extrapolate by a full `increment` and stay
//! cheap for thousands of rows.

#![allow(
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::unused_self,
)]

use serde::{Deserialize, Serialize};

/// Spacing and precision policy for one ordering scope family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderKeySpace {
    increment: f64,
}

impl Default for OrderKeySpace {
    fn default() -> Self {
        Self {
            increment: Self::DEFAULT_INCREMENT,
        }
    }
}

impl OrderKeySpace {
    /// Nominal spacing between adjacent keys after a rebalance or append.
    pub const DEFAULT_INCREMENT: f64 = 1000.0;

    /// A gap at or below `increment * MIN_GAP_RATIO` is considered spent.
    const MIN_GAP_RATIO: f64 = 1e-3;

    /// A keyspace with a non-default spacing.
    ///
    /// `increment` must be positive and finite; the default of 1000.0 suits
    /// scopes of up to a few hundred siblings.
    pub fn with_increment(increment: f64) -> Self {
        debug_assert!(increment.is_finite() && increment > 0.0);
        Self { increment }
    }

    pub const fn increment(&self) -> f64 {
        self.increment
    }

    /// The uniform key for slot `index` in a freshly spaced scope:
    /// `(index + 1) * increment`.
    pub fn key_for_slot(&self, index: usize) -> f64 {
        (index as f64 + 1.0) * self.increment
    }

    /// Midpoint between two adjacent keys.
    pub fn midpoint(&self, lower: f64, upper: f64) -> f64 {
        lower + (upper - lower) / 2.0
    }

    /// True when the gap between two adjacent keys is too small to safely
    /// bisect again. The only trigger for the rebalance path.
    pub fn is_precision_exhausted(&self, lower: f64, upper: f64) -> bool {
        let gap = upper - lower;
        if !gap.is_finite() || gap <= self.increment * Self::MIN_GAP_RATIO {
            return true;
        }
        // Even a healthy-looking gap is spent once f64 rounding stops the
        // midpoint from landing strictly between the bounds.
        let mid = self.midpoint(lower, upper);
        !(mid > lower && mid < upper)
    }
}
