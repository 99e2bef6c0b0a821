//! Simulation time model.
//!
//! The simulator logs node positions on a fixed interval (every 5 s in the
//! Salinas scenarios) and stamps each row with the simulated time in seconds
//! as a float.  `SimTime` wraps that value and gives it a total order so
//! snapshots can be keyed in a `BTreeMap` and sorted without ceremony.
//!
//! Non-finite times are rejected at construction, which keeps the `Eq`/`Ord`
//! impls (based on `f64::total_cmp`) consistent with numeric comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

/// A simulated timestamp in seconds since simulator start.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap `secs`, rejecting NaN and infinities.
    pub fn from_secs(secs: f64) -> CoreResult<Self> {
        if secs.is_finite() {
            // Fold -0.0 into 0.0 so both compare equal under total_cmp.
            Ok(SimTime(secs + 0.0))
        } else {
            Err(CoreError::InvalidTime(secs))
        }
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Absolute distance in seconds between two timestamps.
    #[inline]
    pub fn abs_diff(self, other: SimTime) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}s", self.0)
    }
}
