//! Aggregate statistics over one snapshot's link decisions.

use crate::ConnectivityState;

/// Connected / relayed / total boat counts for one snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageSummary {
    /// Boats in `DirectLink` or `RelayLink` state.
    pub connected_count: usize,
    /// All boats evaluated.
    pub total_count:     usize,
    /// Boats in `RelayLink` state.
    pub relay_count:     usize,
}

impl CoverageSummary {
    pub fn from_states<'a, I>(states: I) -> Self
    where
        I: IntoIterator<Item = &'a ConnectivityState>,
    {
        let mut summary = Self::default();
        for state in states {
            summary.total_count += 1;
            summary.connected_count += usize::from(state.is_connected());
            summary.relay_count += usize::from(state.is_relay());
        }
        summary
    }

    /// Share of boats connected, in percent.  `0.0` when there are no boats.
    pub fn coverage_percentage(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.connected_count as f64 / self.total_count as f64 * 100.0
        }
    }

    #[inline]
    pub fn direct_count(&self) -> usize {
        self.connected_count - self.relay_count
    }

    #[inline]
    pub fn unconnected_count(&self) -> usize {
        self.total_count - self.connected_count
    }
}

/// Spread of boat-to-nearest-gateway distances, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceStats {
    pub mean_m: f64,
    pub min_m:  f64,
    pub max_m:  f64,
}

impl DistanceStats {
    /// `None` when `distances` is empty.
    pub fn from_distances<I>(distances: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min_m = f64::INFINITY;
        let mut max_m = f64::NEG_INFINITY;
        for d in distances {
            count += 1;
            sum += d;
            min_m = min_m.min(d);
            max_m = max_m.max(d);
        }
        (count > 0).then(|| Self { mean_m: sum / count as f64, min_m, max_m })
    }
}
