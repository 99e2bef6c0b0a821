//! Radio ranges used by the decision procedure.

use serde::{Deserialize, Serialize};

use crate::{ConnectivityError, ConnectivityResult};

/// The three ranges that drive link decisions, in metres.
///
/// `direct_range_m ≤ relay_gateway_range_m` is the expected setup but is not
/// enforced; a larger direct range simply leaves the relay window empty.
///
/// Every field has a default, so a TOML table may override any subset:
///
/// ```toml
/// direct_range_m = 5000.0
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Maximum boat→gateway distance for a direct uplink (inclusive).
    pub direct_range_m: f64,

    /// A relay boat must be strictly closer than this to the boat it serves.
    pub relay_search_range_m: f64,

    /// Boats whose nearest gateway lies beyond `direct_range_m` but within
    /// this distance (inclusive) may try a relay.
    pub relay_gateway_range_m: f64,
}

impl RangeConfig {
    /// Mobile gateways with peer relay: 15 km direct, 5 km boat-to-boat,
    /// relay attempted up to 20 km from the nearest gateway.
    pub const MOBILE_P2P: RangeConfig = RangeConfig {
        direct_range_m:        15_000.0,
        relay_search_range_m:  5_000.0,
        relay_gateway_range_m: 20_000.0,
    };

    pub fn new(direct_range_m: f64, relay_search_range_m: f64, relay_gateway_range_m: f64) -> Self {
        Self { direct_range_m, relay_search_range_m, relay_gateway_range_m }
    }

    /// Star topology with no peer relay (fixed coastal gateways).
    ///
    /// The relay window `(direct, relay_gateway]` is empty, so every boat is
    /// either directly linked or unconnected.
    pub fn direct_only(direct_range_m: f64) -> Self {
        Self {
            direct_range_m,
            relay_search_range_m:  0.0,
            relay_gateway_range_m: direct_range_m,
        }
    }

    /// `true` when some boat could ever be assigned a relay link.
    pub fn relay_enabled(&self) -> bool {
        self.relay_gateway_range_m > self.direct_range_m && self.relay_search_range_m > 0.0
    }

    /// Reject NaN, infinite, or negative ranges.
    pub fn validate(&self) -> ConnectivityResult<()> {
        for (name, value) in [
            ("direct_range_m",        self.direct_range_m),
            ("relay_search_range_m",  self.relay_search_range_m),
            ("relay_gateway_range_m", self.relay_gateway_range_m),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConnectivityError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative distance (got {value})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::MOBILE_P2P
    }
}
