//! Replay settings as read from a configuration file.

use serde::Deserialize;

use lc_connectivity::RangeConfig;

/// Top-level replay configuration.
///
/// Typically loaded from TOML by the application crate:
///
/// ```toml
/// max_frames = 60
///
/// [ranges]
/// direct_range_m        = 15000.0
/// relay_search_range_m  = 5000.0
/// relay_gateway_range_m = 20000.0
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReplaySettings {
    pub ranges: RangeConfig,

    /// Replay only the first N snapshots.  `None` replays the whole trace.
    pub max_frames: Option<usize>,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            ranges:     RangeConfig::default(),
            max_frames: None,
        }
    }
}
