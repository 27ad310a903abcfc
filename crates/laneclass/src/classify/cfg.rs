//! Tuned tolerances and policies for classification.
//!
//! The defaults are empirical values for game-scale geometry (metres, lanes of
//! roughly 3 units). Recalibrate them when porting to a different scale.

use crate::lane::LaneFlags;

/// Maximum height of a median element above the reference lane.
pub const ELEVATION_TOLERANCE: f64 = 3.0;
/// Multiplier on the width sum in the positional-gap median fallback.
pub const GAP_WIDTH_FACTOR: f64 = 1.0;
/// Slack for "lies beyond the edge" comparisons.
pub const EPS_EDGE: f64 = 1e-3;

/// How lanes at identical positions are ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TieBreak {
    /// Backward-only lanes first, then lanes without an exclusive direction,
    /// then forward-only lanes. Known to be imprecise at group boundaries.
    #[default]
    DirectionBands,
    /// Keep input order among ties.
    InputOrder,
}

impl TieBreak {
    /// Secondary sort key for a lane with the given group flags.
    #[inline]
    pub fn band(self, flags: LaneFlags) -> i8 {
        match self {
            TieBreak::DirectionBands => {
                let groups = flags.groups();
                if groups == LaneFlags::BACKWARD_GROUP {
                    -1
                } else if groups == LaneFlags::FORWARD_GROUP {
                    1
                } else {
                    0
                }
            }
            TieBreak::InputOrder => 0,
        }
    }
}

/// Classification configuration (tolerances and the tie-break policy).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifyCfg {
    pub elevation_tolerance: f64,
    pub gap_width_factor: f64,
    pub eps_edge: f64,
    pub tie_break: TieBreak,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self {
            elevation_tolerance: ELEVATION_TOLERANCE,
            gap_width_factor: GAP_WIDTH_FACTOR,
            eps_edge: EPS_EDGE,
            tie_break: TieBreak::default(),
        }
    }
}
