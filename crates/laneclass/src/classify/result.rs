//! Output side of the engine.

use crate::lane::LaneFlags;

/// Coarse layout of the whole cross-section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RoadLaneConfiguration {
    /// One of the direction groups is empty.
    OneWay,
    /// Backward lanes on the low side, forward lanes on the high side.
    TwoWay,
    /// Forward lanes on the low side, backward lanes on the high side.
    Inverted,
    /// The direction ranges interleave.
    Complex,
}

/// Lanes sharing one placement + group key, in position order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneGroup {
    pub sorted_lanes: Vec<usize>,
    /// OR over the members' flags.
    pub flags: LaneFlags,
}

impl LaneGroup {
    #[inline]
    pub fn key(&self) -> LaneFlags {
        self.flags.grouping_key()
    }
}

/// Immutable classification of one cross-section.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    pub(crate) lanes: Vec<LaneFlags>,
    pub(crate) sorted_lanes: Vec<usize>,
    pub(crate) groups: Vec<LaneGroup>,
    pub(crate) configuration: RoadLaneConfiguration,
    pub(crate) forward_flags: LaneFlags,
    pub(crate) backward_flags: LaneFlags,
}

impl Classification {
    /// Per-lane flags, indexed like the input.
    #[inline]
    pub fn lane_flags(&self) -> &[LaneFlags] {
        &self.lanes
    }

    /// Flags of lane `lane`, empty when out of range.
    #[inline]
    pub fn flags(&self, lane: usize) -> LaneFlags {
        self.lanes.get(lane).copied().unwrap_or_default()
    }

    /// Lane indices in position order.
    #[inline]
    pub fn sorted_lanes(&self) -> &[usize] {
        &self.sorted_lanes
    }

    #[inline]
    pub fn groups(&self) -> &[LaneGroup] {
        &self.groups
    }

    #[inline]
    pub fn configuration(&self) -> RoadLaneConfiguration {
        self.configuration
    }

    #[inline]
    pub fn forward_flags(&self) -> LaneFlags {
        self.forward_flags
    }

    #[inline]
    pub fn backward_flags(&self) -> LaneFlags {
        self.backward_flags
    }

    /// Union of the forward and backward aggregates.
    #[inline]
    pub fn all_flags(&self) -> LaneFlags {
        self.forward_flags | self.backward_flags
    }

    /// Index into `groups()` of the group containing `lane`.
    pub fn group_of(&self, lane: usize) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.sorted_lanes.contains(&lane))
    }

    /// Lanes whose flags contain every bit of `mask`, in position order.
    pub fn lanes_with(&self, mask: LaneFlags) -> impl Iterator<Item = usize> + '_ {
        self.sorted_lanes
            .iter()
            .copied()
            .filter(move |&i| self.lanes[i].contains(mask))
    }

    /// Whether any lane carries every bit of `mask`.
    pub fn has_lane_with(&self, mask: LaneFlags) -> bool {
        self.lanes_with(mask).next().is_some()
    }
}
