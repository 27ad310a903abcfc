//! Per-lane classification value.
//!
//! One `LaneFlags` packs three independent axes:
//! - placement: at most one of OUTER, INNER, DISPLACED_OUTER, DISPLACED_INNER;
//! - group: FORWARD_GROUP and/or BACKWARD_GROUP (both only for bidirectional lanes);
//! - routing permission: any combination of the ALLOW_*/FORBID_* bits.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Classification of one lane (or the OR over several lanes).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LaneFlags: u16 {
        const OUTER                   = 1 << 0;
        const INNER                   = 1 << 1;
        const DISPLACED_OUTER         = 1 << 2;
        const DISPLACED_INNER         = 1 << 3;
        const FORWARD_GROUP           = 1 << 4;
        const BACKWARD_GROUP          = 1 << 5;
        const ALLOW_SERVICE_LANE      = 1 << 6;
        const ALLOW_EXPRESS_LANE      = 1 << 7;
        const ALLOW_CFI               = 1 << 8;
        const FORBID_CONTROLLED_LANES = 1 << 9;

        // Axis masks.
        const PLACEMENT = Self::OUTER.bits()
            | Self::INNER.bits()
            | Self::DISPLACED_OUTER.bits()
            | Self::DISPLACED_INNER.bits();
        const GROUP = Self::FORWARD_GROUP.bits() | Self::BACKWARD_GROUP.bits();
        const ROUTING = Self::ALLOW_SERVICE_LANE.bits()
            | Self::ALLOW_EXPRESS_LANE.bits()
            | Self::ALLOW_CFI.bits()
            | Self::FORBID_CONTROLLED_LANES.bits();
        const GROUPING = Self::PLACEMENT.bits() | Self::GROUP.bits();

        // Placement + group composites.
        const OUTER_FORWARD = Self::OUTER.bits() | Self::FORWARD_GROUP.bits();
        const OUTER_BACKWARD = Self::OUTER.bits() | Self::BACKWARD_GROUP.bits();
        const INNER_FORWARD = Self::INNER.bits() | Self::FORWARD_GROUP.bits();
        const INNER_BACKWARD = Self::INNER.bits() | Self::BACKWARD_GROUP.bits();
        const DISPLACED_OUTER_FORWARD = Self::DISPLACED_OUTER.bits() | Self::FORWARD_GROUP.bits();
        const DISPLACED_OUTER_BACKWARD = Self::DISPLACED_OUTER.bits() | Self::BACKWARD_GROUP.bits();
        const DISPLACED_INNER_FORWARD = Self::DISPLACED_INNER.bits() | Self::FORWARD_GROUP.bits();
        const DISPLACED_INNER_BACKWARD = Self::DISPLACED_INNER.bits() | Self::BACKWARD_GROUP.bits();
    }
}

/// Named-bit text form, e.g. `OUTER | FORWARD_GROUP`.
impl fmt::Display for LaneFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LaneFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LaneFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Placement axis of `LaneFlags`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    Outer,
    Inner,
    DisplacedOuter,
    DisplacedInner,
}

impl Placement {
    #[inline]
    pub fn flag(self) -> LaneFlags {
        match self {
            Placement::Outer => LaneFlags::OUTER,
            Placement::Inner => LaneFlags::INNER,
            Placement::DisplacedOuter => LaneFlags::DISPLACED_OUTER,
            Placement::DisplacedInner => LaneFlags::DISPLACED_INNER,
        }
    }
}

/// One side of traffic. Conventional two-way roads carry backward traffic on
/// the low-position side and forward traffic on the high-position side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupDirection {
    Forward,
    Backward,
}

impl GroupDirection {
    pub const BOTH: [GroupDirection; 2] = [GroupDirection::Forward, GroupDirection::Backward];

    #[inline]
    pub fn flag(self) -> LaneFlags {
        match self {
            GroupDirection::Forward => LaneFlags::FORWARD_GROUP,
            GroupDirection::Backward => LaneFlags::BACKWARD_GROUP,
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            GroupDirection::Forward => GroupDirection::Backward,
            GroupDirection::Backward => GroupDirection::Forward,
        }
    }

    /// Sign of "inward" in position space when walking from this direction's
    /// own edge toward the far edge (forward walks down, backward walks up).
    #[inline]
    pub fn inward_sign(self) -> f64 {
        match self {
            GroupDirection::Forward => -1.0,
            GroupDirection::Backward => 1.0,
        }
    }

    /// Sorted slot reached after `step` slots inward from this direction's own edge.
    #[inline]
    pub(crate) fn slot(self, step: usize, n: usize) -> usize {
        match self {
            GroupDirection::Forward => n - 1 - step,
            GroupDirection::Backward => step,
        }
    }
}

impl LaneFlags {
    /// The placement bit, if any. Returns `None` when no placement or an
    /// inconsistent mix of placement bits is set.
    pub fn placement(self) -> Option<Placement> {
        let p = self & Self::PLACEMENT;
        if p == Self::OUTER {
            Some(Placement::Outer)
        } else if p == Self::INNER {
            Some(Placement::Inner)
        } else if p == Self::DISPLACED_OUTER {
            Some(Placement::DisplacedOuter)
        } else if p == Self::DISPLACED_INNER {
            Some(Placement::DisplacedInner)
        } else {
            None
        }
    }

    /// Copy with the placement axis replaced.
    #[inline]
    pub fn with_placement(self, placement: Option<Placement>) -> Self {
        let cleared = self - Self::PLACEMENT;
        match placement {
            Some(p) => cleared | p.flag(),
            None => cleared,
        }
    }

    #[inline]
    pub fn groups(self) -> Self {
        self & Self::GROUP
    }

    #[inline]
    pub fn routing(self) -> Self {
        self & Self::ROUTING
    }

    /// Placement + group bits; lanes with equal keys share a `LaneGroup`.
    #[inline]
    pub fn grouping_key(self) -> Self {
        self & Self::GROUPING
    }

    /// Exactly the group bit of `dir` (bidirectional lanes excluded).
    #[inline]
    pub fn is_only(self, dir: GroupDirection) -> bool {
        self.groups() == dir.flag()
    }

    #[inline]
    pub fn is_bidirectional(self) -> bool {
        self.contains(Self::GROUP)
    }
}
