//! Input side of the engine: one `LaneDescriptor` per lane of a cross-section.

use bitflags::bitflags;

/// Coarse lane category as declared by the road type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LaneKind {
    Pedestrian,
    Parking,
    Vehicle,
    TransportVehicle,
    /// Medians, decoration strips and anything else without traffic.
    Other,
}

bitflags! {
    /// Vehicle categories allowed on a lane.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VehicleKinds: u32 {
        const CAR        = 1 << 0;
        const TROLLEYBUS = 1 << 1;
        const BICYCLE    = 1 << 2;
        const TRAM       = 1 << 3;
        const TRAIN      = 1 << 4;
        const OTHER      = 1 << 5;

        const _ = !0;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VehicleKinds {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VehicleKinds {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Permitted travel direction relative to the segment direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LaneDirection {
    #[default]
    None,
    Forward,
    Backward,
    Both,
    AvoidForward,
    AvoidBackward,
    AvoidBoth,
}

/// One lane of a road cross-section.
///
/// `position` is the signed lateral offset of the lane center from the road
/// centerline; `vertical_offset` is the height relative to the road surface
/// (negative = below).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneDescriptor {
    pub position: f64,
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertical_offset: f64,
    pub lane_kind: LaneKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vehicle_kinds: VehicleKinds,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: LaneDirection,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allows_custom_connections: bool,
}

impl LaneDescriptor {
    #[inline]
    pub fn new(lane_kind: LaneKind, position: f64, width: f64) -> Self {
        Self {
            position,
            width,
            vertical_offset: 0.0,
            lane_kind,
            vehicle_kinds: VehicleKinds::empty(),
            direction: LaneDirection::None,
            allows_custom_connections: false,
        }
    }

    /// Sidewalk; walkable both ways and raised like a curb.
    pub fn pedestrian(position: f64, width: f64) -> Self {
        Self::new(LaneKind::Pedestrian, position, width)
            .with_direction(LaneDirection::Both)
            .with_vertical_offset(0.2)
    }

    pub fn parking(position: f64, width: f64, direction: LaneDirection) -> Self {
        Self::new(LaneKind::Parking, position, width)
            .with_vehicle_kinds(VehicleKinds::CAR)
            .with_direction(direction)
    }

    /// Ordinary car lane that accepts custom lane connections.
    pub fn car(position: f64, width: f64, direction: LaneDirection) -> Self {
        Self::new(LaneKind::Vehicle, position, width)
            .with_vehicle_kinds(VehicleKinds::CAR)
            .with_direction(direction)
            .with_custom_connections(true)
    }

    /// Car lane without custom connections (a pure through lane).
    pub fn through(position: f64, width: f64, direction: LaneDirection) -> Self {
        Self::car(position, width, direction).with_custom_connections(false)
    }

    pub fn bus(position: f64, width: f64, direction: LaneDirection) -> Self {
        Self::new(LaneKind::TransportVehicle, position, width)
            .with_vehicle_kinds(VehicleKinds::CAR)
            .with_direction(direction)
    }

    /// Median strip; `height` 0 is a flush (painted) median.
    pub fn median(position: f64, width: f64, height: f64) -> Self {
        Self::new(LaneKind::Other, position, width).with_vertical_offset(height)
    }

    #[inline]
    pub fn with_direction(mut self, direction: LaneDirection) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn with_vertical_offset(mut self, vertical_offset: f64) -> Self {
        self.vertical_offset = vertical_offset;
        self
    }

    #[inline]
    pub fn with_vehicle_kinds(mut self, vehicle_kinds: VehicleKinds) -> Self {
        self.vehicle_kinds = vehicle_kinds;
        self
    }

    #[inline]
    pub fn with_custom_connections(mut self, allows: bool) -> Self {
        self.allows_custom_connections = allows;
        self
    }

    /// Vehicle or transport lane carrying cars or trolleybuses.
    /// Only road lanes take part in group and placement classification.
    #[inline]
    pub fn is_road_lane(&self) -> bool {
        matches!(self.lane_kind, LaneKind::Vehicle | LaneKind::TransportVehicle)
            && self
                .vehicle_kinds
                .intersects(VehicleKinds::CAR | VehicleKinds::TROLLEYBUS)
    }

    /// Plain vehicle lane (not a transport lane) open to cars.
    #[inline]
    pub fn is_pure_vehicle_lane(&self) -> bool {
        self.lane_kind == LaneKind::Vehicle && self.vehicle_kinds.contains(VehicleKinds::CAR)
    }
}
