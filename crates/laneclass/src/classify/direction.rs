use crate::lane::{LaneDescriptor, LaneDirection, LaneFlags};

/// Group membership of one lane. Empty for anything that is not a road lane,
/// whatever direction it declares.
pub fn group_flags(lane: &LaneDescriptor) -> LaneFlags {
    if !lane.is_road_lane() {
        return LaneFlags::empty();
    }
    match lane.direction {
        LaneDirection::Forward | LaneDirection::AvoidBackward => LaneFlags::FORWARD_GROUP,
        LaneDirection::Backward | LaneDirection::AvoidForward => LaneFlags::BACKWARD_GROUP,
        LaneDirection::Both | LaneDirection::AvoidBoth => LaneFlags::GROUP,
        LaneDirection::None => LaneFlags::empty(),
    }
}
