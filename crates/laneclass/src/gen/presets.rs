//! Hand-built cross-sections covering each layout family.
//!
//! Lanes are listed in position order unless noted; widths are 3 units for
//! traffic lanes.

use crate::lane::LaneDescriptor;
use crate::lane::LaneDirection::{Backward, Forward};

/// Two-lane street: sidewalks, parking and one car lane per direction.
/// Input order is deliberately not position order.
pub fn two_lane_street() -> Vec<LaneDescriptor> {
    vec![
        LaneDescriptor::pedestrian(-6.5, 3.0),
        LaneDescriptor::pedestrian(6.5, 3.0),
        LaneDescriptor::parking(-4.0, 2.0, Backward),
        LaneDescriptor::parking(4.0, 2.0, Forward),
        LaneDescriptor::car(-1.5, 3.0, Backward),
        LaneDescriptor::car(1.5, 3.0, Forward),
    ]
}

/// `two_lane_street` with every directional lane forced forward.
pub fn one_way_street() -> Vec<LaneDescriptor> {
    two_lane_street()
        .into_iter()
        .map(|l| match l.direction {
            Backward => l.with_direction(Forward),
            _ => l,
        })
        .collect()
}

/// Four lanes per direction; flush medians split service from express lanes
/// on both sides, a raised median separates the directions.
pub fn four_lane_avenue() -> Vec<LaneDescriptor> {
    vec![
        LaneDescriptor::pedestrian(-15.5, 3.0),
        LaneDescriptor::car(-11.5, 3.0, Backward),
        LaneDescriptor::car(-8.5, 3.0, Backward),
        LaneDescriptor::median(-6.5, 1.0, 0.0),
        LaneDescriptor::through(-4.5, 3.0, Backward),
        LaneDescriptor::through(-1.5, 3.0, Backward),
        LaneDescriptor::median(0.0, 0.0, 0.3),
        LaneDescriptor::through(1.5, 3.0, Forward),
        LaneDescriptor::through(4.5, 3.0, Forward),
        LaneDescriptor::median(6.5, 1.0, 0.0),
        LaneDescriptor::car(8.5, 3.0, Forward),
        LaneDescriptor::car(11.5, 3.0, Forward),
        LaneDescriptor::pedestrian(15.5, 3.0),
    ]
}

/// Continuous-flow layout: outer lanes at each edge, two displaced through
/// pairs in between with opposing directions.
pub fn continuous_flow() -> Vec<LaneDescriptor> {
    vec![
        LaneDescriptor::car(-10.5, 3.0, Backward),
        LaneDescriptor::through(-7.5, 3.0, Forward),
        LaneDescriptor::through(-4.5, 3.0, Forward),
        LaneDescriptor::through(-1.5, 3.0, Backward),
        LaneDescriptor::through(1.5, 3.0, Backward),
        LaneDescriptor::car(4.5, 3.0, Forward),
        LaneDescriptor::car(7.5, 3.0, Forward),
        LaneDescriptor::car(10.5, 3.0, Forward),
    ]
}

/// Alternating directions, every lane accepting custom connections.
pub fn alternating() -> Vec<LaneDescriptor> {
    vec![
        LaneDescriptor::car(-4.5, 3.0, Backward),
        LaneDescriptor::car(-1.5, 3.0, Forward),
        LaneDescriptor::car(1.5, 3.0, Backward),
        LaneDescriptor::car(4.5, 3.0, Forward),
    ]
}

/// Six carriageways separated by raised medians: service and express lanes
/// per side, and bus lanes threaded across the center.
pub fn boulevard() -> Vec<LaneDescriptor> {
    vec![
        LaneDescriptor::pedestrian(-20.0, 3.0),
        LaneDescriptor::car(-16.5, 3.0, Backward),
        LaneDescriptor::median(-14.5, 1.0, 0.2),
        LaneDescriptor::through(-12.5, 3.0, Backward),
        LaneDescriptor::through(-9.5, 3.0, Backward),
        LaneDescriptor::median(-7.5, 1.0, 0.2),
        LaneDescriptor::bus(-5.5, 3.0, Forward),
        LaneDescriptor::median(0.0, 8.0, 0.2),
        LaneDescriptor::bus(5.5, 3.0, Backward),
        LaneDescriptor::median(7.5, 1.0, 0.2),
        LaneDescriptor::through(9.5, 3.0, Forward),
        LaneDescriptor::through(12.5, 3.0, Forward),
        LaneDescriptor::median(14.5, 1.0, 0.2),
        LaneDescriptor::car(16.5, 3.0, Forward),
        LaneDescriptor::pedestrian(20.0, 3.0),
    ]
}

/// Forward traffic on the low side, backward on the high side.
pub fn inverted() -> Vec<LaneDescriptor> {
    vec![
        LaneDescriptor::car(-4.5, 3.0, Forward),
        LaneDescriptor::median(-2.5, 1.0, 0.0),
        LaneDescriptor::through(-0.5, 3.0, Forward),
        LaneDescriptor::through(2.5, 3.0, Backward),
        LaneDescriptor::car(5.5, 3.0, Backward),
    ]
}

/// All presets with their names.
pub fn all() -> Vec<(&'static str, Vec<LaneDescriptor>)> {
    vec![
        ("two_lane_street", two_lane_street()),
        ("one_way_street", one_way_street()),
        ("four_lane_avenue", four_lane_avenue()),
        ("continuous_flow", continuous_flow()),
        ("alternating", alternating()),
        ("boulevard", boulevard()),
        ("inverted", inverted()),
    ]
}

/// Look a preset up by name.
pub fn by_name(name: &str) -> Option<Vec<LaneDescriptor>> {
    all().into_iter().find(|(n, _)| *n == name).map(|(_, l)| l)
}
