//! Position sort and the coarse layout decision.

use std::cmp::Ordering;

use crate::lane::{LaneDescriptor, LaneFlags};

use super::cfg::TieBreak;
use super::result::RoadLaneConfiguration;

/// Total-order key for a position; `-0.0` and `0.0` compare equal.
#[inline]
fn position_key(p: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        p
    }
}

#[inline]
fn cmp_position(a: f64, b: f64) -> Ordering {
    position_key(a).total_cmp(&position_key(b))
}

/// Lane indices ordered by lateral position, ties broken by `tie_break`
/// and then by input order.
pub fn sort_lanes(
    lanes: &[LaneDescriptor],
    groups: &[LaneFlags],
    tie_break: TieBreak,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..lanes.len()).collect();
    order.sort_by(|&a, &b| {
        cmp_position(lanes[a].position, lanes[b].position)
            .then_with(|| tie_break.band(groups[a]).cmp(&tie_break.band(groups[b])))
    });
    order
}

/// Closed position range of one direction group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    fn of<I: IntoIterator<Item = f64>>(positions: I) -> Option<Span> {
        positions.into_iter().fold(None, |acc, p| match acc {
            None => Some(Span { min: p, max: p }),
            Some(s) => Some(Span {
                min: s.min.min(p),
                max: s.max.max(p),
            }),
        })
    }
}

fn span_of(lanes: &[LaneDescriptor], groups: &[LaneFlags], flag: LaneFlags) -> Option<Span> {
    Span::of(
        lanes
            .iter()
            .zip(groups)
            .filter(|(_, g)| g.contains(flag))
            .map(|(l, _)| l.position),
    )
}

/// Decide the layout from the forward and backward position ranges.
pub fn configuration(lanes: &[LaneDescriptor], groups: &[LaneFlags]) -> RoadLaneConfiguration {
    let forward = span_of(lanes, groups, LaneFlags::FORWARD_GROUP);
    let backward = span_of(lanes, groups, LaneFlags::BACKWARD_GROUP);
    match (forward, backward) {
        (Some(f), Some(b)) => {
            if b.max <= f.min {
                RoadLaneConfiguration::TwoWay
            } else if f.max <= b.min {
                RoadLaneConfiguration::Inverted
            } else {
                RoadLaneConfiguration::Complex
            }
        }
        _ => RoadLaneConfiguration::OneWay,
    }
}
