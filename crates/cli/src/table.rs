//! Plain-text rendering of a classification for terminal inspection.

use laneclass::{Classification, LaneDescriptor};
use std::fmt::Write;

/// One row per lane in position order, then one row per group.
pub fn render(lanes: &[LaneDescriptor], c: &Classification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "configuration: {:?}", c.configuration());
    let _ = writeln!(
        out,
        "{:>4} {:>4} {:>9} {:>7} {:<17} {:<14} flags",
        "slot", "lane", "position", "width", "kind", "direction"
    );
    for (slot, &i) in c.sorted_lanes().iter().enumerate() {
        let lane = &lanes[i];
        let _ = writeln!(
            out,
            "{slot:>4} {i:>4} {:>9.2} {:>7.2} {:<17} {:<14} {}",
            lane.position,
            lane.width,
            format!("{:?}", lane.lane_kind),
            format!("{:?}", lane.direction),
            c.flags(i)
        );
    }
    for (g, group) in c.groups().iter().enumerate() {
        let _ = writeln!(out, "group {g}: lanes {:?} {}", group.sorted_lanes, group.flags);
    }
    let _ = writeln!(out, "forward: {}", c.forward_flags());
    let _ = writeln!(out, "backward: {}", c.backward_flags());
    out
}
