//! Displacement scan for interleaved (complex) layouts.
//!
//! Both phases are written once and parameterized by the working direction.
//! Walks are expressed in "steps inward from an edge" (`GroupDirection::slot`).
//! Bidirectional lanes are neutral here: they never stop a run and never take
//! a displaced placement; the outer fallback places them afterwards.

use crate::lane::{GroupDirection, LaneDescriptor, LaneFlags, Placement};

/// Phase A: mark `dir` lanes stranded at the far edge (the opposite side's own
/// edge) as displaced-outer.
///
/// Returns how many sorted slots, counted from that edge, precede the first
/// lane of the opposite group. The opposite direction's walks start there.
pub fn mark_displaced_outer(
    dir: GroupDirection,
    order: &[usize],
    flags: &mut [LaneFlags],
) -> usize {
    let n = order.len();
    let far = dir.opposite();
    let mut step = 0;
    while step < n {
        let lane = order[far.slot(step, n)];
        let f = flags[lane];
        if f.is_only(far) {
            break;
        }
        if f.is_only(dir) {
            flags[lane] = f.with_placement(Some(Placement::DisplacedOuter));
        }
        step += 1;
    }
    if step > 0 {
        tracing::trace!(?dir, run = step, "displaced-outer boundary");
    }
    step
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Before the first own-direction lane.
    Leading,
    /// Inside the own-direction run at the own edge.
    OuterRun,
    /// Crossing the opposite run that closes the outer run.
    Gap,
    /// Anything further is displaced to the inside.
    Inner,
}

/// Phase B: starting `start` slots inside `dir`'s own edge, mark the first run
/// of `dir` lanes outer and every later `dir` lane (past an opposite run)
/// displaced-inner, until reaching a displaced-outer lane.
///
/// Displaced-inner lanes that accept custom connections are excluded from
/// controlled-lane routing; pure through vehicle lanes become CFI candidates.
pub fn mark_outer_and_displaced_inner(
    dir: GroupDirection,
    start: usize,
    order: &[usize],
    lanes: &[LaneDescriptor],
    flags: &mut [LaneFlags],
) {
    let n = order.len();
    let opp = dir.opposite();
    let mut stage = Stage::Leading;
    for step in start..n {
        let lane = order[dir.slot(step, n)];
        let f = flags[lane];
        if f.placement() == Some(Placement::DisplacedOuter) {
            break;
        }
        let own = f.is_only(dir);
        let other = f.is_only(opp);
        stage = match stage {
            Stage::Leading | Stage::OuterRun if own => {
                flags[lane] = f.with_placement(Some(Placement::Outer));
                Stage::OuterRun
            }
            Stage::OuterRun if other => Stage::Gap,
            Stage::Gap | Stage::Inner if own => {
                flags[lane] = displaced_inner(f, &lanes[lane]);
                tracing::trace!(?dir, lane, "displaced-inner");
                Stage::Inner
            }
            s => s,
        };
    }
}

fn displaced_inner(f: LaneFlags, lane: &LaneDescriptor) -> LaneFlags {
    let mut f = f.with_placement(Some(Placement::DisplacedInner));
    if lane.allows_custom_connections {
        f |= LaneFlags::FORBID_CONTROLLED_LANES;
    } else if lane.is_pure_vehicle_lane() {
        f |= LaneFlags::ALLOW_CFI;
    }
    f
}

/// Run both phases for both directions.
///
/// Returns, per direction, how many slots from that direction's own edge are
/// occupied by the opposite direction's displaced-outer run.
pub fn scan(order: &[usize], lanes: &[LaneDescriptor], flags: &mut [LaneFlags]) -> [usize; 2] {
    // Phase A for `dir` measures from the opposite edge, so it is the start
    // offset for the opposite direction.
    let from_backward_edge = mark_displaced_outer(GroupDirection::Forward, order, flags);
    let from_forward_edge = mark_displaced_outer(GroupDirection::Backward, order, flags);
    let starts = [from_forward_edge, from_backward_edge];
    for (dir, &start) in GroupDirection::BOTH.iter().zip(&starts) {
        mark_outer_and_displaced_inner(*dir, start, order, lanes, flags);
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::direction::group_flags;
    use crate::lane::LaneDirection::{self, Backward, Both, Forward};

    fn run(dirs: &[LaneDirection]) -> (Vec<LaneFlags>, [usize; 2]) {
        let lanes: Vec<_> = dirs
            .iter()
            .enumerate()
            .map(|(i, d)| LaneDescriptor::through(i as f64 * 3.0, 3.0, *d))
            .collect();
        let mut flags: Vec<_> = lanes.iter().map(group_flags).collect();
        let order: Vec<usize> = (0..lanes.len()).collect();
        let starts = scan(&order, &lanes, &mut flags);
        (flags, starts)
    }

    #[test]
    fn stranded_edge_lanes_are_displaced_outer() {
        // F F B B F B: forward lanes 0,1 sit at the backward edge, backward
        // lane 5 sits at the forward edge.
        let (flags, starts) = run(&[Forward, Forward, Backward, Backward, Forward, Backward]);
        assert_eq!(flags[0].placement(), Some(Placement::DisplacedOuter));
        assert_eq!(flags[1].placement(), Some(Placement::DisplacedOuter));
        assert_eq!(flags[5].placement(), Some(Placement::DisplacedOuter));
        assert_eq!(starts, [1, 2]);
        // Forward walk: starts past lane 5, lane 4 is its outer run, then the
        // backward run, then the displaced-outer lane 1 stops it.
        assert_eq!(flags[4].placement(), Some(Placement::Outer));
        // Backward walk: starts past lanes 0,1; lanes 2,3 outer; lane 4 closes.
        assert_eq!(flags[2].placement(), Some(Placement::Outer));
        assert_eq!(flags[3].placement(), Some(Placement::Outer));
    }

    #[test]
    fn lanes_past_the_opposite_run_are_displaced_inner() {
        let (flags, starts) = run(&[Backward, Forward, Forward, Backward, Backward, Forward]);
        assert_eq!(starts, [0, 0]);
        assert_eq!(flags[0], LaneFlags::OUTER_BACKWARD);
        assert_eq!(flags[1], LaneFlags::DISPLACED_INNER_FORWARD | LaneFlags::ALLOW_CFI);
        assert_eq!(flags[2], LaneFlags::DISPLACED_INNER_FORWARD | LaneFlags::ALLOW_CFI);
        assert_eq!(flags[3], LaneFlags::DISPLACED_INNER_BACKWARD | LaneFlags::ALLOW_CFI);
        assert_eq!(flags[4], LaneFlags::DISPLACED_INNER_BACKWARD | LaneFlags::ALLOW_CFI);
        assert_eq!(flags[5], LaneFlags::OUTER_FORWARD);
    }

    #[test]
    fn bidirectional_lanes_stay_unplaced() {
        let (flags, _) = run(&[Backward, Both, Forward, Backward, Forward]);
        assert_eq!(flags[1], LaneFlags::GROUP);
    }
}
