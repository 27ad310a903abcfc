//! Median detection: split one direction's outer run into a service part
//! (toward the road edge) and an express part (toward the road center).
//!
//! Geometry is evaluated in scan coordinates: `u = inward_sign * position`,
//! so "inward" is always increasing `u`. Profile points are `(u, elevation)`.

use nalgebra::Vector2;

use crate::lane::{GroupDirection, LaneDescriptor, LaneFlags, Placement, VehicleKinds};

use super::cfg::ClassifyCfg;

/// Reference lane of the moving window.
#[derive(Clone, Copy, Debug)]
struct Window {
    center: f64,
    width: f64,
    /// Leading (inward) edge and elevation.
    edge: Vector2<f64>,
}

impl Window {
    fn of(lane: &LaneDescriptor, sign: f64) -> Self {
        let center = sign * lane.position;
        Self {
            center,
            width: lane.width,
            edge: Vector2::new(center + lane.width / 2.0, lane.vertical_offset),
        }
    }

    /// Profile point relative to the leading edge: `x` inward distance,
    /// `y` rise above the reference lane.
    fn offset(&self, point: Vector2<f64>) -> Vector2<f64> {
        point - self.edge
    }

    /// Whether a profile point lies beyond the edge and below the rise bound.
    fn admits(&self, point: Vector2<f64>, cfg: &ClassifyCfg) -> bool {
        let rel = self.offset(point);
        rel.x > -cfg.eps_edge && rel.y < cfg.elevation_tolerance
    }
}

/// Contiguous median elements seen since the reference lane.
#[derive(Clone, Copy, Debug)]
struct MedianTrack {
    near: f64,
    far: f64,
    elevation: f64,
}

impl MedianTrack {
    fn width(&self) -> f64 {
        self.far - self.near
    }

    /// Near end of the run at its peak elevation.
    fn near_point(&self) -> Vector2<f64> {
        Vector2::new(self.near, self.elevation)
    }

    fn extend(track: Option<Self>, lane: &LaneDescriptor, u: f64) -> Self {
        let near = u - lane.width / 2.0;
        let far = u + lane.width / 2.0;
        match track {
            None => Self {
                near,
                far,
                elevation: lane.vertical_offset,
            },
            Some(t) => Self {
                near: t.near.min(near),
                far: t.far.max(far),
                elevation: t.elevation.max(lane.vertical_offset),
            },
        }
    }
}

/// A detected split, in steps inward from the direction's own edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MedianSplit {
    /// First scanned step of the walk.
    pub start: usize,
    /// Step of the first inner (express) lane.
    pub first_inner: usize,
    /// Step of the first opposite-only lane (or `n`).
    pub end: usize,
}

/// Whether a median separates the window from `next`.
fn splits(
    cur: &Window,
    median: Option<&MedianTrack>,
    next: &LaneDescriptor,
    sign: f64,
    cfg: &ClassifyCfg,
) -> bool {
    if let Some(m) = median {
        if cur.admits(m.near_point(), cfg)
            && m.elevation - next.vertical_offset < cfg.elevation_tolerance
        {
            return true;
        }
    }
    // Fallback for roads without an explicit median object.
    let gap = sign * next.position - cur.center;
    let median_width = median.map_or(0.0, MedianTrack::width);
    gap > cfg.gap_width_factor * (cur.width + median_width + next.width)
}

/// Walk `dir`'s lanes inward from `start` and look for a median split.
pub fn find_split(
    dir: GroupDirection,
    start: usize,
    order: &[usize],
    lanes: &[LaneDescriptor],
    flags: &[LaneFlags],
    cfg: &ClassifyCfg,
) -> Option<MedianSplit> {
    let n = order.len();
    let sign = dir.inward_sign();
    let mut window: Option<Window> = None;
    let mut median: Option<MedianTrack> = None;
    let mut first_inner = None;
    let mut end = n;
    for step in start..n {
        let lane = order[dir.slot(step, n)];
        let f = flags[lane];
        let d = &lanes[lane];
        if f.is_only(dir.opposite()) {
            end = step;
            break;
        }
        if first_inner.is_some() {
            continue;
        }
        if !f.contains(dir.flag()) {
            if d.is_road_lane() {
                continue;
            }
            if let Some(cur) = window {
                let u = sign * d.position;
                let rel = cur.offset(Vector2::new(u, d.vertical_offset));
                if rel.y >= cfg.elevation_tolerance {
                    // A tall structure ends the run.
                    median = None;
                } else if rel.x > -cfg.eps_edge {
                    median = Some(MedianTrack::extend(median, d, u));
                }
            }
            continue;
        }
        if let Some(cur) = window {
            if splits(&cur, median.as_ref(), d, sign, cfg) {
                first_inner = Some(step);
                continue;
            }
        }
        window = Some(Window::of(d, sign));
        median = None;
    }
    first_inner.map(|first_inner| MedianSplit {
        start,
        first_inner,
        end,
    })
}

/// Outer lanes before the split may serve as service lanes; outer lanes after
/// it become inner (express) lanes. Bidirectional lanes are walked by both
/// sides and keep their outer placement.
pub fn apply_split(
    dir: GroupDirection,
    split: MedianSplit,
    order: &[usize],
    lanes: &[LaneDescriptor],
    flags: &mut [LaneFlags],
) {
    let n = order.len();
    for step in split.start..split.end {
        let lane = order[dir.slot(step, n)];
        let f = flags[lane];
        if !f.contains(dir.flag())
            || f.is_bidirectional()
            || f.placement() != Some(Placement::Outer)
        {
            continue;
        }
        let d = &lanes[lane];
        flags[lane] = if step < split.first_inner {
            if d.vehicle_kinds.contains(VehicleKinds::CAR) {
                f | LaneFlags::ALLOW_SERVICE_LANE
            } else {
                f
            }
        } else {
            let mut inner = f.with_placement(Some(Placement::Inner));
            if d.allows_custom_connections {
                inner |= LaneFlags::FORBID_CONTROLLED_LANES;
            } else if d.is_pure_vehicle_lane() {
                inner |= LaneFlags::ALLOW_EXPRESS_LANE;
            }
            inner
        };
    }
}

/// Detect and apply the split for `dir`. Returns whether a split was found.
pub fn detect(
    dir: GroupDirection,
    start: usize,
    order: &[usize],
    lanes: &[LaneDescriptor],
    flags: &mut [LaneFlags],
    cfg: &ClassifyCfg,
) -> bool {
    match find_split(dir, start, order, lanes, flags, cfg) {
        Some(split) => {
            tracing::debug!(
                ?dir,
                first_inner = split.first_inner,
                end = split.end,
                "median split"
            );
            apply_split(dir, split, order, lanes, flags);
            true
        }
        None => false,
    }
}
