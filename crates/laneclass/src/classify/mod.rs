//! Cross-section classification pipeline.
//!
//! Stages, each consuming the previous one's output:
//! 1. direction: group membership per lane (`direction::group_flags`);
//! 2. layout: position sort and the coarse `RoadLaneConfiguration`;
//! 3. displacement (complex layouts only): displaced-outer/-inner runs and
//!    CFI candidates; every other road lane is outer;
//! 4. median (two-way and complex layouts): per direction, split the outer
//!    run at a median into service and express lanes;
//! 5. groups: partition by placement + group key, aggregate flags.
//!
//! All state is local to one call; the returned `Classification` is
//! immutable. Nothing here fails or panics, whatever the geometry.

mod cfg;
pub mod direction;
pub mod displacement;
mod groups;
pub mod layout;
pub mod median;
mod result;

pub use cfg::{ClassifyCfg, TieBreak, ELEVATION_TOLERANCE, EPS_EDGE, GAP_WIDTH_FACTOR};
pub use groups::{aggregate, build_groups};
pub use result::{Classification, LaneGroup, RoadLaneConfiguration};

use crate::lane::{GroupDirection, LaneDescriptor, LaneFlags, Placement};

/// Classify with default tolerances and tie-break.
pub fn classify(lanes: &[LaneDescriptor]) -> Classification {
    classify_with(lanes, ClassifyCfg::default())
}

/// Classify one cross-section.
pub fn classify_with(lanes: &[LaneDescriptor], cfg: ClassifyCfg) -> Classification {
    let mut flags: Vec<LaneFlags> = lanes.iter().map(direction::group_flags).collect();
    let order = layout::sort_lanes(lanes, &flags, cfg.tie_break);
    let configuration = layout::configuration(lanes, &flags);
    tracing::debug!(lanes = lanes.len(), ?configuration, "layout");

    // Slots at each direction's own edge held by the other side's displaced run.
    let mut starts = [0usize; 2];
    if configuration == RoadLaneConfiguration::Complex {
        starts = displacement::scan(&order, lanes, &mut flags);
    }
    for f in flags.iter_mut() {
        if !f.groups().is_empty() && f.placement().is_none() {
            *f = f.with_placement(Some(Placement::Outer));
        }
    }

    if matches!(
        configuration,
        RoadLaneConfiguration::TwoWay | RoadLaneConfiguration::Complex
    ) {
        for (dir, &start) in GroupDirection::BOTH.iter().zip(&starts) {
            median::detect(*dir, start, &order, lanes, &mut flags, &cfg);
        }
    }

    let groups = build_groups(&order, &flags);
    let forward_flags = aggregate(&flags, LaneFlags::FORWARD_GROUP);
    let backward_flags = aggregate(&flags, LaneFlags::BACKWARD_GROUP);
    tracing::trace!(groups = groups.len(), %forward_flags, %backward_flags, "classified");

    Classification {
        lanes: flags,
        sorted_lanes: order,
        groups,
        configuration,
        forward_flags,
        backward_flags,
    }
}
