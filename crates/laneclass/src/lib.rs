//! Lane cross-section classification.
//!
//! Given the lanes of one road type's cross-section, compute per lane which
//! traffic side it belongs to, whether it is an outer, inner or displaced lane,
//! and which routing treatments (service/express lane, continuous-flow
//! intersection, controlled-lane exclusion) it is eligible for. Lanes are then
//! grouped and the whole layout gets one coarse `RoadLaneConfiguration`.
//!
//! The engine is a pure function: `classify(&lanes)` builds an immutable
//! `Classification` and never fails. Cache one result per road type and swap
//! the whole value when the road type is redefined.
//!
//! Layout
//! - `lane`: input descriptors and the `LaneFlags` value type.
//! - `classify`: the pipeline (direction → sort → layout → displacement →
//!   median → groups).
//! - `gen`: reproducible random cross-sections for tests and benches.

pub mod classify;
pub mod gen;
pub mod lane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classify::{
    classify, classify_with, Classification, ClassifyCfg, LaneGroup, RoadLaneConfiguration,
    TieBreak,
};
pub use lane::{
    GroupDirection, LaneDescriptor, LaneDirection, LaneFlags, LaneKind, Placement, VehicleKinds,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{
        classify, classify_with, Classification, ClassifyCfg, LaneGroup, RoadLaneConfiguration,
        TieBreak,
    };
    pub use crate::gen::{draw_cross_section, CrossSectionCfg, ReplayToken};
    pub use crate::lane::{
        GroupDirection, LaneDescriptor, LaneDirection, LaneFlags, LaneKind, Placement,
        VehicleKinds,
    };
}
