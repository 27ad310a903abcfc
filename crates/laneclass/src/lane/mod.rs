//! Lane descriptors (input) and lane flags (output value type).
//!
//! - `LaneDescriptor`: one lane of a cross-section as supplied by the road-type
//!   loader. Immutable; the engine only reads it.
//! - `LaneFlags`: flat bitset over three independent axes (placement, group,
//!   routing permission) with named accessors per axis.

mod flags;
mod types;

pub use flags::{GroupDirection, LaneFlags, Placement};
pub use types::{LaneDescriptor, LaneDirection, LaneKind, VehicleKinds};
