//! Print the classification of every named preset.
//!
//! Usage:
//!   cargo run -p laneclass --example presets
//!   cargo run -p laneclass --example presets -- boulevard

use laneclass::classify;
use laneclass::gen::presets;

fn main() {
    let filter = std::env::args().nth(1);
    for (name, lanes) in presets::all() {
        if filter.as_deref().is_some_and(|f| f != name) {
            continue;
        }
        let c = classify(&lanes);
        println!("{name}: {:?}", c.configuration());
        for (g, group) in c.groups().iter().enumerate() {
            println!("  group {g}: {:?} {}", group.sorted_lanes, group.flags);
        }
    }
}
