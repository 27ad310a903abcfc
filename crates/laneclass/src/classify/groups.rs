use crate::lane::LaneFlags;

use super::result::LaneGroup;

/// Partition classified lanes by placement + group key.
///
/// Groups come out ordered by their lowest-position member and list members
/// in position order; lanes with an empty key belong to no group.
pub fn build_groups(order: &[usize], flags: &[LaneFlags]) -> Vec<LaneGroup> {
    let mut groups: Vec<LaneGroup> = Vec::new();
    for &lane in order {
        let f = flags[lane];
        let key = f.grouping_key();
        if key.is_empty() {
            continue;
        }
        match groups.iter_mut().find(|g| g.key() == key) {
            Some(g) => {
                g.sorted_lanes.push(lane);
                g.flags |= f;
            }
            None => groups.push(LaneGroup {
                sorted_lanes: vec![lane],
                flags: f,
            }),
        }
    }
    groups
}

/// OR of the flags of every lane tagged with `group`.
pub fn aggregate(flags: &[LaneFlags], group: LaneFlags) -> LaneFlags {
    flags
        .iter()
        .filter(|f| f.contains(group))
        .fold(LaneFlags::empty(), |acc, f| acc | *f)
}
