//! Bookkeeping over detections arriving frame after frame.

use crate::model::group::ShotGroup;
use crate::model::shot::Shot;

/// Detections farther than `duplicate_radius` from every known shot.
pub fn find_new_shots(previous: &[Shot], current: &[Shot], duplicate_radius: f64) -> Vec<Shot> {
    current
        .iter()
        .filter(|detection| {
            previous
                .iter()
                .all(|known| detection.distance_to(known) > duplicate_radius)
        })
        .cloned()
        .collect()
}

/// Concatenates the groups' shots in order. The first target found wins.
pub fn merge_groups(groups: &[ShotGroup]) -> ShotGroup {
    let mut merged = ShotGroup {
        shots: Vec::with_capacity(groups.iter().map(ShotGroup::len).sum()),
        target: groups.iter().find_map(|g| g.target.clone()),
    };
    for group in groups {
        merged.shots.extend(group.shots.iter().cloned());
    }
    merged
}

pub fn filter_by_confidence(shots: &[Shot], min_confidence: f64) -> Vec<Shot> {
    shots
        .iter()
        .filter(|s| s.confidence >= min_confidence)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/tracking.rs"]
mod tests;
