use crate::model::error::{AnalysisError, require_points};
use crate::model::group::ScoringContext;
use crate::model::metrics::{ScoringReport, ShotScore};
use crate::model::shot::{Located, Point};
use crate::stats;

/// Scores `distance` against ascending `ring_radii`.
///
/// Ring `i` (0 = tightest) is worth `len - i`; a ring's edge counts as
/// inside it. Anything beyond the last ring is a miss with score `len + 1`,
/// which [`ShotScore::points`] credits as zero.
pub fn score_distance(distance: f64, ring_radii: &[f64]) -> ShotScore {
    let n = ring_radii.len() as u32;
    match ring_radii.iter().position(|&r| distance <= r) {
        Some(ring) => ShotScore {
            score: n - ring as u32,
            ring: Some(ring),
        },
        None => ShotScore {
            score: n + 1,
            ring: None,
        },
    }
}

/// Validates the ring set, then scores every point against it.
pub fn score_points<P: Located>(
    points: &[P],
    target_center: Point,
    ring_radii: &[f64],
) -> Result<ScoringReport, AnalysisError> {
    let target = ScoringContext::new(target_center, ring_radii.to_vec())?;
    score(points, &target)
}

pub fn score<P: Located>(
    points: &[P],
    target: &ScoringContext,
) -> Result<ScoringReport, AnalysisError> {
    require_points("ring scoring", points.len(), 1)?;

    let center = target.center();
    let radii = target.ring_radii();
    let shot_scores: Vec<ShotScore> = points
        .iter()
        .map(|p| score_distance(p.position().distance_to(&center), radii))
        .collect();

    let mut hit_distribution = vec![0usize; radii.len() + 1];
    for s in &shot_scores {
        match s.ring {
            Some(ring) => hit_distribution[ring] += 1,
            None => hit_distribution[radii.len()] += 1,
        }
    }

    let credited: Vec<f64> = shot_scores.iter().map(|s| s.points() as f64).collect();
    let total_score: u32 = shot_scores.iter().map(ShotScore::points).sum();
    let max_score = shot_scores.iter().map(ShotScore::points).max().unwrap_or(0);
    let min_score = shot_scores.iter().map(ShotScore::points).min().unwrap_or(0);

    Ok(ScoringReport {
        ring_count: radii.len(),
        total_score,
        average_score: stats::mean(&credited),
        max_score,
        min_score,
        score_std: stats::population_std(&credited),
        miss_count: hit_distribution[radii.len()],
        hit_distribution,
        shot_scores,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/scoring.rs"]
mod tests;
