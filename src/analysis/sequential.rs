//! Shot-to-shot progression within a string of fire.

use crate::model::error::{AnalysisError, require_points};
use crate::model::metrics::SequentialMetrics;
use crate::model::shot::{Point, Shot};
use crate::stats;

pub const MIN_POINTS_SEQUENCE: usize = 2;
pub const MIN_POINTS_TREND: usize = 3;

/// Firing order: by timestamp when every shot has one, else by frame index
/// when every shot has one, else as given. Ties keep input order.
pub fn firing_order(shots: &[Shot]) -> Vec<&Shot> {
    let mut ordered: Vec<&Shot> = shots.iter().collect();
    if shots.iter().all(|s| s.timestamp.is_some()) {
        ordered.sort_by_key(|s| s.timestamp);
    } else if shots.iter().all(|s| s.frame_index.is_some()) {
        ordered.sort_by_key(|s| s.frame_index);
    }
    ordered
}

pub fn analyze_sequence(shots: &[Shot]) -> Result<SequentialMetrics, AnalysisError> {
    require_points("sequential analysis", shots.len(), MIN_POINTS_SEQUENCE)?;

    let ordered: Vec<Point> = firing_order(shots).into_iter().map(Shot::point).collect();
    let n = ordered.len();

    let (total_x, total_y) = ordered
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let first = ordered[0];
    let rest = (n - 1) as f64;
    let rest_centroid = Point::new((total_x - first.x) / rest, (total_y - first.y) / rest);
    let first_shot_displacement = first.distance_to(&rest_centroid);

    let mut displacements = Vec::with_capacity(n - 1);
    let (mut sx, mut sy) = (first.x, first.y);
    for (i, p) in ordered.iter().enumerate().skip(1) {
        let before = Point::new(sx / i as f64, sy / i as f64);
        displacements.push(p.distance_to(&before));
        sx += p.x;
        sy += p.y;
    }

    let (min_shot_displacement, max_shot_displacement) = stats::min_max(&displacements);
    Ok(SequentialMetrics {
        first_shot_displacement,
        shot_to_shot_displacement: stats::mean(&displacements),
        max_shot_displacement,
        min_shot_displacement,
        shot_displacement_std: stats::population_std(&displacements),
        trend_stability: trend_stability(&ordered),
        displacements,
    })
}

/// Mean of the per-axis R² of coordinate against shot index, in `[0, 1]`.
/// Fewer than three points are trivially stable.
pub fn trend_stability(ordered: &[Point]) -> f64 {
    if ordered.len() < MIN_POINTS_TREND {
        return 1.0;
    }
    let xs: Vec<f64> = ordered.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = ordered.iter().map(|p| p.y).collect();
    let r2 = 0.5 * (stats::r_squared_against_index(&xs) + stats::r_squared_against_index(&ys));
    r2.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/sequential.rs"]
mod tests;
