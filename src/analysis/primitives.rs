//! Central tendency and dispersion of a point set.
//!
//! Each function states its minimum point count and fails with
//! `InsufficientData` below it.

use crate::model::config::AnalysisConfig;
use crate::model::error::{AnalysisError, GeometryError, require_points, require_probability};
use crate::model::metrics::{
    AxisInterval, CepRadius, ConfidenceIntervals, DetectionConfidence, DispersionMetrics,
    GroupCharacteristics,
};
use crate::model::shot::{Located, Point, Shot, positions};
use crate::stats::{self, geometry, student_t};

pub const MIN_POINTS_SPREAD: usize = 2;
pub const MIN_POINTS_INTERVAL: usize = 3;
pub const MIN_POINTS_HULL: usize = 3;
pub const MIN_POINTS_CEP: usize = 3;
pub const MIN_POINTS_FOM: usize = 3;

pub fn mean_point_of_impact<P: Located>(points: &[P]) -> Result<Point, AnalysisError> {
    require_points("mean point of impact", points.len(), 1)?;
    Ok(geometry::centroid(&positions(points)))
}

/// Largest pairwise distance.
pub fn extreme_spread<P: Located>(points: &[P]) -> Result<f64, AnalysisError> {
    require_points("extreme spread", points.len(), MIN_POINTS_SPREAD)?;
    let pts = positions(points);
    let mut max = 0.0f64;
    for (i, a) in pts.iter().enumerate() {
        for b in &pts[i + 1..] {
            max = max.max(a.distance_to(b));
        }
    }
    Ok(max)
}

/// Mean distance to `center`, or to the MPI when no center is given.
pub fn mean_radius<P: Located>(points: &[P], center: Option<Point>) -> Result<f64, AnalysisError> {
    require_points("mean radius", points.len(), 1)?;
    let pts = positions(points);
    let center = center.unwrap_or_else(|| geometry::centroid(&pts));
    Ok(stats::mean(&distances_to(&pts, center)))
}

/// Population standard deviation of x and of y.
pub fn standard_deviations<P: Located>(points: &[P]) -> Result<(f64, f64), AnalysisError> {
    require_points("standard deviation", points.len(), 1)?;
    let (xs, ys) = axes(points);
    Ok((stats::population_std(&xs), stats::population_std(&ys)))
}

/// Two-sided t-interval for the mean of each axis, `n - 1` degrees of freedom.
pub fn confidence_intervals<P: Located>(
    points: &[P],
    level: f64,
) -> Result<ConfidenceIntervals, AnalysisError> {
    const OP: &str = "confidence interval";
    require_points(OP, points.len(), MIN_POINTS_INTERVAL)?;
    require_probability(OP, "confidence_level", level)?;

    let n = points.len() as f64;
    let t_critical = student_t::quantile(1.0 - (1.0 - level) / 2.0, n - 1.0);
    let (xs, ys) = axes(points);
    let interval = |values: &[f64]| {
        let mean = stats::mean(values);
        let margin = t_critical * stats::sample_std(values) / n.sqrt();
        AxisInterval {
            mean,
            lower: mean - margin,
            upper: mean + margin,
        }
    };
    Ok(ConfidenceIntervals {
        level,
        x: interval(&xs),
        y: interval(&ys),
    })
}

/// Area of the convex hull. Collinear or coincident input is rejected as
/// degenerate rather than reported as zero.
pub fn convex_hull_area<P: Located>(points: &[P]) -> Result<f64, AnalysisError> {
    const OP: &str = "convex hull area";
    require_points(OP, points.len(), MIN_POINTS_HULL)?;
    let hull = geometry::convex_hull(&positions(points));
    if hull.len() < 3 {
        return Err(AnalysisError::computation(OP, GeometryError::Degenerate));
    }
    Ok(geometry::polygon_area(&hull))
}

/// Radius around the centroid holding fraction `probability` of the points.
pub fn circular_error_probable<P: Located>(
    points: &[P],
    probability: f64,
) -> Result<f64, AnalysisError> {
    const OP: &str = "circular error probable";
    require_points(OP, points.len(), MIN_POINTS_CEP)?;
    require_probability(OP, "probability", probability)?;
    let pts = positions(points);
    let center = geometry::centroid(&pts);
    Ok(stats::percentile(&distances_to(&pts, center), probability))
}

/// `extreme_spread / mean_radius * 100`. Zero below three points or when
/// every point sits on the centroid.
pub fn figure_of_merit<P: Located>(points: &[P]) -> f64 {
    if points.len() < MIN_POINTS_FOM {
        return 0.0;
    }
    let (Ok(spread), Ok(radius)) = (extreme_spread(points), mean_radius(points, None)) else {
        return 0.0;
    };
    if radius > 0.0 {
        spread / radius * 100.0
    } else {
        0.0
    }
}

pub fn dispersion<P: Located>(points: &[P]) -> Result<DispersionMetrics, AnalysisError> {
    require_points("dispersion", points.len(), 1)?;
    let pts = positions(points);
    let center = geometry::centroid(&pts);
    let distances = distances_to(&pts, center);
    let (min_distance, max_distance) = stats::min_max(&distances);
    Ok(DispersionMetrics {
        mean_distance: stats::mean(&distances),
        median_distance: stats::median(&distances),
        max_distance,
        min_distance,
        range_distance: max_distance - min_distance,
    })
}

/// Summary of detector confidence over shots that reported a positive one.
pub fn detection_confidence(shots: &[Shot]) -> Option<DetectionConfidence> {
    let values: Vec<f64> = shots
        .iter()
        .map(|s| s.confidence)
        .filter(|&c| c > 0.0)
        .collect();
    if values.is_empty() {
        return None;
    }
    let (min, max) = stats::min_max(&values);
    Some(DetectionConfidence {
        count: values.len(),
        mean: stats::mean(&values),
        min,
        max,
    })
}

/// Every single-group descriptor the primitives offer. Metrics that need
/// more points than the group holds are left at zero or omitted.
pub fn group_characteristics(
    shots: &[Shot],
    config: &AnalysisConfig,
) -> Result<GroupCharacteristics, AnalysisError> {
    require_points("group characteristics", shots.len(), 1)?;

    let mpi = mean_point_of_impact(shots)?;
    let extreme_spread = if shots.len() >= MIN_POINTS_SPREAD {
        extreme_spread(shots)?
    } else {
        0.0
    };
    let mean_radius = mean_radius(shots, Some(mpi))?;
    let (std_dev_x, std_dev_y) = standard_deviations(shots)?;

    let mut cep = Vec::new();
    if shots.len() >= MIN_POINTS_CEP {
        for &probability in &config.cep_probabilities {
            cep.push(CepRadius {
                probability,
                radius: circular_error_probable(shots, probability)?,
            });
        }
    }

    let confidence_intervals = if shots.len() >= MIN_POINTS_INTERVAL {
        Some(confidence_intervals(shots, config.confidence_level)?)
    } else {
        None
    };

    Ok(GroupCharacteristics {
        total_shots: shots.len(),
        mpi,
        extreme_spread,
        mean_radius,
        std_dev_x,
        std_dev_y,
        combined_std_dev: std_dev_x.hypot(std_dev_y),
        cep,
        figure_of_merit: figure_of_merit(shots),
        dispersion: dispersion(shots)?,
        confidence_intervals,
        detection_confidence: detection_confidence(shots),
    })
}

pub(crate) fn distances_to(points: &[Point], center: Point) -> Vec<f64> {
    points.iter().map(|p| p.distance_to(&center)).collect()
}

fn axes<P: Located>(points: &[P]) -> (Vec<f64>, Vec<f64>) {
    points
        .iter()
        .map(|p| {
            let pos = p.position();
            (pos.x, pos.y)
        })
        .unzip()
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/primitives.rs"]
mod tests;
