//! Flyer (outlier) detection.
//!
//! Groups below a method's minimum size are never partitioned: every point
//! comes back accepted. Boundaries are inclusive.

use crate::analysis::primitives::distances_to;
use crate::model::config::{FlyerMethod, FlyerSettings};
use crate::model::metrics::FlyerReport;
use crate::model::shot::{Located, Point, positions};
use crate::stats::{self, geometry};

#[derive(Debug, Clone, PartialEq)]
pub struct FlyerPartition<P> {
    pub accepted: Vec<P>,
    pub rejected: Vec<P>,
}

/// Splits `points` into accepted shots and flyers, preserving input order
/// within each side.
pub fn detect_flyers<P: Located + Clone>(
    points: &[P],
    method: FlyerMethod,
    threshold: f64,
) -> FlyerPartition<P> {
    let report = flyer_report(points, method, threshold);
    partition(points, &report)
}

/// String-keyed entry point. An unrecognised method name partitions nothing.
pub fn detect_flyers_by_name<P: Located + Clone>(
    points: &[P],
    method: &str,
    threshold: f64,
) -> FlyerPartition<P> {
    match method.parse::<FlyerMethod>() {
        Ok(method) => detect_flyers(points, method, threshold),
        Err(_) => FlyerPartition {
            accepted: points.to_vec(),
            rejected: Vec::new(),
        },
    }
}

pub fn partition<P: Clone>(points: &[P], report: &FlyerReport) -> FlyerPartition<P> {
    FlyerPartition {
        accepted: report.accepted.iter().map(|&i| points[i].clone()).collect(),
        rejected: report.rejected.iter().map(|&i| points[i].clone()).collect(),
    }
}

pub fn flyer_report_with<P: Located>(points: &[P], settings: &FlyerSettings) -> FlyerReport {
    flyer_report(points, settings.method, settings.threshold)
}

/// The per-point criterion, the bounds applied to it, and the resulting
/// accepted / rejected indices.
pub fn flyer_report<P: Located>(points: &[P], method: FlyerMethod, threshold: f64) -> FlyerReport {
    let n = points.len();
    if n < method.min_points() {
        return FlyerReport {
            method,
            threshold,
            evaluated: false,
            criteria: Vec::new(),
            lower_bound: None,
            upper_bound: None,
            accepted: (0..n).collect(),
            rejected: Vec::new(),
        };
    }

    let pts = positions(points);
    let (criteria, lower_bound, upper_bound) = match method {
        FlyerMethod::Deviation => {
            let d = distances_to(&pts, geometry::centroid(&pts));
            let bound = stats::mean(&d) + threshold * stats::population_std(&d);
            (d, None, bound)
        }
        FlyerMethod::Quartile => {
            let d = distances_to(&pts, geometry::centroid(&pts));
            let mut sorted = d.clone();
            sorted.sort_by(f64::total_cmp);
            let q1 = stats::percentile_sorted(&sorted, 0.25);
            let q3 = stats::percentile_sorted(&sorted, 0.75);
            let iqr = q3 - q1;
            (d, Some(q1 - threshold * iqr), q3 + threshold * iqr)
        }
        FlyerMethod::HullDistance => (leave_one_out_hull_distances(&pts), None, threshold),
        FlyerMethod::MeanDistanceRatio => {
            let d = distances_to(&pts, geometry::centroid(&pts));
            let bound = stats::mean(&d) * threshold;
            (d, None, bound)
        }
    };

    let mut accepted = Vec::with_capacity(n);
    let mut rejected = Vec::new();
    for (i, &value) in criteria.iter().enumerate() {
        let above_floor = lower_bound.is_none_or(|lo| value >= lo);
        if above_floor && value <= upper_bound {
            accepted.push(i);
        } else {
            rejected.push(i);
        }
    }

    FlyerReport {
        method,
        threshold,
        evaluated: true,
        criteria,
        lower_bound,
        upper_bound: Some(upper_bound),
        accepted,
        rejected,
    }
}

/// For each point, its distance to the convex hull of all other points.
///
/// A point's own hull vertex status says nothing about it, so the hull it is
/// measured against is built without it.
fn leave_one_out_hull_distances(points: &[Point]) -> Vec<f64> {
    let mut others = Vec::with_capacity(points.len().saturating_sub(1));
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            others.clear();
            others.extend(
                points
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &q)| q),
            );
            geometry::distance_to_hull(&geometry::convex_hull(&others), p)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/flyers.rs"]
mod tests;
