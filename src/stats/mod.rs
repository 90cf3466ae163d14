//! Scalar statistics over `f64` slices.
//!
//! All helpers are total: empty input yields `0.0` rather than `NaN`, and
//! callers enforce their own minimum sample sizes.

pub mod geometry;
pub mod student_t;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`).
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / values.len() as f64).sqrt()
}

/// Sample standard deviation (divides by `n - 1`).
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

pub fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

/// Percentile with linear interpolation between closest ranks, `p` in `[0, 1]`.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, p)
}

pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = (sorted.len() - 1) as f64 * p;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn median(values: &[f64]) -> f64 {
    percentile(values, 0.5)
}

/// Coefficient of determination of the least-squares line `values ~ index`.
///
/// A series with no variance is fitted exactly by a flat line and scores 1.
pub fn r_squared_against_index(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 1.0;
    }
    let mean_t = (n - 1) as f64 / 2.0;
    let mean_v = mean(values);
    let mut s_tt = 0.0;
    let mut s_vv = 0.0;
    let mut s_tv = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let dt = i as f64 - mean_t;
        let dv = v - mean_v;
        s_tt += dt * dt;
        s_vv += dv * dv;
        s_tv += dt * dv;
    }
    if s_vv <= f64::EPSILON * f64::EPSILON * (1.0 + mean_v * mean_v) {
        return 1.0;
    }
    let r2 = (s_tv * s_tv) / (s_tt * s_vv);
    r2.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/mod.rs"]
mod tests;
