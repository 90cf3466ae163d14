use serde::Serialize;

use crate::model::config::FlyerMethod;
use crate::model::shot::Point;

/// Headline numbers for one shot group.
///
/// Fields that could not be computed for the group (too few shots, no
/// target, degenerate hull) stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SotaMetrics {
    pub total_shots: usize,
    pub mpi: Point,
    pub extreme_spread: f64,
    pub mean_radius: f64,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
    pub convex_hull_area: f64,
    pub first_shot_displacement: f64,
    pub shot_to_shot_displacement: f64,
    pub flyer_count: usize,
    pub total_score: u32,
    pub average_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisInterval {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl AxisInterval {
    pub fn half_width(&self) -> f64 {
        0.5 * (self.upper - self.lower)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceIntervals {
    pub level: f64,
    pub x: AxisInterval,
    pub y: AxisInterval,
}

/// Distances of every shot to the MPI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DispersionMetrics {
    pub mean_distance: f64,
    pub median_distance: f64,
    pub max_distance: f64,
    pub min_distance: f64,
    pub range_distance: f64,
}

/// Detector confidence over the shots that reported one (> 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionConfidence {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CepRadius {
    pub probability: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCharacteristics {
    pub total_shots: usize,
    pub mpi: Point,
    pub extreme_spread: f64,
    pub mean_radius: f64,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
    pub combined_std_dev: f64,
    pub cep: Vec<CepRadius>,
    pub figure_of_merit: f64,
    pub dispersion: DispersionMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_intervals: Option<ConfidenceIntervals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_confidence: Option<DetectionConfidence>,
}

impl GroupCharacteristics {
    pub fn cep_at(&self, probability: f64) -> Option<f64> {
        self.cep
            .iter()
            .find(|c| (c.probability - probability).abs() < 1e-12)
            .map(|c| c.radius)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequentialMetrics {
    pub first_shot_displacement: f64,
    /// Mean of `displacements`.
    pub shot_to_shot_displacement: f64,
    pub max_shot_displacement: f64,
    pub min_shot_displacement: f64,
    pub shot_displacement_std: f64,
    /// Distance of shot `i + 1` to the centroid of shots `0..=i`, in firing order.
    pub displacements: Vec<f64>,
    pub trend_stability: f64,
}

/// Ring hit for one shot. `ring` is `None` for a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShotScore {
    pub score: u32,
    pub ring: Option<usize>,
}

impl ShotScore {
    pub fn is_miss(&self) -> bool {
        self.ring.is_none()
    }

    /// Points credited in totals and averages; a miss earns nothing.
    pub fn points(&self) -> u32 {
        if self.is_miss() { 0 } else { self.score }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringReport {
    pub ring_count: usize,
    pub shot_scores: Vec<ShotScore>,
    pub total_score: u32,
    pub average_score: f64,
    pub max_score: u32,
    pub min_score: u32,
    pub score_std: f64,
    /// One bucket per ring (tightest first) followed by the miss bucket.
    pub hit_distribution: Vec<usize>,
    pub miss_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlyerReport {
    pub method: FlyerMethod,
    pub threshold: f64,
    /// False when the group was too small for the method; everything is
    /// then accepted and `criteria` is empty.
    pub evaluated: bool,
    /// The method's per-point value, in input order.
    pub criteria: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    pub accepted: Vec<usize>,
    pub rejected: Vec<usize>,
}

impl FlyerReport {
    pub fn flyer_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Everything the engine can say about one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub metrics: SotaMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<GroupCharacteristics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequential: Option<SequentialMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringReport>,
    pub flyers: FlyerReport,
}
