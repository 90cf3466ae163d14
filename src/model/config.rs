use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum detection confidence used by the upstream filter when a caller
/// asks for "confident shots only".
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;
/// Detections closer than this to an already known shot are the same hole.
pub const DEFAULT_DUPLICATE_RADIUS: f64 = 15.0;
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
pub const DEFAULT_CEP_PROBABILITIES: [f64; 3] = [0.5, 0.9, 0.95];

/// Outlier rule used to split a group into accepted shots and flyers.
///
/// Every variant compares one scalar per point against an inclusive bound;
/// how `threshold` enters that bound is method specific:
///
/// - `Deviation`: `mean(d) + threshold * std(d)` over distances to the centroid.
/// - `Quartile`: `[Q1 - threshold * IQR, Q3 + threshold * IQR]` over the same distances.
/// - `HullDistance`: `threshold` in coordinate units, against each point's
///   distance to the hull of the other points.
/// - `MeanDistanceRatio`: `mean(d) * threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlyerMethod {
    Deviation,
    Quartile,
    HullDistance,
    MeanDistanceRatio,
}

impl FlyerMethod {
    pub fn default_threshold(self) -> f64 {
        match self {
            FlyerMethod::Deviation => 2.0,
            FlyerMethod::Quartile => 1.5,
            FlyerMethod::HullDistance => 20.0,
            FlyerMethod::MeanDistanceRatio => 2.0,
        }
    }

    /// Fewest points for which the method partitions anything.
    pub fn min_points(self) -> usize {
        match self {
            FlyerMethod::HullDistance => 4,
            _ => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FlyerMethod::Deviation => "deviation",
            FlyerMethod::Quartile => "quartile",
            FlyerMethod::HullDistance => "hull_distance",
            FlyerMethod::MeanDistanceRatio => "mean_distance_ratio",
        }
    }

    pub fn all() -> &'static [FlyerMethod] {
        &[
            FlyerMethod::Deviation,
            FlyerMethod::Quartile,
            FlyerMethod::HullDistance,
            FlyerMethod::MeanDistanceRatio,
        ]
    }
}

impl fmt::Display for FlyerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flyer method: {0} (use deviation|quartile|hull_distance|mean_distance_ratio)")]
pub struct UnknownFlyerMethod(pub String);

impl FromStr for FlyerMethod {
    type Err = UnknownFlyerMethod;

    /// Accepts the canonical names, their kebab-case spelling, and the short
    /// keys detectors have historically been configured with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "deviation" | "std_dev" | "stddev" => Ok(FlyerMethod::Deviation),
            "quartile" | "iqr" => Ok(FlyerMethod::Quartile),
            "hull_distance" | "convex_hull" | "hull" => Ok(FlyerMethod::HullDistance),
            "mean_distance_ratio" | "distance" | "ratio" => Ok(FlyerMethod::MeanDistanceRatio),
            _ => Err(UnknownFlyerMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFlyerSettings")]
pub struct FlyerSettings {
    pub method: FlyerMethod,
    pub threshold: f64,
}

/// Wire form: the threshold may be omitted and then follows the method.
#[derive(Deserialize)]
struct RawFlyerSettings {
    #[serde(default = "default_flyer_method")]
    method: FlyerMethod,
    #[serde(default)]
    threshold: Option<f64>,
}

fn default_flyer_method() -> FlyerMethod {
    FlyerMethod::Deviation
}

impl From<RawFlyerSettings> for FlyerSettings {
    fn from(raw: RawFlyerSettings) -> Self {
        let settings = FlyerSettings::new(raw.method);
        match raw.threshold {
            Some(threshold) => settings.with_threshold(threshold),
            None => settings,
        }
    }
}

impl FlyerSettings {
    pub fn new(method: FlyerMethod) -> Self {
        Self {
            method,
            threshold: method.default_threshold(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Default for FlyerSettings {
    fn default() -> Self {
        Self::new(FlyerMethod::Deviation)
    }
}

/// Immutable analysis defaults, shared freely between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub flyers: FlyerSettings,
    pub cep_probabilities: Vec<f64>,
    pub confidence_level: f64,
    pub min_detection_confidence: f64,
    pub duplicate_radius: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            flyers: FlyerSettings::default(),
            cep_probabilities: DEFAULT_CEP_PROBABILITIES.to_vec(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            min_detection_confidence: 0.0,
            duplicate_radius: DEFAULT_DUPLICATE_RADIUS,
        }
    }
}

impl AnalysisConfig {
    pub fn with_flyers(mut self, flyers: FlyerSettings) -> Self {
        self.flyers = flyers;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
