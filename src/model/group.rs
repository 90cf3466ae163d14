use serde::{Deserialize, Serialize};

use crate::model::error::{AnalysisError, GeometryError};
use crate::model::shot::{Point, Shot};

/// Target center plus ring radii, validated once so scoring never sees an
/// unusable ring set.
///
/// Radii are ordered from the tightest ring outwards and must be finite,
/// non-negative and strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TargetSpec", into = "TargetSpec")]
pub struct ScoringContext {
    center: Point,
    ring_radii: Vec<f64>,
}

/// Unvalidated wire form of a scoring target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub center: Point,
    pub ring_radii: Vec<f64>,
}

impl ScoringContext {
    pub fn new(center: Point, ring_radii: Vec<f64>) -> Result<Self, AnalysisError> {
        if ring_radii.is_empty() {
            return Err(AnalysisError::insufficient("ring scoring", 1, 0));
        }
        let mut prev = f64::NEG_INFINITY;
        for &r in &ring_radii {
            if !r.is_finite() || r < 0.0 {
                return Err(invalid_radius(r, "ring radius must be finite and non-negative"));
            }
            if r <= prev {
                return Err(invalid_radius(r, "ring radii must be strictly ascending"));
            }
            prev = r;
        }
        Ok(Self { center, ring_radii })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn ring_radii(&self) -> &[f64] {
        &self.ring_radii
    }

    pub fn ring_count(&self) -> usize {
        self.ring_radii.len()
    }
}

fn invalid_radius(value: f64, reason: &'static str) -> AnalysisError {
    AnalysisError::computation(
        "ring scoring",
        GeometryError::InvalidParameter {
            name: "ring_radius",
            value,
            reason,
        },
    )
}

impl TryFrom<TargetSpec> for ScoringContext {
    type Error = AnalysisError;

    fn try_from(spec: TargetSpec) -> Result<Self, Self::Error> {
        ScoringContext::new(spec.center, spec.ring_radii)
    }
}

impl From<ScoringContext> for TargetSpec {
    fn from(ctx: ScoringContext) -> Self {
        TargetSpec {
            center: ctx.center,
            ring_radii: ctx.ring_radii,
        }
    }
}

/// Shots collected for one analysis, optionally with a scoring target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotGroup {
    pub shots: Vec<Shot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ScoringContext>,
}

impl ShotGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shots(shots: Vec<Shot>) -> Self {
        Self {
            shots,
            target: None,
        }
    }

    pub fn with_target(mut self, target: ScoringContext) -> Self {
        self.target = Some(target);
        self
    }

    pub fn add_shot(&mut self, shot: Shot) {
        self.shots.push(shot);
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn has_sufficient_shots(&self, min_shots: usize) -> bool {
        self.shots.len() >= min_shots
    }

    pub fn points(&self) -> Vec<Point> {
        self.shots.iter().map(Shot::point).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/group.rs"]
mod tests;
