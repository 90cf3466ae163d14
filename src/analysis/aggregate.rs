use crate::analysis::flyers::flyer_report_with;
use crate::analysis::primitives::{self, MIN_POINTS_HULL, MIN_POINTS_SPREAD};
use crate::analysis::scoring;
use crate::analysis::sequential::{self, MIN_POINTS_SEQUENCE};
use crate::model::config::{AnalysisConfig, FlyerSettings};
use crate::model::error::{AnalysisError, require_points};
use crate::model::group::ShotGroup;
use crate::model::metrics::{AnalysisReport, SotaMetrics};

/// Runs the full analysis for shot groups under one fixed configuration.
///
/// Holds no state besides its configuration, so a single value can serve
/// any number of groups, from any thread.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Headline metrics only.
    pub fn aggregate(&self, group: &ShotGroup) -> Result<SotaMetrics, AnalysisError> {
        self.analyze(group).map(|report| report.metrics)
    }

    /// Headline metrics plus every optional section that could be computed.
    ///
    /// Only an empty group fails. Any optional section that cannot be
    /// computed is left out and its headline fields stay zero.
    pub fn analyze(&self, group: &ShotGroup) -> Result<AnalysisReport, AnalysisError> {
        let shots = &group.shots;
        require_points("shot group analysis", shots.len(), 1)?;

        let mpi = primitives::mean_point_of_impact(shots)?;
        let (std_dev_x, std_dev_y) = primitives::standard_deviations(shots)?;
        let mut metrics = SotaMetrics {
            total_shots: shots.len(),
            mpi,
            extreme_spread: if shots.len() >= MIN_POINTS_SPREAD {
                primitives::extreme_spread(shots)?
            } else {
                0.0
            },
            mean_radius: primitives::mean_radius(shots, Some(mpi))?,
            std_dev_x,
            std_dev_y,
            ..SotaMetrics::default()
        };

        let characteristics = optional(
            "group characteristics",
            primitives::group_characteristics(shots, &self.config),
        );

        if shots.len() >= MIN_POINTS_HULL {
            if let Some(area) = optional("convex hull area", primitives::convex_hull_area(shots)) {
                metrics.convex_hull_area = area;
            }
        }

        let sequential = if shots.len() >= MIN_POINTS_SEQUENCE {
            optional("sequential analysis", sequential::analyze_sequence(shots))
        } else {
            None
        };
        if let Some(seq) = &sequential {
            metrics.first_shot_displacement = seq.first_shot_displacement;
            metrics.shot_to_shot_displacement = seq.shot_to_shot_displacement;
        }

        let flyers = flyer_report_with(shots, &self.config.flyers);
        metrics.flyer_count = flyers.flyer_count();

        let scoring = match &group.target {
            Some(target) => optional("ring scoring", scoring::score(shots, target)),
            None => {
                tracing::trace!("no scoring target, ring scoring skipped");
                None
            }
        };
        if let Some(report) = &scoring {
            metrics.total_score = report.total_score;
            metrics.average_score = report.average_score;
        }

        Ok(AnalysisReport {
            metrics,
            characteristics,
            sequential,
            scoring,
            flyers,
        })
    }
}

/// Headline metrics for `group` with default settings and the given flyer rule.
pub fn aggregate(group: &ShotGroup, flyers: FlyerSettings) -> Result<SotaMetrics, AnalysisError> {
    Analyzer::new(AnalysisConfig::default().with_flyers(flyers)).aggregate(group)
}

fn optional<T>(section: &'static str, result: Result<T, AnalysisError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(section, error = %err, "optional section skipped");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/aggregate.rs"]
mod tests;
