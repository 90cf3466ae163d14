use super::*;

use crate::model::config::FlyerMethod;
use crate::model::group::ScoringContext;
use crate::model::shot::{Point, Shot};

fn scenario_a() -> ShotGroup {
    ShotGroup::from_shots(
        [(512.0, 512.0), (518.0, 508.0), (508.0, 518.0), (520.0, 520.0), (515.0, 525.0)]
            .iter()
            .map(|&(x, y)| Shot::new(x, y))
            .collect(),
    )
}

#[test]
fn test_scenario_a_headline_metrics() {
    let m = Analyzer::default().aggregate(&scenario_a()).unwrap();
    assert_eq!(m.total_shots, 5);
    assert!((m.mpi.x - 514.6).abs() < 1e-9);
    assert!((m.mpi.y - 516.6).abs() < 1e-9);
    assert!((m.extreme_spread - 17.262_676_501_632_07).abs() < 1e-9);
    assert!((m.mean_radius - 7.213_846_466_049_773).abs() < 1e-9);
    assert!((m.std_dev_x - 4.270_831_300_812_524_5).abs() < 1e-9);
    assert!((m.std_dev_y - 5.986_651_818_838_306).abs() < 1e-9);
    assert!((m.convex_hull_area - 115.0).abs() < 1e-9);
    assert!((m.first_shot_displacement - 6.604_922_406_811_453).abs() < 1e-9);
    assert!((m.shot_to_shot_displacement - 9.681_011_460_469_925).abs() < 1e-9);
    assert_eq!(m.flyer_count, 0);
    assert_eq!(m.total_score, 0);
    assert_eq!(m.average_score, 0.0);
}

#[test]
fn test_flyer_is_counted() {
    let mut group = scenario_a();
    group.add_shot(Shot::new(600.0, 600.0));
    let m = aggregate(&group, FlyerSettings::new(FlyerMethod::HullDistance)).unwrap();
    assert_eq!(m.flyer_count, 1);
    assert_eq!(m.total_shots, 6);
    assert!((m.convex_hull_area - 915.0).abs() < 1e-9);
}

#[test]
fn test_scoring_fills_score_fields() {
    let target = ScoringContext::new(Point::new(512.0, 512.0), vec![5.0, 10.0, 15.0]).unwrap();
    let report = Analyzer::default()
        .analyze(&scenario_a().with_target(target))
        .unwrap();
    let scoring = report.scoring.as_ref().unwrap();
    assert_eq!(report.metrics.total_score, scoring.total_score);
    assert_eq!(report.metrics.average_score, scoring.average_score);
    // distances 0, 7.2, 7.2, 11.3, 13.3
    assert_eq!(scoring.total_score, 3 + 2 + 2 + 1 + 1);
}

#[test]
fn test_single_shot_degrades_gracefully() {
    let group = ShotGroup::from_shots(vec![Shot::new(3.0, 4.0)]);
    let report = Analyzer::default().analyze(&group).unwrap();
    let m = &report.metrics;
    assert_eq!(m.total_shots, 1);
    assert_eq!(m.mpi, Point::new(3.0, 4.0));
    assert_eq!(m.extreme_spread, 0.0);
    assert_eq!(m.mean_radius, 0.0);
    assert_eq!(m.convex_hull_area, 0.0);
    assert_eq!(m.first_shot_displacement, 0.0);
    assert_eq!(m.flyer_count, 0);
    assert!(report.sequential.is_none());
    assert!(report.scoring.is_none());
    assert!(!report.flyers.evaluated);
    assert!(report.characteristics.is_some());
}

#[test]
fn test_collinear_group_leaves_hull_area_zero() {
    let group = ShotGroup::from_shots(vec![
        Shot::new(0.0, 0.0),
        Shot::new(1.0, 1.0),
        Shot::new(2.0, 2.0),
        Shot::new(3.0, 3.0),
    ]);
    let m = Analyzer::default().aggregate(&group).unwrap();
    assert_eq!(m.convex_hull_area, 0.0);
    assert!(m.extreme_spread > 0.0);
}

#[test]
fn test_empty_group_fails() {
    let err = Analyzer::default().aggregate(&ShotGroup::new()).unwrap_err();
    assert!(err.is_insufficient_data());
}

#[test]
fn test_aggregation_is_repeatable() {
    let analyzer = Analyzer::default();
    let group = scenario_a();
    assert_eq!(analyzer.analyze(&group).unwrap(), analyzer.analyze(&group).unwrap());
}

#[test]
fn test_bad_cep_config_only_drops_characteristics() {
    let config = AnalysisConfig {
        cep_probabilities: vec![1.5],
        ..AnalysisConfig::default()
    };
    let report = Analyzer::new(config).analyze(&scenario_a()).unwrap();
    assert!(report.characteristics.is_none());
    assert!((report.metrics.extreme_spread - 17.262_676_501_632_07).abs() < 1e-9);
}
