use super::*;

use chrono::DateTime;

fn scenario_a() -> Vec<Shot> {
    [(512.0, 512.0), (518.0, 508.0), (508.0, 518.0), (520.0, 520.0), (515.0, 525.0)]
        .iter()
        .map(|&(x, y)| Shot::new(x, y))
        .collect()
}

#[test]
fn test_scenario_a_progression() {
    let seq = analyze_sequence(&scenario_a()).unwrap();
    assert!((seq.first_shot_displacement - 6.604_922_406_811_453).abs() < 1e-9);
    let expected = [
        7.211_102_550_927_978,
        10.630_145_812_734_65,
        10.370_899_457_402_75,
        10.511_898_020_814_32,
    ];
    assert_eq!(seq.displacements.len(), 4);
    for (got, want) in seq.displacements.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9);
    }
    assert!((seq.shot_to_shot_displacement - 9.681_011_460_469_925).abs() < 1e-9);
    assert_eq!(seq.max_shot_displacement, seq.displacements[1]);
    assert_eq!(seq.min_shot_displacement, seq.displacements[0]);
    assert!((seq.trend_stability - 0.437_989_505_012_531_3).abs() < 1e-9);
}

#[test]
fn test_two_shots_are_enough() {
    let shots = vec![Shot::new(0.0, 0.0), Shot::new(3.0, 4.0)];
    let seq = analyze_sequence(&shots).unwrap();
    assert_eq!(seq.first_shot_displacement, 5.0);
    assert_eq!(seq.displacements, vec![5.0]);
    assert_eq!(seq.trend_stability, 1.0);
    assert_eq!(seq.shot_displacement_std, 0.0);
}

#[test]
fn test_single_shot_is_insufficient() {
    let err = analyze_sequence(&[Shot::new(1.0, 1.0)]).unwrap_err();
    assert_eq!(err, AnalysisError::insufficient("sequential analysis", 2, 1));
}

#[test]
fn test_trend_stability_bounds() {
    let line: Vec<Point> = (0..6).map(|i| Point::new(i as f64 * 2.0, 10.0 + i as f64)).collect();
    assert!((trend_stability(&line) - 1.0).abs() < 1e-12);

    let flat: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 7.0)).collect();
    assert!((trend_stability(&flat) - 1.0).abs() < 1e-12);

    let zigzag: Vec<Point> = (0..8)
        .map(|i| Point::new((i % 2) as f64 * 9.0, ((i * 5) % 7) as f64))
        .collect();
    let t = trend_stability(&zigzag);
    assert!((0.0..=1.0).contains(&t));
    assert!(t < 0.5);
}

#[test]
fn test_frame_index_sets_firing_order() {
    let shots = vec![
        Shot::new(10.0, 0.0).with_frame_index(3),
        Shot::new(0.0, 0.0).with_frame_index(1),
        Shot::new(5.0, 0.0).with_frame_index(2),
    ];
    let order: Vec<f64> = firing_order(&shots).iter().map(|s| s.x).collect();
    assert_eq!(order, vec![0.0, 5.0, 10.0]);

    let seq = analyze_sequence(&shots).unwrap();
    assert_eq!(seq.first_shot_displacement, 7.5);
}

#[test]
fn test_timestamps_take_precedence() {
    let at = |secs: i64| DateTime::from_timestamp(secs, 0).unwrap();
    let shots = vec![
        Shot::new(1.0, 0.0).with_frame_index(1).with_timestamp(at(200)),
        Shot::new(2.0, 0.0).with_frame_index(2).with_timestamp(at(100)),
    ];
    let order: Vec<f64> = firing_order(&shots).iter().map(|s| s.x).collect();
    assert_eq!(order, vec![2.0, 1.0]);
}

#[test]
fn test_partial_ordering_keys_keep_input_order() {
    let shots = vec![
        Shot::new(1.0, 0.0).with_frame_index(9),
        Shot::new(2.0, 0.0),
        Shot::new(3.0, 0.0).with_frame_index(1),
    ];
    let order: Vec<f64> = firing_order(&shots).iter().map(|s| s.x).collect();
    assert_eq!(order, vec![1.0, 2.0, 3.0]);
}
