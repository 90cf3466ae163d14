use super::*;

const RADII: [f64; 4] = [50.0, 100.0, 150.0, 200.0];

fn center() -> Point {
    Point::new(512.0, 512.0)
}

#[test]
fn test_ring_edge_counts_as_inside() {
    let s = score_distance(50.0, &RADII);
    assert_eq!(s.score, 4);
    assert_eq!(s.ring, Some(0));
    assert!(!s.is_miss());
}

#[test]
fn test_beyond_last_ring_is_a_miss() {
    let s = score_distance(250.0, &RADII);
    assert_eq!(s.score, 5);
    assert_eq!(s.ring, None);
    assert!(s.is_miss());
    assert_eq!(s.points(), 0);

    assert_eq!(score_distance(200.0, &RADII).score, 1);
    assert_eq!(score_distance(200.000_1, &RADII).score, 5);
}

#[test]
fn test_score_is_monotone_in_distance() {
    let mut last = u32::MAX;
    for step in 0..=30 {
        let s = score_distance(step as f64 * 10.0, &RADII).points();
        assert!(s <= last);
        last = s;
    }
}

#[test]
fn test_score_points_report() {
    let pts = vec![
        Point::new(562.0, 512.0),
        Point::new(512.0, 762.0),
        Point::new(512.0, 612.0),
        Point::new(512.0, 512.0),
    ];
    let report = score_points(&pts, center(), &RADII).unwrap();
    let scores: Vec<u32> = report.shot_scores.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![4, 5, 3, 4]);
    assert_eq!(report.ring_count, 4);
    assert_eq!(report.hit_distribution, vec![2, 1, 0, 0, 1]);
    assert_eq!(report.hit_distribution.iter().sum::<usize>(), pts.len());
    assert_eq!(report.miss_count, 1);
    assert_eq!(report.total_score, 11);
    assert!((report.average_score - 2.75).abs() < 1e-12);
    assert_eq!(report.max_score, 4);
    assert_eq!(report.min_score, 0);
    let expected_std = ((1.25f64.powi(2) * 2.0 + 0.25f64.powi(2) + 2.75f64.powi(2)) / 4.0).sqrt();
    assert!((report.score_std - expected_std).abs() < 1e-12);
}

#[test]
fn test_score_points_rejects_bad_rings() {
    let pts = [center()];
    assert!(score_points(&pts, center(), &[]).unwrap_err().is_insufficient_data());
    assert!(matches!(
        score_points(&pts, center(), &[100.0, 50.0]),
        Err(AnalysisError::Computation { .. })
    ));
}

#[test]
fn test_score_requires_a_point() {
    let target = ScoringContext::new(center(), RADII.to_vec()).unwrap();
    assert!(score::<Point>(&[], &target).unwrap_err().is_insufficient_data());
}
