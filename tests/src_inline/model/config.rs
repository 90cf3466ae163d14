use super::*;

#[test]
fn test_flyer_method_parses_canonical_and_legacy_names() {
    assert_eq!("deviation".parse::<FlyerMethod>(), Ok(FlyerMethod::Deviation));
    assert_eq!("std_dev".parse::<FlyerMethod>(), Ok(FlyerMethod::Deviation));
    assert_eq!("IQR".parse::<FlyerMethod>(), Ok(FlyerMethod::Quartile));
    assert_eq!("convex_hull".parse::<FlyerMethod>(), Ok(FlyerMethod::HullDistance));
    assert_eq!("hull-distance".parse::<FlyerMethod>(), Ok(FlyerMethod::HullDistance));
    assert_eq!("distance".parse::<FlyerMethod>(), Ok(FlyerMethod::MeanDistanceRatio));
}

#[test]
fn test_flyer_method_unknown_name() {
    let err = "mahalanobis".parse::<FlyerMethod>().unwrap_err();
    assert_eq!(err, UnknownFlyerMethod("mahalanobis".to_string()));
}

#[test]
fn test_flyer_method_display_roundtrips() {
    for &method in FlyerMethod::all() {
        assert_eq!(method.to_string().parse::<FlyerMethod>(), Ok(method));
    }
}

#[test]
fn test_flyer_settings_follow_method_default() {
    assert_eq!(FlyerSettings::new(FlyerMethod::Quartile).threshold, 1.5);
    assert_eq!(FlyerSettings::new(FlyerMethod::HullDistance).threshold, 20.0);
    assert_eq!(FlyerSettings::default().method, FlyerMethod::Deviation);
    assert_eq!(FlyerSettings::default().threshold, 2.0);
}

#[test]
fn test_config_deserialize_partial() {
    let cfg: AnalysisConfig =
        serde_json::from_str(r#"{"flyers":{"method":"quartile"},"confidence_level":0.9}"#)
            .unwrap();
    assert_eq!(cfg.flyers.method, FlyerMethod::Quartile);
    assert_eq!(cfg.flyers.threshold, 1.5);
    assert_eq!(cfg.confidence_level, 0.9);
    assert_eq!(cfg.cep_probabilities, DEFAULT_CEP_PROBABILITIES.to_vec());
    assert_eq!(cfg.duplicate_radius, DEFAULT_DUPLICATE_RADIUS);
}

#[test]
fn test_config_deserialize_explicit_threshold() {
    let cfg: AnalysisConfig = serde_json::from_str(
        r#"{"flyers":{"method":"mean_distance_ratio","threshold":3.0}}"#,
    )
    .unwrap();
    assert_eq!(cfg.flyers.method, FlyerMethod::MeanDistanceRatio);
    assert_eq!(cfg.flyers.threshold, 3.0);
}

#[test]
fn test_config_empty_document_is_default() {
    let cfg: AnalysisConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, AnalysisConfig::default());
}
