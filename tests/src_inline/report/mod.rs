use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::analysis::Analyzer;
use crate::model::group::{ScoringContext, ShotGroup};
use crate::model::shot::{Point, Shot};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("shotgroup_qc_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn scenario_b() -> ShotGroup {
    ShotGroup::from_shots(
        [
            (512.0, 512.0),
            (518.0, 508.0),
            (508.0, 518.0),
            (520.0, 520.0),
            (515.0, 525.0),
            (600.0, 600.0),
        ]
        .iter()
        .map(|&(x, y)| Shot::new(x, y))
        .collect(),
    )
}

#[test]
fn test_format_f64_2() {
    assert_eq!(format_f64_2(17.262_676), "17.26");
    assert_eq!(format_f64_2(0.0), "0.00");
}

#[test]
fn test_text_report_sections() {
    let report = Analyzer::default().analyze(&scenario_b()).unwrap();
    let text = text::render_report_text(&report, &ReportMeta::new("shots.json"));
    assert!(text.contains("Input: shots.json"));
    assert!(text.contains("1. Group characteristics"));
    assert!(text.contains("Shots: 6"));
    assert!(text.contains("Flyers: 1"));
    assert!(text.contains("shot #6 criterion 99.47"));
    assert!(text.contains("Trend stability:"));
    assert!(text.contains("No scoring target supplied."));
}

#[test]
fn test_text_report_small_group() {
    let group = ShotGroup::from_shots(vec![Shot::new(1.0, 1.0)])
        .with_target(ScoringContext::new(Point::new(0.0, 0.0), vec![1.0, 2.0]).unwrap());
    let report = Analyzer::default().analyze(&group).unwrap();
    let text = text::render_report_text(&report, &ReportMeta::new("one.json"));
    assert!(text.contains("Group too small for flyer detection; all shots accepted."));
    assert!(text.contains("Not enough shots for progression analysis."));
    assert!(text.contains("  ring 1 (2 pts): 0"));
    assert!(text.contains("  ring 2 (1 pts): 1"));
    assert!(text.contains("  miss: 0"));
}

#[test]
fn test_write_reports() {
    let dir = make_temp_dir().join("out");
    let report = Analyzer::default().analyze(&scenario_b()).unwrap();
    let written = write_reports(&report, &ReportMeta::new("shots.json"), &dir).unwrap();
    assert!(written.text.is_file());

    let raw = fs::read_to_string(&written.summary).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["tool"]["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(doc["input"], "shots.json");
    assert_eq!(doc["metrics"]["total_shots"], 6);
    assert_eq!(doc["metrics"]["flyer_count"], 1);
    assert_eq!(doc["flyers"]["method"], "deviation");
    assert_eq!(doc["flyers"]["rejected"][0], 5);
}
