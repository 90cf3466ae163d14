//! Shot-group analysis: central tendency, dispersion, flyer detection, ring
//! scoring and shot-to-shot progression over detected impact points.
//!
//! Every engine entry point is a pure function of its arguments. The
//! [`input`] and [`report`] modules are the file-facing side used by the
//! `shotgroup-qc` binary.

pub mod analysis;
pub mod input;
pub mod model;
pub mod report;
pub mod stats;

pub use analysis::Analyzer;
pub use model::{
    AnalysisConfig, AnalysisError, AnalysisReport, FlyerMethod, FlyerSettings, Point,
    ScoringContext, Shot, ShotGroup, SotaMetrics,
};
