pub mod config;
pub mod error;
pub mod group;
pub mod metrics;
pub mod shot;

pub use config::{AnalysisConfig, FlyerMethod, FlyerSettings};
pub use error::{AnalysisError, GeometryError};
pub use group::{ScoringContext, ShotGroup, TargetSpec};
pub use metrics::{
    AnalysisReport, FlyerReport, GroupCharacteristics, ScoringReport, SequentialMetrics,
    SotaMetrics,
};
pub use shot::{Located, Point, Shot};
