pub mod aggregate;
pub mod flyers;
pub mod primitives;
pub mod scoring;
pub mod sequential;
pub mod tracking;

pub use aggregate::{Analyzer, aggregate};
pub use flyers::{FlyerPartition, detect_flyers, detect_flyers_by_name, flyer_report};
pub use scoring::{score, score_points};
pub use sequential::analyze_sequence;
