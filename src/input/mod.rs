use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::model::config::AnalysisConfig;
use crate::model::group::{ScoringContext, ShotGroup, TargetSpec};
use crate::model::shot::Shot;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Either a full document or a bare array of shots.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShotFile {
    Document {
        shots: Vec<Shot>,
        #[serde(default)]
        target: Option<TargetSpec>,
    },
    Bare(Vec<Shot>),
}

pub fn load_shot_group(path: &Path) -> Result<ShotGroup, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    let group = parse_shot_group(&text)?;
    tracing::info!(
        path = %path.display(),
        shots = group.len(),
        target = group.target.is_some(),
        "loaded shot group"
    );
    Ok(group)
}

pub fn parse_shot_group(text: &str) -> Result<ShotGroup, InputError> {
    let (shots, target) = match serde_json::from_str::<ShotFile>(text)? {
        ShotFile::Document { shots, target } => (shots, target),
        ShotFile::Bare(shots) => (shots, None),
    };

    for (i, shot) in shots.iter().enumerate() {
        if !shot.x.is_finite() || !shot.y.is_finite() {
            return Err(InputError::InvalidInput(format!(
                "shot {i} has a non-finite coordinate"
            )));
        }
    }

    let target = target
        .map(ScoringContext::try_from)
        .transpose()
        .map_err(|e| InputError::InvalidInput(format!("target: {e}")))?;

    Ok(ShotGroup { shots, target })
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
